use crate::router::handle;
use crate::tests::utils::{body_string, fixture_app};
use astra::Body;
use http::{Method, Request};

fn grid(query: &str) -> String {
    let app = fixture_app();
    let req = Request::builder()
        .method(Method::GET)
        .uri(format!("/listings{query}"))
        .header("HX-Request", "true")
        .body(Body::empty())
        .unwrap();
    let resp = handle(req, &app).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);
    body_string(resp)
}

#[test]
fn grid_is_a_fragment() {
    let body = grid("");
    assert!(body.starts_with(r#"<div id="listing-grid">"#));
    assert!(!body.contains("<html"));
}

#[test]
fn search_text_matches_title_case_insensitively() {
    let body = grid("?search=DUPLEX");
    assert!(body.contains("Spacious 2-Bedroom Duplex"));
    assert!(!body.contains("Modern 3-Bedroom Apartment"));
    assert!(!body.contains("Luxury 4-Bedroom House"));
    assert!(body.contains("Clear filters"));
}

#[test]
fn location_filter_matches_city() {
    let body = grid("?location=Lagos");
    assert!(body.contains("Modern 3-Bedroom Apartment"));
    assert!(!body.contains("Spacious 2-Bedroom Duplex"));
}

#[test]
fn bedroom_filter_matches_exactly() {
    let body = grid("?bedrooms=4");
    assert!(body.contains("Luxury 4-Bedroom House"));
    assert!(!body.contains("Modern 3-Bedroom Apartment"));
}

#[test]
fn no_match_shows_empty_state() {
    let body = grid("?search=penthouse&location=all&bedrooms=all");
    assert!(body.contains("No properties match your filters"));
}

#[test]
fn clear_filters_refetches_the_unfiltered_section() {
    let body = grid("?search=penthouse");
    assert!(body.contains(r#"hx-get="/""#));
    assert!(body.contains(r##"hx-select="#listings""##));
    assert!(body.contains(r##"hx-target="#listings""##));
    assert!(body.contains(r##"href="/#listings""##));

    // What that request gets back: the whole section, filters reset.
    let app = fixture_app();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .header("HX-Request", "true")
        .body(Body::empty())
        .unwrap();
    let page = body_string(handle(req, &app).unwrap());
    assert!(page.contains(r#"<section id="listings""#));
    assert!(page.contains(r#"value="""#));
    assert!(page.contains("Modern 3-Bedroom Apartment"));
    assert!(page.contains("Spacious 2-Bedroom Duplex"));
    assert!(page.contains("Luxury 4-Bedroom House"));
}

#[test]
fn cleared_filters_show_everything() {
    let body = grid("?search=&location=all&bedrooms=all");
    assert!(body.contains("Modern 3-Bedroom Apartment"));
    assert!(body.contains("Spacious 2-Bedroom Duplex"));
    assert!(body.contains("Luxury 4-Bedroom House"));
    assert!(!body.contains("Clear filters"));
}

#[test]
fn json_listing_endpoint_filters() {
    let app = fixture_app();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/api/listings?bedrooms=2")
        .body(Body::empty())
        .unwrap();
    let body = body_string(handle(req, &app).unwrap());

    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], 2);
    assert_eq!(items[0]["location"], "Maitama, Abuja");
    assert!(items[0]["image_ref"].is_null());
}
