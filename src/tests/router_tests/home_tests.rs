use crate::router::handle;
use crate::tests::utils::{body_string, fixture_app};
use astra::Body;
use http::{Method, Request};

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn home_page_renders_every_section() {
    let app = fixture_app();
    let resp = handle(get("/"), &app).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Find Your Perfect Home, Without the Fees"));
    assert!(body.contains("How It Works"));
    assert!(body.contains("Everything You Need, All in One Place"));
    assert!(body.contains("Built for Landlords &amp; Tenants"));
    assert!(body.contains("Featured Properties"));
    assert!(body.contains("Ready to Transform Your Rental Experience?"));
    assert!(body.contains("© 2025 House Matters"));
}

#[test]
fn home_page_lists_all_samples_in_order() {
    let app = fixture_app();
    let body = body_string(handle(get("/"), &app).unwrap());

    let first = body.find("Modern 3-Bedroom Apartment").unwrap();
    let second = body.find("Spacious 2-Bedroom Duplex").unwrap();
    let third = body.find("Luxury 4-Bedroom House").unwrap();
    assert!(first < second && second < third);
    assert!(body.contains("₦2,500,000"));
}

#[test]
fn home_page_applies_query_filters() {
    let app = fixture_app();
    let body = body_string(handle(get("/?location=Abuja&bedrooms=all"), &app).unwrap());

    assert!(body.contains("Spacious 2-Bedroom Duplex"));
    assert!(!body.contains("Luxury 4-Bedroom House"));
    assert!(body.contains(r#"<option value="Abuja" selected>"#));
}

#[test]
fn stylesheet_is_served() {
    let app = fixture_app();
    let resp = handle(get("/static/main.css"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
}

#[test]
fn unknown_path_is_not_found() {
    let app = fixture_app();
    match handle(get("/nope"), &app) {
        Err(crate::errors::ServerError::NotFound) => {}
        Err(other) => panic!("expected NotFound, got: {:?}", other),
        Ok(resp) => panic!("expected NotFound, got status {}", resp.status()),
    }
}

/// Every `src="/..."` and `href="/static/..."` in `body`.
fn local_assets(body: &str) -> Vec<String> {
    let mut assets = Vec::new();
    for marker in [r#"src="/"#, r#"href="/static/"#] {
        let mut rest = body;
        while let Some(start) = rest.find(marker) {
            let value = &rest[start + marker.find('/').unwrap_or(0)..];
            let end = value.find('"').unwrap_or(value.len());
            assets.push(value[..end].to_string());
            rest = &value[end..];
        }
    }
    assets
}

#[test]
fn every_local_asset_on_the_home_page_is_served() {
    let app = fixture_app();
    let body = body_string(handle(get("/"), &app).unwrap());

    let assets = local_assets(&body);
    assert!(assets.contains(&"/static/main.css".to_string()));
    for asset in assets {
        let resp = handle(get(&asset), &app).unwrap_or_else(|e| panic!("{asset}: {e}"));
        assert_eq!(resp.status(), 200, "{asset}");
    }
}

#[test]
fn sample_cards_use_placeholders_instead_of_photos() {
    let app = fixture_app();
    let body = body_string(handle(get("/"), &app).unwrap());

    assert!(!body.contains("/static/images/"));
    assert!(body.contains(r#"class="card-image image-placeholder""#));
    assert!(body.contains("<span>Port Harcourt</span>"));

    let detail = body_string(handle(get("/properties/2"), &app).unwrap());
    assert!(detail.contains(r#"class="detail-image image-placeholder""#));
    assert!(detail.contains("<span>Abuja</span>"));
}
