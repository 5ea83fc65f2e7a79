use crate::router::{handle, AppState};
use crate::tests::utils::{body_string, database_app, fixture_app, form_body};
use astra::Body;
use http::{Method, Request};

const VALID_LISTING: &[(&str, &str)] = &[
    ("title", "Serviced 2-Bedroom Flat"),
    ("location", "Admiralty Way, Lekki"),
    ("city", "Lagos"),
    ("price", "2500000"),
    ("bedrooms", "2"),
    ("bathrooms", "2"),
    ("area", "110 sqm"),
    ("description", "Fully serviced flat with 24 hour power and security."),
    ("landlord_email", "lekki.owner@example.com"),
    ("landlord_phone", "+2348030000000"),
];

fn post_listing(pairs: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/properties")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("HX-Request", "true")
        .body(form_body(pairs))
        .unwrap()
}

fn get(app: &AppState, uri: &str) -> Result<String, crate::errors::ServerError> {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    handle(req, app).map(body_string)
}

#[test]
fn list_property_page_loads() {
    let app = fixture_app();
    let body = get(&app, "/list-property").unwrap();
    assert!(body.contains("List Your Property"));
    assert!(body.contains(r#"name="landlord_email""#));
}

#[test]
fn valid_listing_is_stored_and_shown_in_database_mode() {
    let app = database_app();

    let body = body_string(handle(post_listing(VALID_LISTING), &app).unwrap());
    assert!(body.contains("Property listed successfully!"));
    assert!(body.contains("Your property is now visible to potential tenants."));

    let grid = get(&app, "/listings?location=Lagos").unwrap();
    assert!(grid.contains("Serviced 2-Bedroom Flat"));
    assert!(grid.contains("₦2,500,000"));
}

#[test]
fn zero_price_is_rejected_without_writing() {
    let app = database_app();
    let mut pairs = VALID_LISTING.to_vec();
    pairs[3] = ("price", "0");

    let body = body_string(handle(post_listing(&pairs), &app).unwrap());
    assert!(body.contains("Price must be a positive number"));
    assert!(body.contains(r#"value="Serviced 2-Bedroom Flat""#));

    let grid = get(&app, "/listings").unwrap();
    assert!(grid.contains("No properties match your filters"));
}

#[test]
fn database_detail_page_shows_contact() {
    let app = database_app();
    handle(post_listing(VALID_LISTING), &app).unwrap();

    let id: i64 = app
        .db
        .with_conn(|conn| Ok(conn.query_row("select id from properties", [], |r| r.get(0))?))
        .unwrap();

    let body = get(&app, &format!("/properties/{id}")).unwrap();
    assert!(body.contains("Serviced 2-Bedroom Flat"));
    assert!(body.contains("Fully serviced flat with 24 hour power and security."));
    assert!(body.contains("mailto:lekki.owner@example.com"));
    assert!(body.contains("2 Bedrooms"));
}

#[test]
fn sample_detail_page_renders_without_contact() {
    let app = fixture_app();
    let body = get(&app, "/properties/3").unwrap();
    assert!(body.contains("Luxury 4-Bedroom House"));
    assert!(body.contains("₦4,800,000"));
    assert!(!body.contains("mailto:"));
}

#[test]
fn unknown_or_malformed_property_id_is_not_found() {
    let app = fixture_app();
    assert!(matches!(
        get(&app, "/properties/99"),
        Err(crate::errors::ServerError::NotFound)
    ));
    assert!(matches!(
        get(&app, "/properties/abc"),
        Err(crate::errors::ServerError::NotFound)
    ));
}
