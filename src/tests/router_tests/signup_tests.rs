use crate::router::handle;
use crate::tests::utils::{body_string, fixture_app, form_body};
use astra::Body;
use http::{Method, Request};

fn post_signup(pairs: &[(&str, &str)], htmx: bool) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/signup")
        .header("Content-Type", "application/x-www-form-urlencoded");
    if htmx {
        builder = builder.header("HX-Request", "true");
    }
    builder.body(form_body(pairs)).unwrap()
}

fn count_signups(app: &crate::router::AppState) -> i64 {
    app.db
        .with_conn(|conn| Ok(conn.query_row("select count(*) from user_signups", [], |r| r.get(0))?))
        .unwrap()
}

#[test]
fn signup_page_loads_successfully() {
    let app = fixture_app();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/signup")
        .body(Body::empty())
        .unwrap();

    let body = body_string(handle(req, &app).expect("Failed to handle request"));
    assert!(body.contains("Join House Matters"));
    assert!(body.contains(r#"name="userType""#));
}

#[test]
fn valid_signup_is_stored_and_form_is_cleared() {
    let app = fixture_app();
    let pairs = [
        ("name", "Amaka Nwosu"),
        ("email", "amaka@example.com"),
        ("phone", "+2348012345678"),
        ("userType", "tenant"),
    ];

    let resp = handle(post_signup(&pairs, true), &app).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Welcome to House Matters!"));
    assert!(body.contains("We'll contact you soon at amaka@example.com"));
    assert!(!body.contains(r#"value="Amaka Nwosu""#));

    // Partial for htmx swapping
    assert!(!body.contains("<!DOCTYPE html>"));
    assert_eq!(count_signups(&app), 1);

    let stored: (String, String) = app
        .db
        .with_conn(|conn| {
            Ok(conn.query_row("select name, user_type from user_signups", [], |r| {
                Ok((r.get(0)?, r.get(1)?))
            })?)
        })
        .unwrap();
    assert_eq!(stored, ("Amaka Nwosu".to_string(), "tenant".to_string()));
}

#[test]
fn invalid_signup_keeps_input_and_shows_field_errors() {
    let app = fixture_app();
    let pairs = [
        ("name", "A"),
        ("email", "amaka@example.com"),
        ("phone", "0801"),
    ];

    let body = body_string(handle(post_signup(&pairs, true), &app).unwrap());
    assert!(body.contains("Name must be at least 2 characters"));
    assert!(body.contains("Phone number must be at least 10 digits"));
    assert!(body.contains("Please select your role"));
    assert!(!body.contains("Invalid email address"));
    assert!(body.contains(r#"value="amaka@example.com""#));
    assert!(!body.contains("Welcome to House Matters!"));
    assert_eq!(count_signups(&app), 0);
}

#[test]
fn non_htmx_post_gets_full_page() {
    let app = fixture_app();
    let pairs = [
        ("name", "Tunde Bakare"),
        ("email", "tunde@example.com"),
        ("phone", "08098765432"),
        ("userType", "landlord"),
    ];

    let body = body_string(handle(post_signup(&pairs, false), &app).unwrap());
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Welcome to House Matters!"));
}

#[test]
fn storage_failure_keeps_input_and_shows_failure_toast() {
    let app = fixture_app();
    app.db
        .with_conn(|conn| Ok(conn.execute_batch("drop table user_signups")?))
        .unwrap();

    let pairs = [
        ("name", "Ifeoma Obi"),
        ("email", "ifeoma@example.com"),
        ("phone", "08011112222"),
        ("userType", "tenant"),
    ];
    let body = body_string(handle(post_signup(&pairs, true), &app).unwrap());

    assert!(body.contains("Signup failed"));
    assert!(body.contains("no such table"));
    assert!(body.contains(r#"value="Ifeoma Obi""#));
}
