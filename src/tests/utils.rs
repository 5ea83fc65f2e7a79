use crate::config::ListingSource;
use crate::db::connection::{init_db, Database};
use crate::router::AppState;
use astra::{Body, Response};
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

/// Initialize a fresh test DB using the production schema
pub fn init_test_db() -> Database {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!(
        "house_matters_test_{}_{}_{}.sqlite",
        std::process::id(),
        nanos,
        NEXT_DB.fetch_add(1, Ordering::Relaxed)
    ));

    let db = Database::new(path.to_string_lossy().into_owned());
    init_db(&db, "sql/schema.sql").unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    db
}

pub fn fixture_app() -> AppState {
    AppState::new(init_test_db(), ListingSource::Fixture)
}

pub fn database_app() -> AppState {
    AppState::new(init_test_db(), ListingSource::Database)
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn form_body(pairs: &[(&str, &str)]) -> Body {
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    Body::from(encoded)
}
