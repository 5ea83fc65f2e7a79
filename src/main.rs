use crate::config::AppConfig;
use crate::db::connection::{init_db, Database};
use crate::responses::error_to_response;
use crate::router::{handle, AppState};
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod db;
mod domain;
mod errors;
mod forms;
mod responses;
mod router;
mod storage;
mod submissions;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "house_matters=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 1️⃣ Configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    let addr = match config.bind_addr() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(error = %e, "invalid bind address");
            std::process::exit(1);
        }
    };

    // 2️⃣ Database from schema.sql
    let db = Database::new(config.database_path.clone());
    if let Err(e) = init_db(&db, &config.schema_path) {
        tracing::error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }

    let app = AppState::new(db, config.listing_source);

    // 3️⃣ Start the server
    tracing::info!(
        %addr,
        workers = config.max_workers,
        listing_source = ?config.listing_source,
        "starting server"
    );

    let server = Server::bind(&addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down cleanly");
}
