// src/config.rs
use std::net::SocketAddr;

/// Where the listing grid gets its records from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingSource {
    /// The three built-in sample records.
    Fixture,
    /// Rows written through the list-property form.
    Database,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Application configuration loaded from environment variables.
///
/// | Env Var          | Default                 |
/// |------------------|-------------------------|
/// | `HOST`           | `127.0.0.1`             |
/// | `PORT`           | `3000`                  |
/// | `MAX_WORKERS`    | `8`                     |
/// | `DATABASE_PATH`  | `house_matters.sqlite3` |
/// | `SCHEMA_PATH`    | `sql/schema.sql`        |
/// | `LISTING_SOURCE` | `fixture`               |
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub max_workers: usize,
    pub database_path: String,
    pub schema_path: String,
    pub listing_source: ListingSource,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_workers: 8,
            database_path: "house_matters.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            listing_source: ListingSource::Fixture,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                expected: "a valid u16",
                value: v,
            })?,
            None => defaults.port,
        };

        let max_workers = match lookup("MAX_WORKERS") {
            Some(v) => match v.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "MAX_WORKERS",
                        expected: "a positive integer",
                        value: v,
                    })
                }
            },
            None => defaults.max_workers,
        };

        let listing_source = match lookup("LISTING_SOURCE").as_deref().map(str::trim) {
            None | Some("fixture") => ListingSource::Fixture,
            Some("database") => ListingSource::Database,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "LISTING_SOURCE",
                    expected: "`fixture` or `database`",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            max_workers,
            database_path: lookup("DATABASE_PATH").unwrap_or(defaults.database_path),
            schema_path: lookup("SCHEMA_PATH").unwrap_or(defaults.schema_path),
            listing_source,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::Invalid {
            var: "HOST",
            expected: "an IP address",
            value: self.host.clone(),
        })
    }
}
