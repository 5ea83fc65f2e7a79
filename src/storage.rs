// src/storage.rs
use crate::domain::{NewProperty, Signup};

/// Shown when the store gives no message of its own.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Signups,
    Properties,
}

impl Table {
    pub fn name(&self) -> &'static str {
        match self {
            Table::Signups => "user_signups",
            Table::Properties => "properties",
        }
    }
}

/// One validated row on its way to the store.
#[derive(Debug, Clone, Copy)]
pub enum NewRow<'a> {
    Signup(&'a Signup),
    Property(&'a NewProperty),
}

impl NewRow<'_> {
    pub fn table(&self) -> Table {
        match self {
            NewRow::Signup(_) => Table::Signups,
            NewRow::Property(_) => Table::Properties,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The store refused the row and said why.
    #[error("{0}")]
    Rejected(String),

    #[error("storage unavailable")]
    Unavailable,
}

impl StorageError {
    /// The store's own message verbatim, else the generic one.
    pub fn user_message(&self) -> &str {
        match self {
            StorageError::Rejected(msg) if !msg.trim().is_empty() => msg,
            _ => GENERIC_FAILURE,
        }
    }
}

/// Insert-only sink for form submissions. No upsert, no dedup, no retry.
pub trait Storage {
    fn insert_one(&self, row: NewRow<'_>) -> Result<(), StorageError>;
}
