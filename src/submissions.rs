// src/submissions.rs

//! Form submission flow: validate, insert one row, pick the toast.
//!
//! Validation failures never reach the store. Store failures are not retried;
//! the caller keeps the typed input so the user can submit again.

use crate::domain::validation::FieldErrors;
use crate::domain::{NewProperty, PropertyForm, Signup, SignupForm};
use crate::storage::{NewRow, Storage, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Destructive,
}

/// A user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Toast {
    pub fn success(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            severity: Severity::Success,
        }
    }

    pub fn failure(title: &str, err: &StorageError) -> Self {
        Self {
            title: title.to_string(),
            description: err.user_message().to_string(),
            severity: Severity::Destructive,
        }
    }
}

#[derive(Debug)]
pub enum Outcome<T> {
    Stored { record: T, toast: Toast },
    Invalid(FieldErrors),
    Failed(Toast),
}

pub fn submit_signup(store: &dyn Storage, form: &SignupForm) -> Outcome<Signup> {
    let signup = match Signup::validate(form) {
        Ok(signup) => signup,
        Err(errors) => {
            tracing::info!(count = errors.len(), fields = ?errors.summary(), "signup rejected by validation");
            return Outcome::Invalid(errors);
        }
    };

    match store.insert_one(NewRow::Signup(&signup)) {
        Ok(()) => {
            tracing::info!(user_type = %signup.user_type, "signup stored");
            let toast = Toast::success(
                "Welcome to House Matters!",
                format!("We'll contact you soon at {}", signup.email),
            );
            Outcome::Stored {
                record: signup,
                toast,
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "signup insert failed");
            Outcome::Failed(Toast::failure("Signup failed", &err))
        }
    }
}

pub fn submit_property(store: &dyn Storage, form: &PropertyForm) -> Outcome<NewProperty> {
    let property = match NewProperty::validate(form) {
        Ok(property) => property,
        Err(errors) => {
            tracing::info!(count = errors.len(), fields = ?errors.summary(), "listing rejected by validation");
            return Outcome::Invalid(errors);
        }
    };

    match store.insert_one(NewRow::Property(&property)) {
        Ok(()) => {
            tracing::info!(city = %property.city, "listing stored");
            Outcome::Stored {
                record: property,
                toast: Toast::success(
                    "Property listed successfully!",
                    "Your property is now visible to potential tenants.",
                ),
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "listing insert failed");
            Outcome::Failed(Toast::failure("Failed to list property", &err))
        }
    }
}
