// src/domain/validation.rs

//! Ordered per-field rule tables.
//!
//! A schema is a list of fields, each with rules evaluated in order against the
//! trimmed input. The first rule that fails produces the field's only message;
//! later rules for that field are not evaluated. Evaluation is pure.

use std::str::FromStr;
use validator::{ValidateEmail, ValidateLength};

/// Class of rule a field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    Length,
    Format,
    Enum,
    Numeric,
}

#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// At least `n` characters.
    MinChars(usize, &'static str),
    /// At most `n` characters.
    MaxChars(usize, &'static str),
    /// An address with a dotted public domain. Length is a separate rule.
    Email(&'static str),
    OneOf(&'static [&'static str], &'static str),
    /// Parses as a finite number greater than zero.
    Positive(&'static str),
}

impl Rule {
    fn kind(&self) -> ViolationKind {
        match self {
            Rule::MinChars(..) | Rule::MaxChars(..) => ViolationKind::Length,
            Rule::Email(_) => ViolationKind::Format,
            Rule::OneOf(..) => ViolationKind::Enum,
            Rule::Positive(_) => ViolationKind::Numeric,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Rule::MinChars(_, m)
            | Rule::MaxChars(_, m)
            | Rule::Email(m)
            | Rule::OneOf(_, m)
            | Rule::Positive(m) => m,
        }
    }

    fn passes(&self, value: &str) -> bool {
        match self {
            Rule::MinChars(n, _) => value.validate_length(Some(*n as u64), None, None),
            Rule::MaxChars(n, _) => value.validate_length(None, Some(*n as u64), None),
            Rule::Email(_) => value.validate_email() && has_public_shape(value),
            Rule::OneOf(allowed, _) => allowed.iter().any(|a| *a == value),
            Rule::Positive(_) => parse_positive(value).is_some(),
        }
    }
}

/// What `ValidateEmail` lets through but a signup address must not have:
/// a dotless or bracketed domain, a TLD shorter than two letters, or a local
/// part that starts, ends or repeats a dot.
fn has_public_shape(address: &str) -> bool {
    let Some((local, domain)) = address.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }

    let Some((labels, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());
    let labels_ok = labels.split('.').all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    tld_ok && labels_ok
}

/// Rules for one named field.
#[derive(Debug)]
pub struct FieldRules {
    pub field: &'static str,
    pub rules: &'static [Rule],
}

pub type Schema = &'static [FieldRules];

/// Raw, string-typed form input addressable by field name.
pub trait FormInput {
    fn field(&self, name: &str) -> Option<&str>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub kind: ViolationKind,
    pub message: &'static str,
}

/// At most one message per field, in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn message(&self, field: &str) -> Option<&'static str> {
        self.get(field).map(|e| e.message)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.iter().map(|e| e.field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// The error `schema` reports for `field` under its first rule.
    fn rejecting(schema: Schema, field: &'static str) -> Self {
        let error = match schema.iter().find(|f| f.field == field).and_then(|f| f.rules.first()) {
            Some(rule) => FieldError {
                field,
                kind: rule.kind(),
                message: rule.message(),
            },
            None => FieldError {
                field,
                kind: ViolationKind::Format,
                message: "Invalid value",
            },
        };
        Self { errors: vec![error] }
    }

    /// `field:kind` pairs for logs; never includes submitted values.
    pub fn summary(&self) -> Vec<String> {
        self.iter()
            .map(|e| format!("{}:{:?}", e.field, e.kind))
            .collect()
    }
}

/// Runs every field of `schema` against `input`. A missing field is treated as
/// an empty string.
pub fn validate(schema: Schema, input: &dyn FormInput) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    for field in schema {
        let value = input.field(field.field).unwrap_or("").trim();

        if let Some(rule) = field.rules.iter().find(|rule| !rule.passes(value)) {
            errors.errors.push(FieldError {
                field: field.field,
                kind: rule.kind(),
                message: rule.message(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Trimmed input as a finite number strictly greater than zero.
pub fn parse_positive(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n > 0.0)
}

/// Trimmed `name` parsed as `T`. A value the parser refuses is reported with
/// the field's first rule in `schema`; there is no fallback value.
pub fn parse_field<T: FromStr>(
    schema: Schema,
    input: &dyn FormInput,
    name: &'static str,
) -> Result<T, FieldErrors> {
    input
        .field(name)
        .unwrap_or("")
        .trim()
        .parse()
        .map_err(|_| FieldErrors::rejecting(schema, name))
}

/// Like [`parse_field`] for numbers that must be finite and above zero.
pub fn positive_field(
    schema: Schema,
    input: &dyn FormInput,
    name: &'static str,
) -> Result<f64, FieldErrors> {
    parse_positive(input.field(name).unwrap_or(""))
        .ok_or_else(|| FieldErrors::rejecting(schema, name))
}

/// Input value for `name`, trimmed, or empty when absent.
pub fn trimmed(input: &dyn FormInput, name: &str) -> String {
    input.field(name).unwrap_or("").trim().to_string()
}
