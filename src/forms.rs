// src/forms.rs
use crate::domain::filter::{BedroomFilter, FilterCriteria, LocationFilter};
use crate::domain::validation::FormInput;
use crate::errors::ServerError;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;

/// Largest urlencoded body we accept; the longest form is well under this.
const MAX_FORM_BYTES: u64 = 16 * 1024;

/// Decoded `application/x-www-form-urlencoded` pairs. Repeated keys keep the last value.
#[derive(Debug, Default, Clone)]
pub struct FormData(HashMap<String, String>);

impl FormData {
    pub fn parse(raw: &[u8]) -> Self {
        Self(url::form_urlencoded::parse(raw).into_owned().collect())
    }

    pub fn from_query(req: &Request) -> Self {
        req.uri()
            .query()
            .map(|q| Self::parse(q.as_bytes()))
            .unwrap_or_default()
    }

    pub fn from_body(req: Request) -> Result<Self, ServerError> {
        let mut raw = Vec::new();
        req.into_body()
            .reader()
            .take(MAX_FORM_BYTES + 1)
            .read_to_end(&mut raw)
            .map_err(|e| ServerError::BadRequest(format!("could not read form body: {e}")))?;

        if raw.len() as u64 > MAX_FORM_BYTES {
            return Err(ServerError::BadRequest("form body too large".into()));
        }
        Ok(Self::parse(&raw))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Filter selection from `search`, `location` and `bedrooms`.
    pub fn filter_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search_text: self.get("search").unwrap_or("").to_string(),
            location: LocationFilter::from_param(self.get("location")),
            bedrooms: BedroomFilter::from_param(self.get("bedrooms")),
        }
    }
}

impl FormInput for FormData {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}
