// src/domain/filter.rs

use crate::domain::property::PropertyRecord;

/// Keyword for "no constraint" in the location and bedroom selects.
pub const ALL: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LocationFilter {
    #[default]
    All,
    /// Case-sensitive substring of the record's location.
    Contains(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BedroomFilter {
    #[default]
    All,
    /// Exact match on the bedroom count's decimal form, so "4" does not match 5.
    Exactly(String),
}

impl LocationFilter {
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            None | Some(ALL) | Some("") => LocationFilter::All,
            Some(value) => LocationFilter::Contains(value.to_string()),
        }
    }

    pub fn as_param(&self) -> &str {
        match self {
            LocationFilter::All => ALL,
            LocationFilter::Contains(value) => value,
        }
    }
}

impl BedroomFilter {
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            None | Some(ALL) | Some("") => BedroomFilter::All,
            Some(value) => BedroomFilter::Exactly(value.to_string()),
        }
    }

    pub fn as_param(&self) -> &str {
        match self {
            BedroomFilter::All => ALL,
            BedroomFilter::Exactly(value) => value,
        }
    }
}

/// Current search/filter selection. `Default` is the cleared state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_text: String,
    pub location: LocationFilter,
    pub bedrooms: BedroomFilter,
}

impl FilterCriteria {
    pub fn is_cleared(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, record: &PropertyRecord) -> bool {
        self.matches_search(record) && self.matches_location(record) && self.matches_bedrooms(record)
    }

    fn matches_search(&self, record: &PropertyRecord) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        record.title.to_lowercase().contains(&needle)
            || record.location.to_lowercase().contains(&needle)
    }

    fn matches_location(&self, record: &PropertyRecord) -> bool {
        match &self.location {
            LocationFilter::All => true,
            LocationFilter::Contains(city) => record.location.contains(city.as_str()),
        }
    }

    fn matches_bedrooms(&self, record: &PropertyRecord) -> bool {
        match &self.bedrooms {
            BedroomFilter::All => true,
            BedroomFilter::Exactly(count) => record.bedrooms.to_string() == *count,
        }
    }
}

/// Records matching every criterion, in their original order.
pub fn filter_properties<'a>(
    records: &'a [PropertyRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a PropertyRecord> {
    records.iter().filter(|r| criteria.matches(r)).collect()
}

/// Options for the location select: the last comma-separated part of each
/// location (the city), deduplicated in first-seen order.
pub fn location_options(records: &[PropertyRecord]) -> Vec<String> {
    let mut cities: Vec<String> = Vec::new();
    for record in records {
        let city = record.city();
        if !city.is_empty() && !cities.iter().any(|c| c == city) {
            cities.push(city.to_string());
        }
    }
    cities
}

/// Bedroom select options as `(value, label)`. The last label reads "4+" but
/// the filter still matches exactly 4.
pub const BEDROOM_OPTIONS: &[(&str, &str)] = &[
    ("1", "1 Bed"),
    ("2", "2 Beds"),
    ("3", "3 Beds"),
    ("4", "4+ Beds"),
];
