// src/domain/property.rs

use crate::domain::validation::{self, FieldErrors, FieldRules, FormInput, Rule, Schema};
use serde::Serialize;

pub const LISTING_SCHEMA: Schema = &[
    FieldRules {
        field: "title",
        rules: &[
            Rule::MinChars(5, "Title must be at least 5 characters"),
            Rule::MaxChars(100, "Title is too long"),
        ],
    },
    FieldRules {
        field: "location",
        rules: &[
            Rule::MinChars(5, "Location must be at least 5 characters"),
            Rule::MaxChars(200, "Location is too long"),
        ],
    },
    FieldRules {
        field: "city",
        rules: &[
            Rule::MinChars(2, "City is required"),
            Rule::MaxChars(50, "City name is too long"),
        ],
    },
    FieldRules {
        field: "price",
        rules: &[Rule::Positive("Price must be a positive number")],
    },
    FieldRules {
        field: "bedrooms",
        rules: &[Rule::Positive("Bedrooms must be a positive number")],
    },
    FieldRules {
        field: "bathrooms",
        rules: &[Rule::Positive("Bathrooms must be a positive number")],
    },
    FieldRules {
        field: "area",
        rules: &[Rule::MinChars(2, "Area is required")],
    },
    FieldRules {
        field: "description",
        rules: &[
            Rule::MinChars(20, "Description must be at least 20 characters"),
            Rule::MaxChars(1000, "Description is too long"),
        ],
    },
    FieldRules {
        field: "landlord_email",
        rules: &[
            Rule::MaxChars(255, "Email is too long"),
            Rule::Email("Invalid email address"),
        ],
    },
    FieldRules {
        field: "landlord_phone",
        rules: &[
            Rule::MinChars(10, "Phone number must be at least 10 digits"),
            Rule::MaxChars(15, "Phone number is too long"),
        ],
    },
];

/// The list-property form as typed. Numbers stay strings until validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyForm {
    pub title: String,
    pub location: String,
    pub city: String,
    pub price: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub area: String,
    pub description: String,
    pub landlord_email: String,
    pub landlord_phone: String,
}

impl FormInput for PropertyForm {
    fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "title" => &self.title,
            "location" => &self.location,
            "city" => &self.city,
            "price" => &self.price,
            "bedrooms" => &self.bedrooms,
            "bathrooms" => &self.bathrooms,
            "area" => &self.area,
            "description" => &self.description,
            "landlord_email" => &self.landlord_email,
            "landlord_phone" => &self.landlord_phone,
            _ => return None,
        };
        Some(value)
    }
}

impl PropertyForm {
    pub fn from_input(input: &dyn FormInput) -> Self {
        let raw = |name: &str| input.field(name).unwrap_or("").to_string();
        Self {
            title: raw("title"),
            location: raw("location"),
            city: raw("city"),
            price: raw("price"),
            bedrooms: raw("bedrooms"),
            bathrooms: raw("bathrooms"),
            area: raw("area"),
            description: raw("description"),
            landlord_email: raw("landlord_email"),
            landlord_phone: raw("landlord_phone"),
        }
    }
}

/// A listing that passed `LISTING_SCHEMA`: strings trimmed, numbers parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProperty {
    pub title: String,
    pub location: String,
    pub city: String,
    pub price: f64,
    pub bedrooms: f64,
    pub bathrooms: f64,
    pub area: String,
    pub description: String,
    pub landlord_email: String,
    pub landlord_phone: String,
}

impl NewProperty {
    pub fn validate(form: &PropertyForm) -> Result<Self, FieldErrors> {
        validation::validate(LISTING_SCHEMA, form)?;

        Ok(Self {
            title: validation::trimmed(form, "title"),
            location: validation::trimmed(form, "location"),
            city: validation::trimmed(form, "city"),
            price: validation::positive_field(LISTING_SCHEMA, form, "price")?,
            bedrooms: validation::positive_field(LISTING_SCHEMA, form, "bedrooms")?,
            bathrooms: validation::positive_field(LISTING_SCHEMA, form, "bathrooms")?,
            area: validation::trimmed(form, "area"),
            description: validation::trimmed(form, "description"),
            landlord_email: validation::trimmed(form, "landlord_email"),
            landlord_phone: validation::trimmed(form, "landlord_phone"),
        })
    }
}

impl From<&NewProperty> for PropertyForm {
    fn from(p: &NewProperty) -> Self {
        Self {
            title: p.title.clone(),
            location: p.location.clone(),
            city: p.city.clone(),
            price: p.price.to_string(),
            bedrooms: p.bedrooms.to_string(),
            bathrooms: p.bathrooms.to_string(),
            area: p.area.clone(),
            description: p.description.clone(),
            landlord_email: p.landlord_email.clone(),
            landlord_phone: p.landlord_phone.clone(),
        }
    }
}

/// A card in the listing grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyRecord {
    pub id: i64,
    /// Photo URL. `None` renders a placeholder block.
    pub image_ref: Option<String>,
    pub title: String,
    pub location: String,
    pub price: f64,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub area: String,
    pub featured: bool,
}

impl PropertyRecord {
    /// Last comma-separated part of the location, e.g. `Lagos`.
    pub fn city(&self) -> &str {
        self.location.rsplit(',').next().unwrap_or(&self.location).trim()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandlordContact {
    pub email: String,
    pub phone: String,
}

/// Everything the detail page shows. Sample records carry no description or contact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyDetail {
    pub record: PropertyRecord,
    pub description: Option<String>,
    pub contact: Option<LandlordContact>,
}

/// Formats a yearly rent the way the cards show it, e.g. `₦2,500,000`.
pub fn format_naira(price: f64) -> String {
    let whole = price.round().max(0.0) as u64;
    let digits = whole.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("₦{grouped}")
}
