// src/domain/fixtures.rs

use crate::domain::property::{PropertyDetail, PropertyRecord};

/// The sample listings shown when the site runs without persisted properties.
pub fn sample_properties() -> Vec<PropertyRecord> {
    vec![
        PropertyRecord {
            id: 1,
            image_ref: None,
            title: "Modern 3-Bedroom Apartment".into(),
            location: "Lekki Phase 1, Lagos".into(),
            price: 2_500_000.0,
            bedrooms: 3,
            bathrooms: 2,
            area: "120 sqm".into(),
            featured: true,
        },
        PropertyRecord {
            id: 2,
            image_ref: None,
            title: "Spacious 2-Bedroom Duplex".into(),
            location: "Maitama, Abuja".into(),
            price: 3_200_000.0,
            bedrooms: 2,
            bathrooms: 2,
            area: "150 sqm".into(),
            featured: false,
        },
        PropertyRecord {
            id: 3,
            image_ref: None,
            title: "Luxury 4-Bedroom House".into(),
            location: "GRA Phase 2, Port Harcourt".into(),
            price: 4_800_000.0,
            bedrooms: 4,
            bathrooms: 3,
            area: "200 sqm".into(),
            featured: true,
        },
    ]
}

pub fn sample_detail(id: i64) -> Option<PropertyDetail> {
    sample_properties()
        .into_iter()
        .find(|r| r.id == id)
        .map(|record| PropertyDetail {
            record,
            description: None,
            contact: None,
        })
}
