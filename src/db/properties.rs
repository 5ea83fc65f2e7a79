// src/db/properties.rs
use crate::db::connection::Database;
use crate::domain::property::LandlordContact;
use crate::domain::{NewProperty, PropertyDetail, PropertyRecord};
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension, Row};

// Bedroom and bathroom counts are stored as entered; cards show whole numbers.
const RECORD_COLUMNS: &str = r#"
    id, image_url, title, location, price,
    cast(bedrooms as integer), cast(bathrooms as integer),
    area, featured
"#;

pub fn insert_property(
    conn: &Connection,
    prop: &NewProperty,
    now: NaiveDateTime,
) -> rusqlite::Result<i64> {
    let mut stmt = conn.prepare(
        r#"
        insert into properties (
            title, location, city, price, bedrooms, bathrooms, area,
            description, landlord_email, landlord_phone, created_at
        ) values (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
        "#,
    )?;
    stmt.execute(params![
        &prop.title,
        &prop.location,
        &prop.city,
        prop.price,
        prop.bedrooms,
        prop.bathrooms,
        &prop.area,
        &prop.description,
        &prop.landlord_email,
        &prop.landlord_phone,
        now,
    ])?;
    Ok(conn.last_insert_rowid())
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<PropertyRecord> {
    let image_url: Option<String> = row.get(1)?;
    Ok(PropertyRecord {
        id: row.get(0)?,
        image_ref: image_url.filter(|s| !s.trim().is_empty()),
        title: row.get(2)?,
        location: row.get(3)?,
        price: row.get(4)?,
        bedrooms: row.get(5)?,
        bathrooms: row.get(6)?,
        area: row.get(7)?,
        featured: row.get(8)?,
    })
}

/// All persisted listings, newest first.
pub fn list_properties(db: &Database) -> Result<Vec<PropertyRecord>, ServerError> {
    db.with_conn(|conn| {
        let sql = format!("select {RECORD_COLUMNS} from properties order by created_at desc, id desc");
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], record_from_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    })
}

pub fn find_property(db: &Database, id: i64) -> Result<Option<PropertyDetail>, ServerError> {
    db.with_conn(|conn| {
        let sql = format!(
            "select {RECORD_COLUMNS}, description, landlord_email, landlord_phone \
             from properties where id = ?1"
        );
        let detail = conn
            .query_row(&sql, params![id], |row| {
                Ok(PropertyDetail {
                    record: record_from_row(row)?,
                    description: row.get(9)?,
                    contact: Some(LandlordContact {
                        email: row.get(10)?,
                        phone: row.get(11)?,
                    }),
                })
            })
            .optional()?;
        Ok(detail)
    })
}
