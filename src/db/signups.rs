// src/db/signups.rs
use crate::domain::Signup;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection};

pub fn insert_signup(
    conn: &Connection,
    signup: &Signup,
    now: NaiveDateTime,
) -> rusqlite::Result<i64> {
    conn.execute(
        r#"
        insert into user_signups (name, email, phone, user_type, created_at)
        values (?1, ?2, ?3, ?4, ?5)
        "#,
        params![
            &signup.name,
            &signup.email,
            &signup.phone,
            signup.user_type.as_str(),
            now
        ],
    )?;
    Ok(conn.last_insert_rowid())
}
