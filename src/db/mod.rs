pub mod connection;
pub mod properties;
pub mod signups;

pub use connection::Database;

use crate::errors::ServerError;
use crate::storage::{NewRow, Storage, StorageError};
use chrono::Utc;

impl Storage for Database {
    fn insert_one(&self, row: NewRow<'_>) -> Result<(), StorageError> {
        let now = Utc::now().naive_utc();

        let inserted = self.with_conn(|conn| {
            let id = match row {
                NewRow::Signup(signup) => signups::insert_signup(conn, signup, now)?,
                NewRow::Property(prop) => properties::insert_property(conn, prop, now)?,
            };
            Ok(id)
        });

        match inserted {
            Ok(id) => {
                tracing::debug!(table = row.table().name(), id, "row inserted");
                Ok(())
            }
            Err(ServerError::DbError(msg)) => Err(StorageError::Rejected(msg)),
            Err(_) => Err(StorageError::Unavailable),
        }
    }
}
