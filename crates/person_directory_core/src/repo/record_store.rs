//! Record store contracts and SQLite key-value implementation.
//!
//! # Responsibility
//! - Persist the full person collection as one JSON array under a fixed key.
//! - Recover from absent or malformed stored values with an empty collection.
//!
//! # Invariants
//! - `save` replaces the whole collection in a single write.
//! - `load` never fails; read and parse problems are logged and yield `[]`.

use crate::db::DbError;
use crate::model::person::Person;
use log::{debug, error, info, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised while writing the collection.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize records: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Durable storage for the whole record collection.
pub trait RecordStore {
    /// Reads the stored collection, or an empty one when nothing usable is stored.
    fn load(&self) -> Vec<Person>;
    /// Overwrites the stored collection with `records`.
    fn save(&self, records: &[Person]) -> StoreResult<()>;
}

/// SQLite-backed store writing into the `kv_store` table.
pub struct SqliteRecordStore<'conn> {
    conn: &'conn Connection,
    key: String,
}

impl<'conn> SqliteRecordStore<'conn> {
    pub fn new(conn: &'conn Connection, key: impl Into<String>) -> Self {
        Self {
            conn,
            key: key.into(),
        }
    }

    /// Storage key this store reads and writes.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the raw stored value, if any.
    pub fn read_raw(&self) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [self.key.as_str()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Writes `value` verbatim under this store's key.
    pub fn write_raw(&self, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![self.key.as_str(), value],
        )?;
        Ok(())
    }
}

impl RecordStore for SqliteRecordStore<'_> {
    fn load(&self) -> Vec<Person> {
        let raw = match self.read_raw() {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("event=records_load module=store status=empty reason=missing_key");
                return Vec::new();
            }
            Err(err) => {
                error!(
                    "event=records_load module=store status=error error_code=read_failed error={}",
                    err
                );
                return Vec::new();
            }
        };

        match decode_records(&raw) {
            Ok(records) => {
                info!(
                    "event=records_load module=store status=ok count={}",
                    records.len()
                );
                records
            }
            Err(err) => {
                warn!(
                    "event=records_load module=store status=recovered error_code=parse_failed line={} column={}",
                    err.line(),
                    err.column()
                );
                Vec::new()
            }
        }
    }

    fn save(&self, records: &[Person]) -> StoreResult<()> {
        let encoded = serde_json::to_string(records)?;
        self.write_raw(&encoded)?;
        debug!(
            "event=records_save module=store status=ok count={} bytes={}",
            records.len(),
            encoded.len()
        );
        Ok(())
    }
}

/// Parses a stored JSON array of records.
///
/// `null` is treated like an absent value.
pub fn decode_records(raw: &str) -> Result<Vec<Person>, serde_json::Error> {
    let records: Option<Vec<Person>> = serde_json::from_str(raw)?;
    Ok(records.unwrap_or_default())
}
