use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, OptionalExtension};
use std::path::Path;
use thiserror::Error;

const TABLENAME: &str = "data";
const KEY_FIELD: &str = "_id";
const VALUE_FIELD: &str = "file";

/// Row holding the current serialized settings document
pub const CURRENT_SETTINGS_ID: i64 = 1;

#[derive(Error, Debug)]
pub enum SettingsDbError {
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
    #[error("settings blob is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("unexpected column type for settings blob: {0}")]
    UnexpectedType(String),
}

/// Read-only handle on the settings database. There is no writable variant;
/// the database belongs to another application.
pub struct SettingsDb(Connection);

impl SettingsDb {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SettingsDbError> {
        log::debug!("Connecting to {} in read-only mode", path.as_ref().display());
        let connection = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(SettingsDb(connection))
    }

    /// Fetch the raw document stored under `id`.
    ///
    /// Returns `Ok(None)` if the row is missing or its value is NULL. Both
    /// TEXT and BLOB storage are accepted; BLOBs must decode as UTF-8.
    pub fn select(&self, id: i64) -> Result<Option<String>, SettingsDbError> {
        self.0
            .query_row(
                &format!("SELECT {VALUE_FIELD} FROM '{TABLENAME}' WHERE {KEY_FIELD} = ?1"),
                [id],
                |r| match r.get_ref(0)? {
                    ValueRef::Null => Ok(None),
                    ValueRef::Text(t) => Ok(Some(t.to_vec())),
                    ValueRef::Blob(b) => Ok(Some(b.to_vec())),
                    other => Err(rusqlite::Error::InvalidColumnType(
                        0,
                        VALUE_FIELD.to_string(),
                        other.data_type(),
                    )),
                },
            )
            .optional()
            .map_err(|e| match e {
                rusqlite::Error::InvalidColumnType(_, _, t) => {
                    SettingsDbError::UnexpectedType(t.to_string())
                }
                e => e.into(),
            })?
            .flatten()
            .map(String::from_utf8)
            .transpose()
            .map_err(Into::into)
    }

    pub fn current_settings(&self) -> Result<Option<String>, SettingsDbError> {
        self.select(CURRENT_SETTINGS_ID)
    }
}
