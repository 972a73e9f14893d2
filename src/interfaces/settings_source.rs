use std::path::{Path, PathBuf};

use settingsdb::{SettingsDb, SettingsDbError};
use thiserror::Error;

use crate::helpers::base_path;

#[derive(Error, Debug)]
pub enum Unavailable {
    #[error("G Hub data directory is not set")]
    NoDataDir,
    #[error("settings database not found at {0}")]
    NotFound(PathBuf),
    #[error("could not read settings database: {0}")]
    Database(#[from] SettingsDbError),
    #[error("settings database holds no current document")]
    Empty,
}

/// Outcome of a read. `Unavailable` is a normal result, never a fatal error.
#[derive(Debug)]
pub enum SettingsBlob {
    Data(String),
    Unavailable(Unavailable),
}

impl SettingsBlob {
    pub fn data(&self) -> Option<&str> {
        match self {
            SettingsBlob::Data(blob) => Some(blob),
            SettingsBlob::Unavailable(_) => None,
        }
    }
}

/// Read the current settings document from the G Hub database
pub fn fetch_settings_blob() -> SettingsBlob {
    match base_path::settings_db_path() {
        Some(path) => read_settings_blob(&path),
        None => {
            log::warn!("{}", Unavailable::NoDataDir);
            SettingsBlob::Unavailable(Unavailable::NoDataDir)
        }
    }
}

pub fn read_settings_blob(path: &Path) -> SettingsBlob {
    if !path.exists() {
        log::debug!("Settings database {} does not exist", path.display());
        return SettingsBlob::Unavailable(Unavailable::NotFound(path.to_path_buf()));
    }

    let res = SettingsDb::open(path).and_then(|db| db.current_settings());
    match res {
        Ok(Some(blob)) => SettingsBlob::Data(blob),
        Ok(None) => {
            log::debug!("{}", Unavailable::Empty);
            SettingsBlob::Unavailable(Unavailable::Empty)
        }
        Err(e) => {
            log::error!("Error: {}", e);
            SettingsBlob::Unavailable(e.into())
        }
    }
}
