use std::time::Duration;

pub const LOG_LEVEL: &str = "warn";
pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

pub const GHUB_DIR: &str = "LGHUB";
pub const SETTINGS_DB_FILE: &str = "settings.db";

pub const JSON_SOURCE_TAG: &str = "ghub_database";
