mod settings_source;

pub use settings_source::{fetch_settings_blob, read_settings_blob, SettingsBlob, Unavailable};
