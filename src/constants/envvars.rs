pub const LOCAL_APP_DATA: &str = "LOCALAPPDATA";
pub const LOG_LEVEL: &str = "LOGGING_LEVEL";
