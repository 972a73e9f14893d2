use chrono::NaiveDateTime;
use serde::Serialize;

use crate::battery::DeviceBatteryRecord;
use crate::constants::defaults;
use crate::helpers::format_iso_local;

#[derive(Debug, Serialize)]
pub struct Envelope<'a> {
    pub devices: &'a [DeviceBatteryRecord],
    pub read_at: String,
    pub source: &'static str,
}

/// Pretty-printed JSON envelope, newline-terminated
pub fn envelope(
    records: &[DeviceBatteryRecord],
    read_at: &NaiveDateTime,
) -> Result<String, serde_json::Error> {
    let env = Envelope {
        devices: records,
        read_at: format_iso_local(read_at),
        source: defaults::JSON_SOURCE_TAG,
    };
    let mut out = serde_json::to_string_pretty(&env)?;
    out.push('\n');
    Ok(out)
}
