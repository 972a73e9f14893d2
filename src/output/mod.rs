mod json;
mod text;

use std::io::Write;

use anyhow::Result;

pub use json::envelope;
pub use text::{battery_bar, report};

use crate::argsets::OutputMode;
use crate::battery::DeviceBatteryRecord;
use crate::helpers::now_local;

const CLEAR_SCREEN: &str = "\x1b[H\x1b[J";

/// Render records in the requested mode, stamped with the current local time
pub fn format_records(records: &[DeviceBatteryRecord], mode: OutputMode) -> Result<String> {
    let read_at = now_local();
    match mode {
        OutputMode::Text => Ok(report(records, &read_at)),
        OutputMode::Json => envelope(records, &read_at).map_err(Into::into),
    }
}

pub fn render(records: &[DeviceBatteryRecord], mode: OutputMode) -> Result<()> {
    let out = format_records(records, mode)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

pub fn clear_screen() -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(CLEAR_SCREEN.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
