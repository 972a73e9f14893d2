use anyhow::Result;

use crate::argsets::OutputMode;
use crate::battery::{extract_battery_info, DeviceBatteryRecord};
use crate::interfaces::fetch_settings_blob;
use crate::output;

/// One fetch and extract cycle. Never fails; unavailable data is an empty list.
pub fn read_records() -> Vec<DeviceBatteryRecord> {
    let blob = fetch_settings_blob();
    let records = extract_battery_info(blob.data());
    log::debug!("Read {} live battery record(s)", records.len());
    records
}

pub fn report(mode: OutputMode) -> Result<()> {
    output::render(&read_records(), mode)
}
