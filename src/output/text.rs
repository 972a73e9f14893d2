use chrono::NaiveDateTime;

use crate::battery::DeviceBatteryRecord;
use crate::helpers::{format_display, format_timestamp};

pub const BAR_CELLS: usize = 10;
const BAR_FILLED: char = '#';
const BAR_EMPTY: char = '-';

const BANNER_WIDTH: usize = 60;
const SECTION_WIDTH: usize = 56;
const NOT_AVAILABLE: &str = "N/A";

/// `percent / 10` filled cells out of ten, never rounded up
pub fn battery_bar(percent: u8) -> String {
    let filled = (usize::from(percent) / 10).min(BAR_CELLS);
    let mut bar = String::with_capacity(BAR_CELLS);
    bar.extend(std::iter::repeat(BAR_FILLED).take(filled));
    bar.extend(std::iter::repeat(BAR_EMPTY).take(BAR_CELLS - filled));
    bar
}

pub fn report(records: &[DeviceBatteryRecord], read_at: &NaiveDateTime) -> String {
    let lines = if records.is_empty() {
        no_data_lines()
    } else {
        record_lines(records, read_at)
    };
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn no_data_lines() -> Vec<String> {
    let rule = "=".repeat(BANNER_WIDTH);
    vec![
        String::new(),
        rule.clone(),
        "  NO LIVE BATTERY DATA AVAILABLE".into(),
        rule.clone(),
        String::new(),
        "  Possible reasons:".into(),
        "  - G Hub is not running".into(),
        "  - Devices haven't reported battery recently".into(),
        "  - Use the device to trigger a battery update".into(),
        String::new(),
        rule,
    ]
}

fn record_lines(records: &[DeviceBatteryRecord], read_at: &NaiveDateTime) -> Vec<String> {
    let rule = "=".repeat(BANNER_WIDTH);
    let section = "-".repeat(SECTION_WIDTH);

    let mut lines = vec![
        String::new(),
        rule.clone(),
        "              LOGITECH BATTERY STATUS".into(),
        rule.clone(),
    ];

    for rec in records {
        let voltage = match rec.voltage_millivolts {
            Some(mv) if mv > 0 => format!("{mv} mV"),
            _ => NOT_AVAILABLE.to_string(),
        };
        let charging = if rec.is_charging { "YES [+]" } else { "No" };
        let updated = match rec.last_update_timestamp.as_deref() {
            Some(ts) if !ts.is_empty() => format_timestamp(ts),
            _ => NOT_AVAILABLE.to_string(),
        };

        lines.extend([
            String::new(),
            format!("  {}", rec.device_display_name),
            format!("  {section}"),
            format!(
                "    Battery:    [{}] {}%",
                battery_bar(rec.battery_percent),
                rec.battery_percent
            ),
            format!("    Status:     {}", rec.status()),
            format!("    Voltage:    {voltage}"),
            format!("    Charging:   {charging}"),
            format!("    Updated:    {updated}"),
            format!("    Source:     {}", rec.source_key),
        ]);
    }

    lines.extend([
        String::new(),
        format!("  {section}"),
        format!("  Read at: {}", format_display(read_at)),
        rule,
        String::new(),
    ]);
    lines
}
