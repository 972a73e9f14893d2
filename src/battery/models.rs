use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct DeviceBatteryRecord {
    pub device_key: String,
    pub device_display_name: String,
    pub battery_percent: u8,
    pub voltage_millivolts: Option<u32>,
    pub is_charging: bool,
    pub last_update_timestamp: Option<String>,
    pub source_key: String,
}

impl DeviceBatteryRecord {
    pub fn status(&self) -> BatteryStatus {
        BatteryStatus::from_reading(self.battery_percent, self.is_charging)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatteryStatus {
    Charging,
    Full,
    Good,
    Medium,
    Low,
}

impl BatteryStatus {
    /// Charging takes precedence over every percentage band
    pub fn from_reading(percent: u8, is_charging: bool) -> Self {
        match (is_charging, percent) {
            (true, _) => BatteryStatus::Charging,
            (false, 80..) => BatteryStatus::Full,
            (false, 50..) => BatteryStatus::Good,
            (false, 20..) => BatteryStatus::Medium,
            (false, _) => BatteryStatus::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BatteryStatus::Charging => "CHARGING",
            BatteryStatus::Full => "Full",
            BatteryStatus::Good => "Good",
            BatteryStatus::Medium => "Medium",
            BatteryStatus::Low => "LOW!",
        }
    }
}

impl fmt::Display for BatteryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charging_overrides_percentage() {
        assert_eq!(BatteryStatus::from_reading(15, true).label(), "CHARGING");
        assert_eq!(BatteryStatus::from_reading(100, true).label(), "CHARGING");
        assert_eq!(BatteryStatus::from_reading(0, true).label(), "CHARGING");
    }

    #[test]
    fn percentage_band_boundaries() {
        let label = |p| BatteryStatus::from_reading(p, false).label();
        assert_eq!(label(100), "Full");
        assert_eq!(label(80), "Full");
        assert_eq!(label(79), "Good");
        assert_eq!(label(50), "Good");
        assert_eq!(label(49), "Medium");
        assert_eq!(label(20), "Medium");
        assert_eq!(label(19), "LOW!");
        assert_eq!(label(0), "LOW!");
    }
}
