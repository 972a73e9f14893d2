mod extract;
pub mod models;

pub use extract::extract_battery_info;
pub use models::{BatteryStatus, DeviceBatteryRecord};
