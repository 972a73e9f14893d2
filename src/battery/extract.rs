use serde_json::{Map, Value};

use crate::constants::devices;

use super::models::DeviceBatteryRecord;

const KEY_PREFIX: &str = "battery/";
const KEY_SUFFIX: &str = "/percentage";
const KEY_SEPARATOR: char = '/';

const FIELD_PERCENTAGE: &str = "percentage";
const FIELD_MILLIVOLTS: &str = "millivolts";
const FIELD_IS_CHARGING: &str = "isCharging";
const FIELD_TIME: &str = "time";

/// Extract live battery readings from a settings document.
///
/// Only top-level `battery/<device>/percentage` keys holding an object are
/// considered; other battery nodes carry history rather than live data.
/// Records keep the document's key order. A document that is absent or does
/// not parse as a JSON object yields no records.
pub fn extract_battery_info(blob: Option<&str>) -> Vec<DeviceBatteryRecord> {
    let Some(blob) = blob else {
        return vec![];
    };

    let tree = match serde_json::from_str::<Value>(blob) {
        Ok(Value::Object(tree)) => tree,
        Ok(Value::Null) => return vec![],
        Ok(other) => {
            log::warn!("settings document is not an object: {}", type_name(&other));
            return vec![];
        }
        Err(e) => {
            log::warn!("could not parse settings document: {}", e);
            return vec![];
        }
    };

    tree.iter()
        .filter_map(|(key, value)| live_node(key, value))
        .filter_map(|(key, node)| to_record(key, node))
        .collect()
}

fn live_node<'a>(key: &'a str, value: &'a Value) -> Option<(&'a str, &'a Map<String, Value>)> {
    if !(key.starts_with(KEY_PREFIX) && key.ends_with(KEY_SUFFIX)) {
        return None;
    }
    value.as_object().map(|node| (key, node))
}

fn to_record(key: &str, node: &Map<String, Value>) -> Option<DeviceBatteryRecord> {
    let battery_percent = match node.get(FIELD_PERCENTAGE).and_then(as_percent) {
        Some(p) => p,
        None => {
            log::debug!("skipping {key}: no usable percentage");
            return None;
        }
    };
    let device_key = key.split(KEY_SEPARATOR).nth(1).unwrap_or_default().to_string();

    Some(DeviceBatteryRecord {
        device_display_name: devices::display_name(&device_key),
        device_key,
        battery_percent,
        voltage_millivolts: node.get(FIELD_MILLIVOLTS).and_then(as_millivolts),
        is_charging: node
            .get(FIELD_IS_CHARGING)
            .and_then(Value::as_bool)
            .unwrap_or(false),
        last_update_timestamp: node
            .get(FIELD_TIME)
            .and_then(Value::as_str)
            .map(str::to_string),
        source_key: key.to_string(),
    })
}

fn as_percent(value: &Value) -> Option<u8> {
    match value {
        Value::Number(n) => n.as_f64().map(|p| p.trunc().clamp(0.0, 100.0) as u8),
        _ => None,
    }
}

fn as_millivolts(value: &Value) -> Option<u32> {
    match value.as_u64() {
        Some(mv) => u32::try_from(mv).ok(),
        None => value
            .as_f64()
            .filter(|mv| *mv >= 0.0 && *mv <= f64::from(u32::MAX))
            .map(|mv| mv.trunc() as u32),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
