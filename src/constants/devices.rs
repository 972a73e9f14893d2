use once_cell::sync::Lazy;
use std::collections::HashMap;

// Known G Hub device keys
pub static DEVICE_NAMES: Lazy<HashMap<&str, &str>> = Lazy::new(|| {
    HashMap::from([
        ("proxwirelessheadset", "PRO X Wireless Gaming Headset"),
        ("prowirelessmouse", "PRO Wireless Mouse"),
        ("gprowirelessmouse", "G PRO Wireless Mouse"),
        ("g502lightspeed", "G502 Lightspeed"),
        ("g915", "G915 Keyboard"),
        ("g733", "G733 Headset"),
        ("g435", "G435 Headset"),
        ("g304", "G304 Mouse"),
        ("g305", "G305 Mouse"),
        ("g603", "G603 Mouse"),
        ("g703", "G703 Mouse"),
        ("g903", "G903 Mouse"),
    ])
});

/// Human-readable name for a device key, or the key itself if unknown
pub fn display_name(device_key: &str) -> String {
    DEVICE_NAMES
        .get(device_key)
        .map_or_else(|| device_key.to_string(), |name| name.to_string())
}
