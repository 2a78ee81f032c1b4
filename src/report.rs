//! Turning device descriptors into text.

use crate::collection::DeviceDescriptor;

/// What's shown when a device has no characteristics set.
pub const NO_CHARACTERISTICS: &str = "(None)";

/// Returns the names of every characteristic set on the device, always in the
/// order: low power, headless, removable, unified memory.
pub fn characteristics(device: &DeviceDescriptor) -> Vec<&'static str> {
    [
        (device.is_low_power, "Low Power"),
        (device.is_headless, "Headless"),
        (device.is_removable, "Removable"),
        (device.has_unified_memory, "Unified Memory"),
    ]
    .into_iter()
    .filter_map(|(active, name)| active.then_some(name))
    .collect()
}

fn joined_or(items: &[&str], otherwise: &str) -> String {
    if items.is_empty() {
        otherwise.to_string()
    } else {
        items.join(", ")
    }
}

/// Formats the report block for a single device. Every line, including the
/// last, ends with a newline.
pub fn format_report(device: &DeviceDescriptor, index: Option<usize>) -> String {
    let mut out = index
        .map(|index| format!("Index: {index}\n"))
        .unwrap_or_default();

    out.push_str(&format!(
        "Name: {}\nLocation: {}\nCharacteristics: {}\n",
        device.name,
        device.location,
        joined_or(&characteristics(device), NO_CHARACTERISTICS)
    ));

    out
}
