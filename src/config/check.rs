//! Detects keys missing from an existing configuration file, so older files
//! can be reported (and completed) after new settings were introduced.

use crate::errors::AppResult;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

pub const EXPECTED_KEYS: [&str; 10] = [
    "appointments_file",
    "start_hour",
    "end_hour",
    "pixels_per_hour",
    "slot_minutes",
    "default_booking_minutes",
    "lunch_block",
    "open_days",
    "log_filter",
    "separator_char",
];

/// Keys from `EXPECTED_KEYS` absent in the YAML file at `path`.
/// A missing file reports every key.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        return Ok(EXPECTED_KEYS.to_vec());
    }

    let content = fs::read_to_string(path)?;
    let value: Value = serde_yaml::from_str(&content)?;

    let missing = match value.as_mapping() {
        Some(map) => EXPECTED_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(*k))
            .collect(),
        None => EXPECTED_KEYS.to_vec(),
    };

    Ok(missing)
}
