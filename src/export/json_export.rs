use crate::errors::AppResult;
use serde::Serialize;
use std::path::Path;

/// Writes any serializable value (appointment rows or a day snapshot) as
/// pretty JSON.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> AppResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    Ok(())
}
