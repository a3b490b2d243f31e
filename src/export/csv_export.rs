use crate::errors::AppResult;
use crate::export::model::AppointmentExport;
use csv::Writer;
use std::path::Path;

/// Writes one row per appointment; headers come from the serde field names.
pub fn write_csv(path: &Path, rows: &[AppointmentExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
