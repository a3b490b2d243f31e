// src/export/logic.rs

use crate::core::{AppointmentStore, DayScheduleView};
use crate::errors::{AppError, AppResult};
use crate::export::csv_export::write_csv;
use crate::export::fs_utils::confirm_overwrite;
use crate::export::json_export::write_json;
use crate::export::model::AppointmentExport;
use crate::export::{ExportFormat, notify_export_success};
use crate::ui::messages::warning;
use crate::utils::date::range_bounds;
use chrono::NaiveDate;
use std::path::Path;

/// High-level export entry points.
pub struct ExportLogic;

impl ExportLogic {
    /// Export appointments.
    ///
    /// `range`: `None`, `"all"` or a period (`YYYY`, `YYYY-MM`,
    /// `YYYY-MM-DD`, or `a:b` ranges of those).
    /// Returns the number of exported rows.
    pub fn export_appointments(
        store: &AppointmentStore,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        check_output_path(path)?;
        confirm_overwrite(path, force)?;

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(range_bounds(r).map_err(AppError::InvalidDate)?),
        };

        let rows: Vec<AppointmentExport> = match bounds {
            Some((from, to)) => store.in_range(from, to).map(AppointmentExport::from).collect(),
            None => store
                .dates()
                .flat_map(|d| store.by_date(d))
                .map(AppointmentExport::from)
                .collect(),
        };

        if rows.is_empty() {
            warning("No appointments found for the selected range.");
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => write_csv(path, &rows)?,
            ExportFormat::Json => write_json(path, &rows)?,
        }

        notify_export_success(&format!("Appointments ({})", format.as_str()), path);
        Ok(rows.len())
    }

    /// Export the full positioned snapshot of one day (JSON only: the
    /// blocks carry nested data CSV cannot represent).
    pub fn export_day(
        store: &AppointmentStore,
        date: NaiveDate,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        if !format.supports_snapshots() {
            return Err(AppError::Export(format!(
                "day snapshots can only be exported as json, not {}",
                format.as_str()
            )));
        }

        let path = Path::new(file);
        check_output_path(path)?;
        confirm_overwrite(path, force)?;

        let schedule = DayScheduleView::new(store).build(date, None);
        write_json(path, &schedule)?;

        notify_export_success(&format!("Day {date}"), path);
        Ok(())
    }
}

fn check_output_path(path: &Path) -> AppResult<()> {
    if !path.is_absolute() {
        return Err(AppError::Export(format!(
            "output file path must be absolute: {}",
            path.display()
        )));
    }
    Ok(())
}
