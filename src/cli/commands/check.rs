use crate::config::Config;
use crate::data::open_store;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};

/// Loads the appointments file and reports everything a human should fix:
/// rejected records (fails the command) and double bookings (warnings only).
pub fn handle(cfg: &Config) -> AppResult<()> {
    let (store, report) = open_store(cfg)?;

    for (id, e) in &report.rejected {
        error(format!("{id}: {e}"));
    }

    let mut overlap_count = 0;
    for d in store.dates() {
        for (a, b) in store.overlaps_of(d) {
            overlap_count += 1;
            warning(format!("{d}: {a} overlaps {b}"));
        }
    }

    if !report.is_clean() {
        return Err(AppError::Validation(format!(
            "{} of {} record(s) rejected in {}",
            report.rejected.len(),
            report.rejected.len() + report.loaded.len(),
            cfg.appointments_file
        )));
    }

    success(format!(
        "{} appointment(s) valid, {} overlap(s) found",
        report.loaded.len(),
        overlap_count
    ));
    Ok(())
}
