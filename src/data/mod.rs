//! Loading appointment records into an `AppointmentStore`.

pub mod fixture;

use crate::config::Config;
use crate::core::AppointmentStore;
use crate::errors::AppResult;
use fixture::{LoadReport, populate, read_fixture};
use std::path::Path;

/// Build a store from the configured grid/rules and fill it with the
/// records of the configured appointments file.
pub fn open_store(cfg: &Config) -> AppResult<(AppointmentStore, LoadReport)> {
    let mut store = AppointmentStore::new(cfg.grid()?, cfg.rules()?);
    let records = read_fixture(Path::new(&cfg.appointments_file))?;
    let report = populate(&mut store, records);
    Ok((store, report))
}
