//! YAML fixture files: the owned replacement for the dashboard's global mock
//! arrays.

use crate::core::AppointmentStore;
use crate::errors::{AppError, AppResult};
use crate::models::NewAppointment;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Written by `init` when no appointments file exists yet.
pub const SAMPLE_FIXTURE: &str = include_str!("../../data/appointments.sample.yaml");

/// Outcome of feeding fixture records through `AppointmentStore::add`.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: Vec<String>,
    pub rejected: Vec<(String, AppError)>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

pub fn read_fixture(path: &Path) -> AppResult<Vec<NewAppointment>> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::Io(std::io::Error::new(
            e.kind(),
            format!("cannot read appointments file {}: {e}", path.display()),
        ))
    })?;
    parse_fixture(&content)
}

pub fn parse_fixture(content: &str) -> AppResult<Vec<NewAppointment>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let records: Vec<NewAppointment> = serde_yaml::from_str(content)?;
    Ok(records)
}

/// Adds every record; invalid ones are collected instead of aborting.
pub fn populate(store: &mut AppointmentStore, records: Vec<NewAppointment>) -> LoadReport {
    let mut report = LoadReport::default();

    for rec in records {
        let id = rec.id.clone();
        match store.add(rec) {
            Ok(id) => report.loaded.push(id),
            Err(e) => {
                warn!(id = %id, error = %e, "appointment record rejected");
                report.rejected.push((id, e));
            }
        }
    }

    info!(
        loaded = report.loaded.len(),
        rejected = report.rejected.len(),
        "appointments loaded"
    );

    report
}
