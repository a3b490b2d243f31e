mod csv_export;
mod fs_utils;
mod json_export;
pub mod logic;
mod model;

pub use logic::ExportLogic;
pub use model::AppointmentExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} exported to {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Day snapshots nest blocks inside the schedule, which only JSON can carry.
    pub fn supports_snapshots(&self) -> bool {
        matches!(self, ExportFormat::Json)
    }
}
