//! Unified application error type.
//! The engine (grid, store, day view) and the CLI layer both return AppError,
//! so callers match on a single enum to present failures to the user.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Grid errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid duration: {0} minutes")]
    InvalidDuration(i64),

    #[error("Time {time} is outside the grid window {window}")]
    OutOfRange { time: String, window: String },

    // ---------------------------
    // Store errors
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Appointment id already exists: {0}")]
    DuplicateId(String),

    #[error("Appointment not found: {0}")]
    NotFound(String),

    #[error("Cannot {action} appointment {id}: status is {from}")]
    InvalidTransition {
        id: String,
        from: String,
        action: String,
    },

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// True for the errors a form should show next to the offending field
    /// (the user can fix the input and retry).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_)
                | AppError::DuplicateId(_)
                | AppError::InvalidDuration(_)
                | AppError::InvalidDate(_)
                | AppError::InvalidTime(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
