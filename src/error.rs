//! Error types for the library

use thiserror::Error;

/// Rejection raised by the strict projection path
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("{field} must be finite, got {value}")]
    InvalidInput { field: &'static str, value: f64 },
}

/// Errors from parsing user-entered amounts or loading input files
#[derive(Debug, Error)]
pub enum InputError {
    #[error("not a number: {0:?}")]
    NotANumber(String),
    #[error("amount must be finite: {0:?}")]
    NotFinite(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reading or writing the calculation history
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reading or writing the settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{name} range is invalid: min={min}, max={max}, step={step}")]
    InvalidRange {
        name: &'static str,
        min: f64,
        max: f64,
        step: f64,
    },
}
