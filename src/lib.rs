//! SIP Calculator - future value projections for Systematic Investment Plans
//!
//! This library provides:
//! - The projection engine for a fixed monthly contribution compounded monthly
//! - Parsing of user-entered amounts and CSV batches of inputs
//! - Batch and rate-sweep projections
//! - An event-driven calculator controller for front ends
//! - Display formatting, calculation history and user settings

pub mod controller;
pub mod error;
pub mod format;
pub mod history;
pub mod input;
pub mod projection;
pub mod scenario;
pub mod settings;

// Re-export commonly used types
pub use controller::Calculator;
pub use error::{HistoryError, InputError, ProjectionError, SettingsError};
pub use input::{parse_amount, ProjectionInput};
pub use projection::{project, ProjectionConfig, ProjectionEngine, ProjectionResult};
pub use scenario::ScenarioRunner;
pub use settings::{Settings, Theme};
