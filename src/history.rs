//! Timestamped history of calculations, stored as CSV

use crate::error::HistoryError;
use crate::input::ProjectionInput;
use crate::projection::ProjectionResult;
use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Default history file name, relative to the working directory
pub const DEFAULT_HISTORY_PATH: &str = "sip_history.csv";

/// One saved calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub monthly_investment: f64,
    pub period_years: f64,
    pub annual_rate_percent: f64,
    pub actual_amount: f64,
    pub net_return: f64,
    pub times_rolled_over: f64,
}

impl HistoryEntry {
    pub fn new(
        timestamp: DateTime<Utc>,
        input: &ProjectionInput,
        result: &ProjectionResult,
    ) -> Self {
        Self {
            timestamp,
            monthly_investment: input.monthly_investment,
            period_years: input.period_years,
            annual_rate_percent: input.annual_rate_percent,
            actual_amount: result.actual_amount,
            net_return: result.net_return,
            times_rolled_over: result.times_rolled_over,
        }
    }

    pub fn input(&self) -> ProjectionInput {
        ProjectionInput::new(self.monthly_investment, self.period_years, self.annual_rate_percent)
    }

    pub fn result(&self) -> ProjectionResult {
        ProjectionResult {
            actual_amount: self.actual_amount,
            net_return: self.net_return,
            times_rolled_over: self.times_rolled_over,
        }
    }
}

/// Append-only history file
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry, writing the header row first if the file is new or empty
    pub fn append(&self, entry: &HistoryEntry) -> Result<(), HistoryError> {
        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let needs_header = file.metadata()?.len() == 0;

        let mut writer = WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(entry)?;
        writer.flush()?;

        log::debug!("saved calculation to {}", self.path.display());
        Ok(())
    }

    /// All entries in the order they were saved; empty if the file does not exist
    pub fn load(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new().from_path(&self.path)?;
        let mut entries = Vec::new();
        for result in reader.deserialize() {
            let entry: HistoryEntry = result?;
            entries.push(entry);
        }
        Ok(entries)
    }
}
