//! Load batches of projection inputs from CSV
//!
//! Expected columns: `Label` (optional), `MonthlyInvestment`, `PeriodYears`,
//! `AnnualRatePercent`.

use super::{LabeledInput, ProjectionInput};
use crate::error::InputError;
use csv::{Reader, ReaderBuilder};
use std::path::Path;

/// Raw CSV row matching the batch input columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Label", default)]
    label: Option<String>,
    #[serde(rename = "MonthlyInvestment")]
    monthly_investment: f64,
    #[serde(rename = "PeriodYears")]
    period_years: f64,
    #[serde(rename = "AnnualRatePercent")]
    annual_rate_percent: f64,
}

impl CsvRow {
    fn into_input(self) -> LabeledInput {
        LabeledInput {
            label: self.label.filter(|l| !l.trim().is_empty()),
            input: ProjectionInput::new(
                self.monthly_investment,
                self.period_years,
                self.annual_rate_percent,
            ),
        }
    }
}

fn read_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<LabeledInput>, InputError> {
    let mut inputs = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        inputs.push(row.into_input());
    }

    Ok(inputs)
}

/// Load all inputs from a CSV file
pub fn load_inputs<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledInput>, InputError> {
    let path = path.as_ref();
    let reader = ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    let inputs = read_rows(reader)?;
    log::info!("loaded {} inputs from {}", inputs.len(), path.display());
    Ok(inputs)
}

/// Load inputs from any reader (e.g., string buffer, request body)
pub fn load_inputs_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<LabeledInput>, InputError> {
    read_rows(ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader))
}
