use serde::{Deserialize, Serialize};

use crate::error::{InputError, ProjectionError};

/// The three scalars a projection is computed from
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Amount contributed once per month
    pub monthly_investment: f64,
    /// Horizon in years; fractional values are allowed
    pub period_years: f64,
    /// Nominal annual rate as a percent (12.0 = 12%)
    pub annual_rate_percent: f64,
}

impl ProjectionInput {
    pub fn new(monthly_investment: f64, period_years: f64, annual_rate_percent: f64) -> Self {
        Self {
            monthly_investment,
            period_years,
            annual_rate_percent,
        }
    }

    /// Reject `NaN` and infinite fields, first offending field wins
    pub fn validate(&self) -> Result<(), ProjectionError> {
        let fields = [
            ("monthly_investment", self.monthly_investment),
            ("period_years", self.period_years),
            ("annual_rate_percent", self.annual_rate_percent),
        ];

        match fields.into_iter().find(|(_, value)| !value.is_finite()) {
            Some((field, value)) => Err(ProjectionError::InvalidInput { field, value }),
            None => Ok(()),
        }
    }
}

/// An input row from a batch file, with an optional caller-supplied label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledInput {
    pub label: Option<String>,
    pub input: ProjectionInput,
}

/// Parse the monthly amount typed by the user.
///
/// Surrounding whitespace and `,` grouping separators are ignored. Empty,
/// non-numeric and non-finite text is rejected.
pub fn parse_amount(text: &str) -> Result<f64, InputError> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();

    let value: f64 = cleaned
        .parse()
        .map_err(|_| InputError::NotANumber(text.to_string()))?;

    if !value.is_finite() {
        return Err(InputError::NotFinite(text.to_string()));
    }

    Ok(value)
}
