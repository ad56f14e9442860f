//! Core projection engine for monthly SIP contributions

use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;
use crate::input::ProjectionInput;
use super::result::ProjectionResult;

/// Contributions are made once per month
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Configuration for a projection run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// When in each month the contribution is made
    #[serde(default)]
    pub timing: ContributionTiming,

    /// How a positive period with a zero rate is reported
    #[serde(default)]
    pub zero_rate: ZeroRateHandling,
}

/// Timing of the monthly contribution within its period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionTiming {
    /// Annuity-due: every contribution earns one extra month of growth
    #[default]
    StartOfPeriod,
    /// Ordinary annuity: the last contribution earns nothing
    EndOfPeriod,
}

/// Reporting policy for `period > 0` with `rate <= 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroRateHandling {
    /// Skip the calculation and report all zeros, even though principal was invested.
    /// Kept as the default so existing figures stay bit-identical.
    #[default]
    ReportZero,
    /// Report the invested principal with no growth when the rate is exactly zero.
    /// Negative rates and non-positive periods still report all zeros.
    PrincipalOnly,
}

/// Main projection engine
///
/// Stateless apart from its configuration: the same input always yields the
/// same result, so one engine can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project the future value of a monthly contribution stream.
    ///
    /// Non-finite inputs are not rejected; `NaN` and infinities flow through
    /// the arithmetic into the result. Use [`try_project`](Self::try_project)
    /// to reject them instead.
    pub fn project(&self, input: &ProjectionInput) -> ProjectionResult {
        let years = input.period_years;
        let rate = input.annual_rate_percent;

        if years <= 0.0 || rate <= 0.0 {
            let principal_only = self.config.zero_rate == ZeroRateHandling::PrincipalOnly;
            if principal_only && years > 0.0 && rate == 0.0 {
                let actual_amount = input.monthly_investment * years * MONTHS_PER_YEAR;
                return ProjectionResult::from_future_value(actual_amount, actual_amount);
            }
            return ProjectionResult::zero();
        }

        let period_months = years * MONTHS_PER_YEAR;
        let monthly_rate = rate / MONTHS_PER_YEAR / 100.0;

        let actual_amount = input.monthly_investment * period_months;
        let future_value = self.future_value(input.monthly_investment, monthly_rate, period_months);

        log::trace!(
            "projected {:?}: invested={} future_value={}",
            input, actual_amount, future_value
        );

        ProjectionResult::from_future_value(actual_amount, future_value)
    }

    /// Strict projection: rejects `NaN` or infinite inputs.
    ///
    /// For finite input the result is bit-identical to [`project`](Self::project).
    pub fn try_project(
        &self,
        input: &ProjectionInput,
    ) -> Result<ProjectionResult, ProjectionError> {
        input.validate()?;
        Ok(self.project(input))
    }

    /// Future value of `nper` payments of `pmt` at periodic rate `rate`
    fn future_value(&self, pmt: f64, rate: f64, nper: f64) -> f64 {
        let annuity = pmt * (((1.0 + rate).powf(nper) - 1.0) / rate);
        match self.config.timing {
            ContributionTiming::StartOfPeriod => annuity * (1.0 + rate),
            ContributionTiming::EndOfPeriod => annuity,
        }
    }
}

/// Project with the default engine configuration.
///
/// Convenience form taking the three scalars directly.
pub fn project(
    monthly_investment: f64,
    period_years: f64,
    annual_rate_percent: f64,
) -> ProjectionResult {
    ProjectionEngine::default().project(&ProjectionInput::new(
        monthly_investment,
        period_years,
        annual_rate_percent,
    ))
}
