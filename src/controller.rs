//! Calculator state driven by explicit input events
//!
//! Every change to the amount text or either slider recalculates immediately
//! and stores the latest result. The engine itself holds no state.

use crate::format::ResultSummary;
use crate::history::HistoryEntry;
use crate::input::{parse_amount, ProjectionInput};
use crate::projection::{ProjectionEngine, ProjectionResult};
use crate::settings::{Settings, SliderRange};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Calculator {
    engine: ProjectionEngine,
    period_slider: SliderRange,
    rate_slider: SliderRange,
    currency_symbol: String,

    amount_text: String,
    period_years: f64,
    annual_rate_percent: f64,
    result: ProjectionResult,
}

impl Calculator {
    /// Start empty: no amount, both sliders at their minimum
    pub fn new(settings: &Settings) -> Self {
        Self {
            engine: ProjectionEngine::new(settings.projection),
            period_slider: settings.period_slider,
            rate_slider: settings.rate_slider,
            currency_symbol: settings.currency_symbol.clone(),
            amount_text: String::new(),
            period_years: settings.period_slider.min,
            annual_rate_percent: settings.rate_slider.min,
            result: ProjectionResult::zero(),
        }
    }

    pub fn set_amount_text(&mut self, text: &str) -> &ProjectionResult {
        self.amount_text = text.to_string();
        self.recalculate()
    }

    pub fn set_period(&mut self, years: f64) -> &ProjectionResult {
        self.period_years = self.period_slider.snap(years);
        self.recalculate()
    }

    pub fn set_rate(&mut self, percent: f64) -> &ProjectionResult {
        self.annual_rate_percent = self.rate_slider.snap(percent);
        self.recalculate()
    }

    pub fn result(&self) -> &ProjectionResult {
        &self.result
    }

    pub fn period_years(&self) -> f64 {
        self.period_years
    }

    pub fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }

    /// Current input, if the amount text parses
    pub fn input(&self) -> Option<ProjectionInput> {
        let amount = parse_amount(&self.amount_text).ok()?;
        Some(ProjectionInput::new(amount, self.period_years, self.annual_rate_percent))
    }

    pub fn summary(&self) -> ResultSummary {
        let input = self.input().unwrap_or(ProjectionInput::new(
            0.0,
            self.period_years,
            self.annual_rate_percent,
        ));
        ResultSummary::new(&input, &self.result, &self.currency_symbol)
    }

    /// History record of the current state; `None` while the amount is invalid
    pub fn snapshot(&self, now: DateTime<Utc>) -> Option<HistoryEntry> {
        self.input().map(|input| HistoryEntry::new(now, &input, &self.result))
    }

    fn recalculate(&mut self) -> &ProjectionResult {
        self.result = match self.input() {
            Some(input) => self.engine.project(&input),
            None => {
                log::debug!("amount {:?} is not a number, clearing result", self.amount_text);
                ProjectionResult::zero()
            }
        };
        &self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;
    use approx::assert_relative_eq;

    #[test]
    fn test_starts_at_zero() {
        let calc = Calculator::new(&Settings::default());
        assert!(calc.result().is_zero());
        assert_eq!(calc.period_years(), 0.0);
        assert!(calc.input().is_none());
    }

    #[test]
    fn test_recalculates_on_each_change() {
        let mut calc = Calculator::new(&Settings::default());

        assert!(calc.set_amount_text("5000").is_zero());
        assert!(calc.set_period(1.0).is_zero());

        let result = *calc.set_rate(12.0);
        assert_eq!(result, project(5000.0, 1.0, 12.0));
        assert_relative_eq!(result.actual_amount, 60_000.0);

        calc.set_period(2.0);
        assert_eq!(*calc.result(), project(5000.0, 2.0, 12.0));
    }

    #[test]
    fn test_invalid_amount_clears_result() {
        let mut calc = Calculator::new(&Settings::default());
        calc.set_period(10.0);
        calc.set_rate(12.0);
        assert!(!calc.set_amount_text("1000").is_zero());

        assert!(calc.set_amount_text("10x").is_zero());
        assert!(calc.snapshot(Utc::now()).is_none());
    }

    #[test]
    fn test_sliders_snap_to_range() {
        let mut calc = Calculator::new(&Settings::default());
        calc.set_period(55.0);
        calc.set_rate(12.34);
        assert_eq!(calc.period_years(), 40.0);
        assert_eq!(calc.annual_rate_percent(), 12.3);
    }

    #[test]
    fn test_inverted_slider_range_does_not_panic() {
        let mut settings = Settings::default();
        settings.period_slider = SliderRange { min: 40.0, max: 0.0, step: 1.0 };
        let mut calc = Calculator::new(&settings);

        calc.set_period(10.0);
        assert_eq!(calc.period_years(), 10.0);
    }

    #[test]
    fn test_negative_zero_amount_displays_as_zero() {
        let mut calc = Calculator::new(&Settings::default());
        calc.set_period(10.0);
        calc.set_rate(12.0);
        calc.set_amount_text("-0");

        assert_eq!(calc.summary().amount_invested, "₹0.00");
        assert_eq!(calc.summary().profit, "₹0.00");
    }

    #[test]
    fn test_snapshot_and_summary() {
        let mut settings = Settings::default();
        settings.currency_symbol = "$".to_string();
        let mut calc = Calculator::new(&settings);
        calc.set_amount_text("5000");
        calc.set_period(1.0);
        calc.set_rate(12.0);

        let now = Utc::now();
        let entry = calc.snapshot(now).unwrap();
        assert_eq!(entry.timestamp, now);
        assert_eq!(entry.result(), *calc.result());

        let summary = calc.summary();
        assert_eq!(summary.amount_invested, "$60,000.00");
        assert_eq!(summary.period, "1");
        assert_eq!(summary.rate, "12.0");
    }
}
