//! Display formatting for projection results
//!
//! Presentation only; the engine never rounds or formats.

use crate::input::ProjectionInput;
use crate::projection::ProjectionResult;
use serde::Serialize;

/// Currency symbol used when none is configured
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Format an amount as currency with two decimals and `,` thousands grouping.
///
/// Negative amounts (including `-0.0`) and `NaN` display as zero. Infinite
/// amounts fall back to a bare zero.
pub fn format_currency(value: f64, symbol: &str) -> String {
    let value = if value > 0.0 { value } else { 0.0 };
    if !value.is_finite() {
        return format!("{symbol}0");
    }

    let fixed = format!("{value:.2}");
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{symbol}{}.{fraction}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Period slider label, whole years
pub fn format_period(years: f64) -> String {
    format!("{years:.0}")
}

/// Rate slider label, one decimal place
pub fn format_rate(percent: f64) -> String {
    format!("{percent:.1}")
}

/// Formatted strings for the result cards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSummary {
    pub amount_invested: String,
    pub expected_returns: String,
    pub profit: String,
    pub period: String,
    pub rate: String,
}

impl ResultSummary {
    pub fn new(input: &ProjectionInput, result: &ProjectionResult, symbol: &str) -> Self {
        Self {
            amount_invested: format_currency(result.actual_amount, symbol),
            expected_returns: format_currency(result.future_value(), symbol),
            profit: format_currency(result.net_return, symbol),
            period: format_period(input.period_years),
            rate: format_rate(input.annual_rate_percent),
        }
    }
}

impl std::fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Period (Years):     {}", self.period)?;
        writeln!(f, "Rate of Return (%): {}", self.rate)?;
        writeln!(f, "Amount Invested:    {}", self.amount_invested)?;
        writeln!(f, "Expected Returns:   {}", self.expected_returns)?;
        write!(f, "Profit:             {}", self.profit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(0.0, "₹"), "₹0.00");
        assert_eq!(format_currency(999.5, "$"), "$999.50");
        assert_eq!(format_currency(1000.0, "$"), "$1,000.00");
        assert_eq!(format_currency(64046.6402, "₹"), "₹64,046.64");
        assert_eq!(format_currency(1_234_567.891, "€"), "€1,234,567.89");
    }

    #[test]
    fn test_currency_clamps_negative() {
        assert_eq!(format_currency(-4000.0, "$"), "$0.00");
        assert_eq!(format_currency(-0.0, "$"), "$0.00");
        assert_eq!(format_currency(-0.001, "$"), "$0.00");
        assert_eq!(format_currency(f64::NAN, "$"), "$0.00");
        assert_eq!(format_currency(f64::INFINITY, "$"), "$0");
    }

    #[test]
    fn test_slider_labels() {
        assert_eq!(format_period(10.0), "10");
        assert_eq!(format_rate(12.0), "12.0");
        assert_eq!(format_rate(7.26), "7.3");
    }

    #[test]
    fn test_summary_uses_future_value() {
        let input = ProjectionInput::new(1000.0, 1.0, 10.0);
        let result = ProjectionResult::from_future_value(12_000.0, 12_700.0);
        let summary = ResultSummary::new(&input, &result, "$");

        assert_eq!(summary.amount_invested, "$12,000.00");
        assert_eq!(summary.expected_returns, "$12,700.00");
        assert_eq!(summary.profit, "$700.00");
        assert!(summary.to_string().contains("Profit:"));
    }
}
