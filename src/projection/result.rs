//! Output structures for projections

use serde::{Deserialize, Serialize};

/// Complete projection result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Total principal contributed over the period
    pub actual_amount: f64,

    /// Future value minus principal
    pub net_return: f64,

    /// Future value as a multiple of principal (0 when nothing was invested)
    pub times_rolled_over: f64,
}

impl ProjectionResult {
    /// All-zero result reported for degenerate inputs
    pub const fn zero() -> Self {
        Self {
            actual_amount: 0.0,
            net_return: 0.0,
            times_rolled_over: 0.0,
        }
    }

    /// Derive net return and multiple from a single computed future value
    pub fn from_future_value(actual_amount: f64, future_value: f64) -> Self {
        let times_rolled_over = if actual_amount == 0.0 {
            0.0
        } else {
            future_value / actual_amount
        };

        Self {
            actual_amount,
            net_return: future_value - actual_amount,
            times_rolled_over,
        }
    }

    /// Projected total value ("Expected Returns" on the summary card)
    pub fn future_value(&self) -> f64 {
        self.actual_amount + self.net_return
    }

    /// Multiple truncated toward zero, e.g. `2.9` reports as `2`
    pub fn whole_multiples(&self) -> i64 {
        self.times_rolled_over.trunc() as i64
    }

    pub fn is_zero(&self) -> bool {
        self.actual_amount == 0.0 && self.net_return == 0.0 && self.times_rolled_over == 0.0
    }
}

impl Default for ProjectionResult {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_when_nothing_invested() {
        let result = ProjectionResult::from_future_value(0.0, 0.0);
        assert!(result.is_zero());
        assert_eq!(result, ProjectionResult::default());
    }

    #[test]
    fn test_from_future_value() {
        let result = ProjectionResult::from_future_value(100_000.0, 250_000.0);
        assert_eq!(result.net_return, 150_000.0);
        assert_eq!(result.times_rolled_over, 2.5);
        assert_eq!(result.future_value(), 250_000.0);
        assert_eq!(result.whole_multiples(), 2);
    }

    #[test]
    fn test_whole_multiples_truncates() {
        let result = ProjectionResult {
            actual_amount: 1.0,
            net_return: 1.99,
            times_rolled_over: 2.99,
        };
        assert_eq!(result.whole_multiples(), 2);
        assert_eq!(ProjectionResult::zero().whole_multiples(), 0);
    }

    #[test]
    fn test_serializes_field_names() {
        let json = serde_json::to_value(ProjectionResult::from_future_value(10.0, 20.0)).unwrap();
        assert_eq!(json["actual_amount"], 10.0);
        assert_eq!(json["net_return"], 10.0);
        assert_eq!(json["times_rolled_over"], 2.0);
    }
}
