//! Scenario runner for batch projections
//!
//! Holds one engine configuration and runs many projections with it: a batch
//! of independent inputs, or one input across several rates of return.

use crate::input::{LabeledInput, ProjectionInput};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};
use rayon::prelude::*;
use serde::Serialize;

/// One projected row of a batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioOutcome {
    pub label: Option<String>,
    pub input: ProjectionInput,
    pub result: ProjectionResult,
}

/// Batch runner sharing one engine configuration
///
/// # Example
/// ```
/// use sip_calculator::{ProjectionInput, ScenarioRunner};
///
/// let runner = ScenarioRunner::new();
/// let input = ProjectionInput::new(5000.0, 10.0, 0.0);
/// let results = runner.run_rates(&input, &[8.0, 10.0, 12.0]);
/// assert!(results[2].net_return > results[0].net_return);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with the default engine configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }

    /// Run a single projection
    pub fn run(&self, input: &ProjectionInput) -> ProjectionResult {
        self.engine.project(input)
    }

    /// Run projections for many inputs in parallel, preserving input order
    pub fn run_batch(&self, inputs: &[ProjectionInput]) -> Vec<ProjectionResult> {
        inputs.par_iter().map(|input| self.engine.project(input)).collect()
    }

    /// Run labeled inputs in parallel, keeping each label next to its result
    pub fn run_labeled(&self, inputs: &[LabeledInput]) -> Vec<ScenarioOutcome> {
        let outcomes: Vec<ScenarioOutcome> = inputs
            .par_iter()
            .map(|row| ScenarioOutcome {
                label: row.label.clone(),
                input: row.input,
                result: self.engine.project(&row.input),
            })
            .collect();

        log::debug!("ran {} labeled projections", outcomes.len());
        outcomes
    }

    /// Run one input at several annual rates; the input's own rate is ignored
    pub fn run_rates(&self, input: &ProjectionInput, rates: &[f64]) -> Vec<ProjectionResult> {
        rates
            .iter()
            .map(|&rate| {
                self.engine.project(&ProjectionInput {
                    annual_rate_percent: rate,
                    ..*input
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ContributionTiming;

    #[test]
    fn test_batch_preserves_order() {
        let runner = ScenarioRunner::new();
        let inputs: Vec<_> = (1..=50)
            .map(|n| ProjectionInput::new(100.0 * n as f64, 5.0, 10.0))
            .collect();

        let results = runner.run_batch(&inputs);
        assert_eq!(results.len(), 50);
        for (input, result) in inputs.iter().zip(&results) {
            assert_eq!(*result, runner.run(input));
        }
    }

    #[test]
    fn test_rate_sweep_increases() {
        let runner = ScenarioRunner::new();
        let input = ProjectionInput::new(5000.0, 20.0, 0.0);

        let results = runner.run_rates(&input, &[0.0, 6.0, 9.0, 12.0]);
        assert_eq!(results.len(), 4);
        assert!(results[0].is_zero());
        assert!(results[1].net_return < results[2].net_return);
        assert!(results[2].net_return < results[3].net_return);
    }

    #[test]
    fn test_labeled_batch() {
        let runner = ScenarioRunner::with_config(ProjectionConfig {
            timing: ContributionTiming::EndOfPeriod,
            ..Default::default()
        });
        let inputs = vec![
            LabeledInput {
                label: Some("a".into()),
                input: ProjectionInput::new(1000.0, 1.0, 12.0),
            },
            LabeledInput {
                label: None,
                input: ProjectionInput::new(1000.0, 0.0, 12.0),
            },
        ];

        let outcomes = runner.run_labeled(&inputs);
        assert_eq!(outcomes[0].label.as_deref(), Some("a"));
        assert_eq!(outcomes[0].result, runner.engine().project(&inputs[0].input));
        assert!(outcomes[1].result.is_zero());
    }
}
