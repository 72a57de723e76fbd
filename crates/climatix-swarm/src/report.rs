//! Run results

use serde::{Deserialize, Serialize};

/// A position and the objective value observed there
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub position: Vec<f64>,
    pub value: f64,
}

/// Outcome of a swarm run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationReport {
    /// Global best, absent if no evaluation ever produced a finite value
    pub best: Option<Solution>,
    /// Iterations completed
    pub iterations: usize,
    /// Objective calls made
    pub evaluations: u64,
    /// Objective calls that returned a non-finite value
    pub rejected_evaluations: u64,
    /// Global best value after each iteration's evaluation phase (`+inf`
    /// while unset; serialized as `null` in JSON)
    pub history: Vec<f64>,
}

impl OptimizationReport {
    pub fn best(&self) -> Option<&Solution> {
        self.best.as_ref()
    }

    /// True when the run never found a finite objective value.
    pub fn is_degenerate(&self) -> bool {
        self.best.is_none()
    }
}
