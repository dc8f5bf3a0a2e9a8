//! The seam between the encoding and an integer-programming backend.

use blinkpath_model::{Assignment, Model};
use thiserror::Error;

/// Failure reported by a backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdapterError {
    /// No 0/1 assignment satisfies every constraint.
    #[error("model is infeasible")]
    Infeasible,

    #[error("objective is unbounded")]
    Unbounded,

    /// Anything else the backend reports. Passed through unchanged.
    #[error("{backend} failed: {message}")]
    Internal {
        backend: &'static str,
        message: String,
    },
}

/// An optimal assignment and its objective value.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub assignment: Assignment,
    pub objective: f64,
}

impl Solution {
    pub fn new(assignment: Assignment, objective: f64) -> Self {
        Self {
            assignment,
            objective,
        }
    }
}

/// An integer-programming backend.
///
/// Implementations receive the full model, return an optimal assignment or
/// an error, and have no other side effects.
pub trait SolverAdapter {
    /// Backend name for logs.
    fn name(&self) -> &'static str;

    /// Minimizes the model's objective over 0/1 assignments.
    fn solve(&self, model: &Model) -> Result<Solution, AdapterError>;
}

impl<A: SolverAdapter + ?Sized> SolverAdapter for &A {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn solve(&self, model: &Model) -> Result<Solution, AdapterError> {
        (**self).solve(model)
    }
}
