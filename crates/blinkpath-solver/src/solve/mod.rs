//! Level solving pipeline.
//!
//! Logging levels:
//! - **INFO**: Solve start/end with problem scale and outcome
//! - **DEBUG**: Constraint counts per family, rendered grid when enabled
//! - **TRACE**: The loaded backend problem

use blinkpath_config::SolverConfig;
use blinkpath_core::{BlinkPathError, Horizon, Level, Result};
use blinkpath_model::Model;
use tracing::{debug, info};

use crate::adapter::{AdapterError, SolverAdapter};
use crate::microlp::MicroLpAdapter;
use crate::traversal::Traversal;


/// Result of solving one level.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The goal is reached. Trivial levels yield [`Traversal::empty`].
    Completed(Traversal),
    /// No traversal exists within `horizon`. A longer horizon may find one.
    Unreachable { horizon: Horizon },
}

impl Outcome {
    pub fn traversal(&self) -> Option<&Traversal> {
        match self {
            Outcome::Completed(traversal) => Some(traversal),
            Outcome::Unreachable { .. } => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed(_))
    }
}

/// Solves levels with a configured backend.
///
/// # Example
///
/// ```
/// use blinkpath_solver::{LevelSolver, Outcome};
///
/// let solver = LevelSolver::new();
/// let outcome = solver.solve_str("xx").unwrap();
///
/// let traversal = outcome.traversal().unwrap();
/// assert_eq!(traversal.completed_at(), Some(1));
/// assert_eq!(traversal.position_at(0), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct LevelSolver<A = MicroLpAdapter> {
    config: SolverConfig,
    adapter: A,
}

impl LevelSolver<MicroLpAdapter> {
    /// Default configuration with the `microlp` backend.
    pub fn new() -> Self {
        Self::with_adapter(MicroLpAdapter)
    }
}

impl Default for LevelSolver<MicroLpAdapter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: SolverAdapter> LevelSolver<A> {
    pub fn with_adapter(adapter: A) -> Self {
        Self {
            config: SolverConfig::default(),
            adapter,
        }
    }

    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Parses `raw` and solves it.
    pub fn solve_str(&self, raw: &str) -> Result<Outcome> {
        let level = Level::parse(raw)?;
        self.solve(&level)
    }

    /// Solves `level`.
    ///
    /// Levels of length 0 or 1 complete immediately without building a model
    /// or calling the backend.
    pub fn solve(&self, level: &Level) -> Result<Outcome> {
        self.config.validate()?;

        if level.is_trivial() {
            info!(
                event = "solve_end",
                level_length = level.len(),
                "Level already complete"
            );
            return Ok(Outcome::Completed(Traversal::empty()));
        }

        let horizon = self.config.horizon_for(level.len())?;
        let model = Model::build(level, horizon)?;
        let stats = model.stats();
        info!(
            event = "solve_start",
            backend = self.adapter.name(),
            level_length = stats.level_length,
            horizon = stats.horizon,
            variable_count = stats.variable_count,
            constraint_count = stats.constraint_count,
            "Solving started"
        );

        let solution = match self.adapter.solve(&model) {
            Ok(solution) => solution,
            Err(AdapterError::Infeasible) => {
                info!(
                    event = "solve_end",
                    horizon = horizon.steps(),
                    "No traversal within horizon"
                );
                return Ok(Outcome::Unreachable { horizon });
            }
            Err(err) => return Err(BlinkPathError::Solver(err.to_string())),
        };

        if self.config.verify_solution {
            if let Some(violation) = model.first_violation(&solution.assignment) {
                return Err(BlinkPathError::Verification {
                    family: violation.family.name().to_string(),
                    detail: violation.to_string(),
                });
            }
        }

        let traversal =
            Traversal::from_assignment(model.grid(), &solution.assignment, solution.objective);
        if self.config.render_grid {
            debug!(event = "grid", "\n{}", traversal.render_grid());
        }
        info!(
            event = "solve_end",
            completed_at = traversal.completed_at(),
            objective = solution.objective,
            "Solving ended"
        );
        Ok(Outcome::Completed(traversal))
    }
}
