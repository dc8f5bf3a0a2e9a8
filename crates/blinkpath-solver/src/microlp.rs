//! Backend over the pure-Rust `microlp` branch-and-bound solver.

use blinkpath_model::{Assignment, Comparison, Model};
use microlp::{ComparisonOp, OptimizationDirection, Problem, Variable};
use tracing::trace;

use crate::adapter::{AdapterError, Solution, SolverAdapter};

const BACKEND: &str = "microlp";

/// Solves models with [`microlp`], one binary variable per grid cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct MicroLpAdapter;

impl MicroLpAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl SolverAdapter for MicroLpAdapter {
    fn name(&self) -> &'static str {
        BACKEND
    }

    fn solve(&self, model: &Model) -> Result<Solution, AdapterError> {
        let var_count = model.grid().var_count();
        let mut problem = Problem::new(OptimizationDirection::Minimize);
        let vars: Vec<Variable> = model
            .objective()
            .coefficients(var_count)
            .into_iter()
            .map(|coefficient| problem.add_binary_var(coefficient))
            .collect();

        for constraint in model.constraints() {
            let expr: microlp::LinearExpr = constraint
                .expr
                .terms()
                .iter()
                .map(|&(var, coefficient)| (vars[var.index()], coefficient))
                .collect();
            let op = match constraint.comparison {
                Comparison::Eq => ComparisonOp::Eq,
                Comparison::Le => ComparisonOp::Le,
            };
            problem.add_constraint(expr, op, constraint.rhs);
        }
        trace!(event = "problem_loaded", backend = BACKEND, ?problem);

        let solution = problem.solve().map_err(AdapterError::from)?;
        let values = vars
            .iter()
            .map(|&var| solution.var_value_rounded(var) > 0.5)
            .collect();
        Ok(Solution::new(
            Assignment::from_values(values),
            solution.objective(),
        ))
    }
}

impl From<microlp::Error> for AdapterError {
    fn from(err: microlp::Error) -> Self {
        match err {
            microlp::Error::Infeasible => AdapterError::Infeasible,
            microlp::Error::Unbounded => AdapterError::Unbounded,
            microlp::Error::InternalError(message) => AdapterError::Internal {
                backend: BACKEND,
                message,
            },
        }
    }
}
