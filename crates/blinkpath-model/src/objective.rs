//! Objective: finish early, and prefer far cells while doing so.

use blinkpath_core::OccupancyGrid;

use crate::assignment::Assignment;
use crate::expr::LinearExpr;

/// A linear expression to minimize.
#[derive(Debug, Clone, PartialEq)]
pub struct Objective {
    pub expr: LinearExpr,
}

impl Objective {
    /// `minimize sum_t sum_p t * occ[t][p] / (p + 1)`
    ///
    /// Time weighting rewards early completion. Dividing by `p + 1` makes
    /// occupying farther cells cheaper, which breaks ties toward progress.
    pub fn earliest_progress(grid: &OccupancyGrid) -> Self {
        let expr = grid
            .cells()
            .map(|(t, p, var)| (var, t as f64 / (p + 1) as f64))
            .collect();
        Self { expr }
    }

    /// Objective value under `assignment`.
    pub fn value(&self, assignment: &Assignment) -> f64 {
        self.expr.evaluate(assignment)
    }

    /// Dense coefficient vector indexed by variable.
    pub fn coefficients(&self, var_count: usize) -> Vec<f64> {
        let mut dense = vec![0.0; var_count];
        for &(var, coefficient) in self.expr.terms() {
            dense[var.index()] = coefficient;
        }
        dense
    }
}
