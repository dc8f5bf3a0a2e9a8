//! Movement rules as linear constraints.
//!
//! With `N` positions and `T` steps:
//!
//! - start: `occ[0][0] = 1`
//! - end-once: `sum_t occ[t][N-1] = 1`
//! - single-actor: for every `t`, `sum_p occ[t][p] <= 1`
//! - jump-window: for every `t < T-1` and `j <= N-3`,
//!   `sum_{x in {t,t+1}, y in j..=j+2} occ[x][y] = 2 * (1 - sum_{z<t} occ[z][N-1])`
//!
//! The jump window is stored with every variable on the left:
//! `window + 2 * sum_{z<t} occ[z][N-1] = 2`. Once the goal has been reached
//! at some earlier step the window must be empty.

use blinkpath_core::OccupancyGrid;

use crate::constraint::{ConstraintFamily, LinearConstraint};
use crate::expr::LinearExpr;

/// Steps covered by one jump window.
pub const WINDOW_STEPS: usize = 2;

/// Positions covered by one jump window. Reach beyond two cells needs a
/// different window shape, so this is not a tunable.
pub const WINDOW_WIDTH: usize = 3;

/// All rule constraints for `grid`, in family order.
///
/// The grid must have at least two positions and one step.
pub fn rule_constraints(grid: &OccupancyGrid) -> Vec<LinearConstraint> {
    let mut constraints = vec![start(grid), end_once(grid)];
    constraints.extend(single_actor(grid));
    constraints.extend(jump_windows(grid));
    constraints
}

/// `occ[0][0] = 1`
pub fn start(grid: &OccupancyGrid) -> LinearConstraint {
    LinearConstraint::eq(ConstraintFamily::Start, LinearExpr::var(grid.var(0, 0)), 1.0)
}

/// `sum_t occ[t][N-1] = 1`
pub fn end_once(grid: &OccupancyGrid) -> LinearConstraint {
    let goal = grid.length() - 1;
    LinearConstraint::eq(ConstraintFamily::EndOnce, LinearExpr::sum(grid.column(goal)), 1.0)
}

/// One `sum_p occ[t][p] <= 1` per step.
pub fn single_actor(grid: &OccupancyGrid) -> impl Iterator<Item = LinearConstraint> + '_ {
    (0..grid.steps()).map(move |t| {
        LinearConstraint::le(ConstraintFamily::SingleActor, LinearExpr::sum(grid.row(t)), 1.0)
    })
}

/// One constraint per window that fits inside the grid.
pub fn jump_windows(grid: &OccupancyGrid) -> impl Iterator<Item = LinearConstraint> + '_ {
    let steps = grid.steps().saturating_sub(WINDOW_STEPS - 1);
    let starts = (grid.length() + 1).saturating_sub(WINDOW_WIDTH);
    (0..steps).flat_map(move |t| (0..starts).map(move |j| jump_window(grid, t, j)))
}

/// The window anchored at step `t` and position `j`.
pub fn jump_window(grid: &OccupancyGrid, t: usize, j: usize) -> LinearConstraint {
    let goal = grid.length() - 1;
    let window = (t..t + WINDOW_STEPS)
        .flat_map(|x| (j..j + WINDOW_WIDTH).map(move |y| (grid.var(x, y), 1.0)));
    let arrived = (0..t).map(|z| (grid.var(z, goal), WINDOW_STEPS as f64));
    LinearConstraint::eq(
        ConstraintFamily::JumpWindow,
        window.chain(arrived).collect(),
        WINDOW_STEPS as f64,
    )
}

#[cfg(test)]
mod tests {
    use blinkpath_core::Horizon;

    use super::*;

    #[test]
    fn test_family_counts() {
        // N = 4, T = 12: 1 start, 1 end, 12 rows, 11 * 2 windows.
        let grid = OccupancyGrid::new(Horizon::for_length(4), 4);
        let constraints = rule_constraints(&grid);
        let count = |f| constraints.iter().filter(|c| c.family == f).count();

        assert_eq!(count(ConstraintFamily::Start), 1);
        assert_eq!(count(ConstraintFamily::EndOnce), 1);
        assert_eq!(count(ConstraintFamily::SingleActor), 12);
        assert_eq!(count(ConstraintFamily::JumpWindow), 22);
    }

    #[test]
    fn test_no_windows_for_two_positions() {
        let grid = OccupancyGrid::new(Horizon::for_length(2), 2);
        assert_eq!(jump_windows(&grid).count(), 0);
    }

    #[test]
    fn test_no_windows_for_single_step() {
        let grid = OccupancyGrid::new(Horizon::new(1), 5);
        assert_eq!(jump_windows(&grid).count(), 0);
    }

    #[test]
    fn test_window_terms() {
        let grid = OccupancyGrid::new(Horizon::new(6), 4);
        let c = jump_window(&grid, 2, 1);

        assert_eq!(c.rhs, 2.0);
        assert_eq!(c.expr.len(), 6 + 2);
        for x in 2..4 {
            for y in 1..4 {
                assert_eq!(c.expr.coefficient(grid.var(x, y)), 1.0);
            }
        }
        assert_eq!(c.expr.coefficient(grid.var(0, 3)), 2.0);
        assert_eq!(c.expr.coefficient(grid.var(1, 3)), 2.0);
        assert_eq!(c.expr.coefficient(grid.var(2, 0)), 0.0);
    }

    #[test]
    fn test_first_window_has_no_arrival_terms() {
        let grid = OccupancyGrid::new(Horizon::new(3), 3);
        let c = jump_window(&grid, 0, 0);
        assert_eq!(c.expr.len(), 6);
    }

    #[test]
    fn test_end_once_covers_goal_column() {
        let grid = OccupancyGrid::new(Horizon::new(3), 2);
        let c = end_once(&grid);
        let vars: Vec<usize> = c.expr.terms().iter().map(|(v, _)| v.index()).collect();
        assert_eq!(vars, vec![1, 3, 5]);
    }
}
