//! Platform timing as zero-forcing constraints.

use blinkpath_core::{is_present, BlinkIndexMap, OccupancyGrid};

use crate::constraint::{ConstraintFamily, LinearConstraint};
use crate::expr::LinearExpr;

/// `occ[t][p] = 0` for every indexed position `p` and every step `t` at
/// which its platform is absent.
///
/// Constraints are emitted class by class, then position by position, then
/// step by step. Plain platforms are not indexed and produce nothing.
pub fn blink_constraints<'a>(
    grid: &'a OccupancyGrid,
    index: &'a BlinkIndexMap,
) -> impl Iterator<Item = LinearConstraint> + 'a {
    index.iter().flat_map(move |(class, positions)| {
        positions.iter().flat_map(move |&p| {
            (0..grid.steps())
                .filter(move |&t| !is_present(class, t))
                .map(move |t| {
                    LinearConstraint::eq(
                        ConstraintFamily::Blink,
                        LinearExpr::var(grid.var(t, p)),
                        0.0,
                    )
                })
        })
    })
}

#[cfg(test)]
mod tests {
    use blinkpath_core::{Horizon, Level};

    use super::*;

    fn zeroed_cells(raw: &str, steps: usize) -> Vec<(usize, usize)> {
        let level = Level::parse(raw).unwrap();
        let grid = OccupancyGrid::new(Horizon::new(steps), level.len());
        let index = level.blink_index();
        blink_constraints(&grid, &index)
            .map(|c| {
                assert_eq!(c.rhs, 0.0);
                assert_eq!(c.expr.len(), 1);
                grid.coords(c.expr.terms()[0].0)
            })
            .collect()
    }

    #[test]
    fn test_plain_platforms_unconstrained() {
        assert!(zeroed_cells("xxxx", 12).is_empty());
    }

    #[test]
    fn test_empty_cell_zeroed_every_step() {
        let cells = zeroed_cells("x.x", 9);
        assert_eq!(cells, (0..9).map(|t| (t, 1)).collect::<Vec<_>>());
    }

    #[test]
    fn test_period_two_visible_every_third_step() {
        let cells = zeroed_cells("x2x", 9);
        let steps: Vec<usize> = cells.iter().map(|&(t, _)| t).collect();
        assert_eq!(steps, vec![0, 1, 3, 4, 6, 7]);
        assert!(cells.iter().all(|&(_, p)| p == 1));
    }

    #[test]
    fn test_one_constraint_per_absent_step() {
        // Period 1: absent on even steps. Period 5: present only at step 5.
        let cells = zeroed_cells("x15", 6);
        let p1 = cells.iter().filter(|&&(_, p)| p == 1).count();
        let p2 = cells.iter().filter(|&&(_, p)| p == 2).count();
        assert_eq!(p1, 3);
        assert_eq!(p2, 5);
    }
}
