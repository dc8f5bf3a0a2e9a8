//! Reads a solved grid back into a per-step trace.

use std::fmt;

use blinkpath_core::OccupancyGrid;
use blinkpath_model::Assignment;

/// Where the actor stands at each time step.
///
/// Steps after completion are usually `None`: the grid goes quiet once the
/// goal has been reached.
#[derive(Debug, Clone, PartialEq)]
pub struct Traversal {
    length: usize,
    positions: Vec<Option<usize>>,
    completed_at: Option<usize>,
    objective: f64,
}

impl Traversal {
    /// The traversal of a level that is complete before any move.
    pub fn empty() -> Self {
        Self {
            length: 0,
            positions: Vec::new(),
            completed_at: None,
            objective: 0.0,
        }
    }

    /// Extracts the occupied position of every row of `grid`.
    pub fn from_assignment(grid: &OccupancyGrid, assignment: &Assignment, objective: f64) -> Self {
        let positions: Vec<Option<usize>> = (0..grid.steps())
            .map(|t| grid.row(t).position(|var| assignment.is_set(var)))
            .collect();
        let completed_at = grid
            .goal()
            .and_then(|goal| positions.iter().position(|&p| p == Some(goal)));
        Self {
            length: grid.length(),
            positions,
            completed_at,
            objective,
        }
    }

    /// Whether there are no steps at all.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of time steps covered.
    pub fn steps(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[Option<usize>] {
        &self.positions
    }

    pub fn position_at(&self, time_step: usize) -> Option<usize> {
        self.positions.get(time_step).copied().flatten()
    }

    /// Step at which the goal was occupied.
    pub fn completed_at(&self) -> Option<usize> {
        self.completed_at
    }

    /// Objective value of the assignment this trace came from.
    pub fn objective(&self) -> f64 {
        self.objective
    }

    /// The full grid, one row per step, cells as space-separated `0`/`1`.
    pub fn render_grid(&self) -> String {
        let mut out = String::new();
        for position in &self.positions {
            let row: Vec<&str> = (0..self.length)
                .map(|p| if *position == Some(p) { "1" } else { "0" })
                .collect();
            out.push_str(&row.join(" "));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Traversal {
    /// One entry per step: the position, or `-` when off the board.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let steps: Vec<String> = self
            .positions
            .iter()
            .map(|p| p.map_or_else(|| "-".to_string(), |p| p.to_string()))
            .collect();
        write!(f, "[{}]", steps.join(" "))
    }
}
