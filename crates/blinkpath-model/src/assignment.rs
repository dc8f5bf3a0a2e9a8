//! 0/1 values for every grid variable.

use blinkpath_core::{OccupancyGrid, VarId};

/// A full 0/1 assignment, indexed by [`VarId`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Assignment {
    values: Vec<bool>,
}

impl Assignment {
    /// All variables at 0.
    pub fn zeros(var_count: usize) -> Self {
        Self {
            values: vec![false; var_count],
        }
    }

    pub fn from_values(values: Vec<bool>) -> Self {
        Self { values }
    }

    /// Sets exactly the given `(time_step, position)` cells to 1.
    pub fn from_cells(
        grid: &OccupancyGrid,
        cells: impl IntoIterator<Item = (usize, usize)>,
    ) -> Self {
        let mut assignment = Self::zeros(grid.var_count());
        for (t, p) in cells {
            assignment.set(grid.var(t, p), true);
        }
        assignment
    }

    pub fn set(&mut self, var: VarId, value: bool) {
        self.values[var.index()] = value;
    }

    /// Value of `var`; variables outside the assignment read as 0.
    #[inline]
    pub fn is_set(&self, var: VarId) -> bool {
        self.values.get(var.index()).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Variables set to 1, ascending.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v)
            .map(|(i, _)| i)
    }
}
