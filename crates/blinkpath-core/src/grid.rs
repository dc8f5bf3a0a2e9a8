//! Occupancy grid of boolean decision variables.
//!
//! Cell `(t, p)` means "the actor stands on position `p` at time step `t`".
//! Variables are numbered row-major, so `VarId = t * length + p`.
//!
//! # Example
//!
//! ```
//! use blinkpath_core::{Horizon, OccupancyGrid};
//!
//! let grid = OccupancyGrid::new(Horizon::scaled(3, 3), 3);
//! assert_eq!(grid.steps(), 9);
//! assert_eq!(grid.var_count(), 27);
//! assert_eq!(grid.var(2, 1).index(), 7);
//! assert_eq!(grid.coords(grid.var(2, 1)), (2, 1));
//! ```

use std::fmt;

/// Default horizon multiplier applied to the level length.
pub const DEFAULT_HORIZON_MULTIPLIER: usize = 3;

/// Dense identifier of one grid variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(usize);

impl VarId {
    /// Position of the variable in the dense numbering.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Number of time steps the model considers.
///
/// Infeasibility is only meaningful up to this bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Horizon(usize);

impl Horizon {
    /// A horizon of exactly `steps` time steps.
    pub const fn new(steps: usize) -> Self {
        Horizon(steps)
    }

    /// `multiplier * length` time steps, saturating at `usize::MAX`.
    pub const fn scaled(length: usize, multiplier: usize) -> Self {
        Horizon(length.saturating_mul(multiplier))
    }

    /// `multiplier * length` time steps, or `None` on overflow.
    pub const fn checked_scaled(length: usize, multiplier: usize) -> Option<Self> {
        match length.checked_mul(multiplier) {
            Some(steps) => Some(Horizon(steps)),
            None => None,
        }
    }

    /// The default horizon, three steps per position.
    pub const fn for_length(length: usize) -> Self {
        Self::scaled(length, DEFAULT_HORIZON_MULTIPLIER)
    }

    #[inline]
    pub const fn steps(self) -> usize {
        self.0
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} steps", self.0)
    }
}

/// The (time x position) variable matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OccupancyGrid {
    steps: usize,
    length: usize,
}

impl OccupancyGrid {
    pub fn new(horizon: Horizon, length: usize) -> Self {
        Self {
            steps: horizon.steps(),
            length,
        }
    }

    /// Number of time steps (rows).
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of positions (columns).
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn horizon(&self) -> Horizon {
        Horizon::new(self.steps)
    }

    /// Number of variables a grid of `horizon x length` would hold, or `None`
    /// when it does not fit in `usize`.
    pub fn checked_var_count(horizon: Horizon, length: usize) -> Option<usize> {
        horizon.steps().checked_mul(length)
    }

    pub fn var_count(&self) -> usize {
        self.steps * self.length
    }

    /// Last position, or `None` when the grid has no columns.
    pub fn goal(&self) -> Option<usize> {
        self.length.checked_sub(1)
    }

    /// Variable of cell `(time_step, position)`.
    #[inline]
    pub fn var(&self, time_step: usize, position: usize) -> VarId {
        debug_assert!(time_step < self.steps, "time step {time_step} out of range");
        debug_assert!(position < self.length, "position {position} out of range");
        VarId(time_step * self.length + position)
    }

    /// Inverse of [`OccupancyGrid::var`].
    pub fn coords(&self, var: VarId) -> (usize, usize) {
        (var.0 / self.length, var.0 % self.length)
    }

    /// Variables of one time step, left to right.
    pub fn row(&self, time_step: usize) -> impl Iterator<Item = VarId> + '_ {
        (0..self.length).map(move |p| self.var(time_step, p))
    }

    /// Variables of one position, earliest first.
    pub fn column(&self, position: usize) -> impl Iterator<Item = VarId> + '_ {
        (0..self.steps).map(move |t| self.var(t, position))
    }

    /// Every `(time_step, position, var)` triple in numbering order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, VarId)> + '_ {
        (0..self.steps).flat_map(move |t| (0..self.length).map(move |p| (t, p, self.var(t, p))))
    }
}
