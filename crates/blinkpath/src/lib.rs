//! blinkpath - Blinking-platform traversal as a 0/1 integer program
//!
//! A level is a line of cells, some of which vanish and reappear on a fixed
//! period. `blinkpath` encodes "can a single actor with a two-cell jump get
//! from the first cell to the last" as constraints over a (time x position)
//! grid of boolean variables and hands them to an integer-programming
//! backend.
//!
//! # Example
//!
//! ```rust
//! use blinkpath::prelude::*;
//!
//! let outcome = LevelSolver::new().solve_str("xx").unwrap();
//! let traversal = outcome.traversal().unwrap();
//! assert_eq!(traversal.completed_at(), Some(1));
//! ```

// Level and grid types
pub use blinkpath_core::{
    is_present, BlinkClass, BlinkIndexMap, BlinkPathError, Cell, Horizon, Level, LevelError,
    OccupancyGrid, Result, VarId,
};

// Integer-program encoding
pub use blinkpath_model::{
    Assignment, ConstraintFamily, ConstraintSet, LinearConstraint, Model, ModelStats, Objective,
    Violation,
};

// Solving pipeline
pub use blinkpath_solver::{
    AdapterError, LevelSolver, MicroLpAdapter, Outcome, Solution, SolverAdapter, Traversal,
};

pub use blinkpath_config::SolverConfig;

#[cfg(feature = "console")]
pub use blinkpath_console as console;

mod solver;
pub use solver::{solve_level, CONFIG_FILE};

pub mod prelude {
    pub use super::{solve_level, Level, LevelSolver, Outcome, SolverConfig, Traversal};
}
