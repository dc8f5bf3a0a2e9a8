//! blinkpath Core - Core types for blinking-platform traversal models
//!
//! This crate provides the fundamental abstractions for blinkpath:
//! - Level parsing and blink classes
//! - The presence predicate that drives platform timing
//! - The (time x position) occupancy grid of boolean decision variables
//! - Error types shared by the rest of the workspace

pub mod error;
pub mod grid;
pub mod level;

pub use error::{BlinkPathError, LevelError, Result};
pub use grid::{Horizon, OccupancyGrid, VarId};
pub use level::{is_present, positions_of, BlinkClass, BlinkIndexMap, Cell, Level};
