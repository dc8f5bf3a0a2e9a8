//! blinkpath Solver
//!
//! This crate provides the solving pipeline:
//! - The [`SolverAdapter`] seam to an integer-programming backend
//! - [`MicroLpAdapter`], the default pure-Rust backend
//! - [`Traversal`] extraction from a solved grid
//! - [`LevelSolver`], which wires level, config, model and backend together

pub mod adapter;
pub mod microlp;
pub mod solve;
pub mod traversal;

pub use adapter::{AdapterError, Solution, SolverAdapter};
pub use crate::microlp::MicroLpAdapter;
pub use solve::{LevelSolver, Outcome};
pub use traversal::Traversal;
