//! Integer-program encoding for blinkpath.
//!
//! This crate turns a [`Level`](blinkpath_core::Level) and a
//! [`Horizon`](blinkpath_core::Horizon) into an immutable [`Model`]:
//! - Rule constraints (start, single arrival, one actor, jump window)
//! - Blink constraints (absent platforms force their cells to zero)
//! - A minimization objective favoring early progress
//!
//! The model is a plain value. It can be checked against any assignment
//! without a solver, see [`Model::check`].

pub mod assignment;
pub mod blink;
pub mod check;
pub mod constraint;
pub mod expr;
pub mod model;
pub mod objective;
pub mod rules;

pub use assignment::Assignment;
pub use check::Violation;
pub use constraint::{Comparison, ConstraintFamily, ConstraintSet, LinearConstraint};
pub use expr::LinearExpr;
pub use model::{Model, ModelError, ModelStats};
pub use objective::Objective;
