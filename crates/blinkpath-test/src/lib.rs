//! Shared test fixtures for blinkpath crates.
//!
//! This crate provides data and pure functions for testing.
//! It depends only on `blinkpath-core` so model and solver crates can use it
//! from their unit tests without a dependency cycle.
//!
//! - [`levels`] - Sample levels with hand-derived expectations
//! - [`traces`] - Per-step position traces and their occupied cells
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! blinkpath-test = { workspace = true }
//! ```

pub mod levels;
pub mod traces;

pub use levels::SampleLevel;
pub use traces::{occupied_cells, stay_then_jump};
