//! Solver entry point that hides the wiring.

use blinkpath_config::SolverConfig;
use blinkpath_core::Result;
use blinkpath_solver::{LevelSolver, Outcome};
use tracing::warn;

/// Configuration file read from the working directory.
pub const CONFIG_FILE: &str = "blinkpath.toml";

/// Solves a level string with the `microlp` backend.
///
/// Reads [`CONFIG_FILE`] when present and falls back to defaults otherwise.
/// With the `console` feature, solve events are printed to stdout.
pub fn solve_level(raw: &str) -> Result<Outcome> {
    #[cfg(feature = "console")]
    blinkpath_console::init();

    let config = match SolverConfig::load(CONFIG_FILE) {
        Ok(config) => config,
        Err(blinkpath_config::ConfigError::Io(_)) => SolverConfig::default(),
        Err(err) => {
            warn!(event = "config_ignored", file = CONFIG_FILE, %err);
            SolverConfig::default()
        }
    };

    LevelSolver::new().with_config(config).solve_str(raw)
}
