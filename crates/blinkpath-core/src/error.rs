//! Error types for blinkpath

use thiserror::Error;

/// Error raised while parsing a level string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    /// A character outside the level alphabet.
    #[error("unknown cell marker {marker:?} at position {position}")]
    UnknownCell { marker: char, position: usize },
}

/// Main error type for blinkpath operations
#[derive(Debug, Error)]
pub enum BlinkPathError {
    /// The level string could not be parsed
    #[error("Malformed level: {0}")]
    Level(#[from] LevelError),

    /// Error in solver configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The integer program could not be built
    #[error("Model error: {0}")]
    Model(String),

    /// The integer-programming backend failed
    #[error("Solver error: {0}")]
    Solver(String),

    /// The backend returned an assignment that breaks the model
    #[error("Solution violates {family} constraint: {detail}")]
    Verification { family: String, detail: String },
}

/// Result type alias for blinkpath operations
pub type Result<T> = std::result::Result<T, BlinkPathError>;
