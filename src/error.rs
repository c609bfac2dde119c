//! Error types for tokfreq.

use thiserror::Error;

/// The main error type for tokfreq operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokfreqError {
    /// Frequency threshold outside `[0, 1]` (or NaN).
    #[error("Invalid threshold: {0} (expected a value in [0, 1])")]
    InvalidThreshold(f64),

    /// A corpus element that is not a valid token.
    #[error("Invalid token at corpus position {index}: tokens must be non-empty")]
    InvalidToken {
        /// Position of the offending element in the corpus.
        index: usize,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for tokfreq operations.
pub type Result<T> = std::result::Result<T, TokfreqError>;

impl From<serde_json::Error> for TokfreqError {
    fn from(err: serde_json::Error) -> Self {
        TokfreqError::Serialization(err.to_string())
    }
}
