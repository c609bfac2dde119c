//! Configuration for tokenization and frequency filtering.

use crate::error::{Result, TokfreqError};
use serde::{Deserialize, Serialize};

/// Main configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Tokenizer configuration.
    pub tokenizer: TokenizerConfig,

    /// Frequency filter configuration.
    pub filter: FilterConfig,
}

/// Tokenizer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Keep the original casing of tokens.
    /// When false, every token except emoticons and handles is lowercased.
    /// Default: true.
    pub preserve_case: bool,

    /// Collapse runs of three or more identical characters to three.
    /// Default: false.
    pub reduce_len: bool,

    /// Drop `@handle` tokens from the output.
    /// Default: false.
    pub strip_handles: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            preserve_case: true,
            reduce_len: false,
            strip_handles: false,
        }
    }
}

/// Frequency filter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Tokens with a relative frequency strictly below this are excluded.
    /// Default: 0.30.
    pub threshold: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            threshold: crate::DEFAULT_THRESHOLD,
        }
    }
}

impl FilterConfig {
    /// Creates a configuration with the given threshold.
    pub fn new(threshold: f64) -> Result<Self> {
        let config = Self { threshold };
        config.validate()?;
        Ok(config)
    }

    /// Checks that the threshold lies in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.threshold)
    }
}

/// Rejects thresholds outside `[0, 1]`, NaN included.
pub(crate) fn validate_threshold(threshold: f64) -> Result<()> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(TokfreqError::InvalidThreshold(threshold))
    }
}
