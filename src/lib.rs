//! # tokfreq - Token Frequency Toolkit
//!
//! Two small, independent text utilities:
//!
//! - **Frequency filtering**: count tokens in a corpus, find the ones whose
//!   relative frequency falls strictly below a threshold, and drop them while
//!   keeping the order and multiplicity of everything else.
//! - **Tokenization**: split social-media style text into words, punctuation,
//!   emoticons, handles, hashtags, URLs and single-character fallbacks.
//!
//! ## Quick Start
//!
//! ```rust
//! use tokfreq::{build_frequency_table, filter_corpus, tokens_below};
//!
//! let corpus = ["cat", "cat", "cat", "dog", "dog", "cat", "rabbit", "cat", "cat", "dog"];
//! let table = build_frequency_table(&corpus)?;
//! assert_eq!(table.freq("rabbit"), 0.1);
//!
//! let rare = tokens_below(&table, 0.30)?;
//! let reduced = filter_corpus(&corpus, &rare);
//! assert_eq!(reduced.len(), 9);
//! # Ok::<(), tokfreq::TokfreqError>(())
//! ```
//!
//! ```rust
//! use tokfreq::{tokenize, TokenizerConfig};
//!
//! let tokens = tokenize("Thank you!!! :-)", &TokenizerConfig::default());
//! let text: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(text, vec!["Thank", "you", "!!!", ":-)"]);
//! ```
//!
//! ## Architecture
//!
//! - [`frequency`] - Frequency tables and threshold filtering
//! - [`text`] - Tokenization and token normalization
//! - [`config`] - Configuration for both
//! - [`error`] - Error types

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod frequency;
pub mod text;

// Re-export commonly used types
pub use config::{Config, FilterConfig, TokenizerConfig};
pub use error::{Result, TokfreqError};
pub use frequency::{
    build_frequency_table, filter_corpus, tokens_below, CumulativeRow, FilterReport,
    FrequencyEntry, FrequencyFilter, FrequencyTable, TokenSet,
};
pub use text::{tokenize, Normalizer, Token, TokenKind, Tokenizer};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default exclusion threshold.
pub const DEFAULT_THRESHOLD: f64 = 0.30;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_threshold() {
        assert_eq!(FilterConfig::default().threshold, DEFAULT_THRESHOLD);
    }
}
