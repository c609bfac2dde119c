//! Per-token normalization: case folding, length reduction and handle stripping.

use crate::config::TokenizerConfig;
use crate::text::TokenKind;

/// Longest run of one repeated character kept by length reduction.
const MAX_RUN: usize = 3;

/// Token normalizer that applies the tokenizer's configured transformations.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: TokenizerConfig,
}

impl Normalizer {
    /// Creates a new normalizer with the given configuration.
    pub fn new(config: TokenizerConfig) -> Self {
        Self { config }
    }

    /// Creates a normalizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(TokenizerConfig::default())
    }

    /// Normalizes a single token of the given kind.
    ///
    /// Returns `None` if the token should be dropped from the output.
    pub fn normalize_token(&self, token: &str, kind: TokenKind) -> Option<String> {
        if self.config.strip_handles && kind == TokenKind::Handle {
            return None;
        }

        let mut result = if self.config.reduce_len && !keeps_length(token, kind) {
            reduce_lengthening(token)
        } else {
            token.to_string()
        };

        if !self.config.preserve_case && !kind.is_case_sensitive() {
            result = result.to_lowercase();
        }

        Some(result)
    }
}

/// Addresses and anything holding a digit are never shortened, since
/// `1000000` and `1000` are different values.
fn keeps_length(token: &str, kind: TokenKind) -> bool {
    kind.is_address() || kind == TokenKind::Number || token.chars().any(char::is_numeric)
}

/// Collapses every run of more than three identical characters to exactly three.
pub fn reduce_lengthening(token: &str) -> String {
    let mut result = String::with_capacity(token.len());
    let mut previous = None;
    let mut run = 0;

    for c in token.chars() {
        if previous == Some(c) {
            run += 1;
        } else {
            previous = Some(c);
            run = 1;
        }

        if run <= MAX_RUN {
            result.push(c);
        }
    }

    result
}
