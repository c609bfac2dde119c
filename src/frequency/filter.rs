//! Threshold filtering of a corpus by relative token frequency.

use crate::config::{validate_threshold, FilterConfig};
use crate::error::Result;
use crate::frequency::FrequencyTable;
use log::debug;
use serde::Serialize;
use std::collections::BTreeSet;

/// A set of distinct tokens.
pub type TokenSet = BTreeSet<String>;

/// Returns the distinct tokens whose relative frequency is strictly below
/// `threshold`. Tokens exactly at the threshold are kept out of the set.
pub fn tokens_below(table: &FrequencyTable, threshold: f64) -> Result<TokenSet> {
    validate_threshold(threshold)?;

    let excluded: TokenSet = table
        .iter()
        .filter(|(token, _)| table.freq(token) < threshold)
        .map(|(token, _)| token.to_string())
        .collect();

    debug!(
        "{} of {} distinct tokens below threshold {}",
        excluded.len(),
        table.bins(),
        threshold
    );
    Ok(excluded)
}

/// Drops every occurrence of an excluded token, keeping order and
/// multiplicity of the rest.
pub fn filter_corpus<S: AsRef<str> + Clone>(corpus: &[S], excluded: &TokenSet) -> Vec<S> {
    corpus
        .iter()
        .filter(|token| {
            let token: &str = (*token).as_ref();
            !excluded.contains(token)
        })
        .cloned()
        .collect()
}

/// Outcome of running a [`FrequencyFilter`] over a corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterReport {
    /// Threshold that was applied.
    pub threshold: f64,
    /// Frequencies over the input corpus.
    pub table: FrequencyTable,
    /// Tokens whose relative frequency fell below the threshold.
    pub excluded: TokenSet,
    /// The input corpus without excluded tokens.
    pub retained: Vec<String>,
    /// Frequencies over the retained corpus.
    pub retained_table: FrequencyTable,
}

/// Removes rare tokens from a corpus.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyFilter {
    config: FilterConfig,
}

impl FrequencyFilter {
    /// Creates a filter, validating the configured threshold.
    pub fn new(config: FilterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates a filter with the given threshold.
    pub fn with_threshold(threshold: f64) -> Result<Self> {
        Self::new(FilterConfig::new(threshold)?)
    }

    /// The threshold below which tokens are excluded.
    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    /// Counts the corpus, drops rare tokens and recounts what remains.
    pub fn apply<S: AsRef<str>>(&self, corpus: &[S]) -> Result<FilterReport> {
        let tokens: Vec<&str> = corpus.iter().map(AsRef::as_ref).collect();
        let table = FrequencyTable::from_corpus(&tokens)?;
        let excluded = tokens_below(&table, self.config.threshold)?;
        let retained: Vec<String> = filter_corpus(&tokens, &excluded)
            .into_iter()
            .map(str::to_string)
            .collect();
        let retained_table = FrequencyTable::from_corpus(&retained)?;

        Ok(FilterReport {
            threshold: self.config.threshold,
            table,
            excluded,
            retained,
            retained_table,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TokfreqError;
    use crate::frequency::build_frequency_table;

    const PETS: [&str; 10] = [
        "cat", "cat", "cat", "dog", "dog", "cat", "rabbit", "cat", "cat", "dog",
    ];

    #[test]
    fn test_tokens_below() {
        let table = build_frequency_table(&PETS).unwrap();
        let excluded = tokens_below(&table, 0.30).unwrap();
        assert_eq!(excluded, TokenSet::from(["rabbit".to_string()]));
    }

    #[test]
    fn test_tie_at_threshold_is_kept() {
        let table = build_frequency_table(&PETS).unwrap();
        assert!(!tokens_below(&table, 0.30).unwrap().contains("dog"));
        assert!(tokens_below(&table, 0.31).unwrap().contains("dog"));
    }

    #[test]
    fn test_threshold_extremes() {
        let table = build_frequency_table(&PETS).unwrap();
        assert!(tokens_below(&table, 0.0).unwrap().is_empty());
        assert_eq!(tokens_below(&table, 1.0).unwrap().len(), 3);
    }

    #[test]
    fn test_invalid_threshold() {
        let table = build_frequency_table(&PETS).unwrap();
        assert_eq!(
            tokens_below(&table, 1.01),
            Err(TokfreqError::InvalidThreshold(1.01))
        );
        assert!(tokens_below(&table, f64::NAN).is_err());
    }

    #[test]
    fn test_filter_corpus() {
        let excluded = TokenSet::from(["rabbit".to_string()]);
        let retained = filter_corpus(&PETS, &excluded);
        assert_eq!(
            retained,
            vec!["cat", "cat", "cat", "dog", "dog", "cat", "cat", "cat", "dog"]
        );
    }

    #[test]
    fn test_filter_with_empty_set_is_identity() {
        let retained = filter_corpus(&PETS, &TokenSet::new());
        assert_eq!(retained, PETS.to_vec());
    }

    #[test]
    fn test_filter_apply() {
        let filter = FrequencyFilter::with_threshold(0.30).unwrap();
        let report = filter.apply(&PETS).unwrap();

        assert_eq!(report.table.count("cat"), 6);
        assert_eq!(report.excluded.len(), 1);
        assert_eq!(report.retained.len(), 9);
        assert_eq!(report.retained_table.total(), 9);
        assert_eq!(report.retained_table.count("rabbit"), 0);
    }

    #[test]
    fn test_filter_rejects_bad_threshold() {
        assert!(FrequencyFilter::with_threshold(-0.5).is_err());
        assert!(FrequencyFilter::new(FilterConfig { threshold: 2.0 }).is_err());
    }

    #[test]
    fn test_filter_empty_corpus() {
        let filter = FrequencyFilter::new(FilterConfig::default()).unwrap();
        let corpus: Vec<&str> = Vec::new();
        let report = filter.apply(&corpus).unwrap();
        assert!(report.excluded.is_empty());
        assert!(report.retained.is_empty());
    }
}
