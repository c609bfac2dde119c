//! Token frequency counting.

use crate::error::{Result, TokfreqError};
use log::debug;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

/// A distinct token with its count and relative frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    /// The token.
    pub token: String,
    /// Number of occurrences.
    pub count: usize,
    /// `count / total`.
    pub frequency: f64,
}

/// A row of the cumulative distribution over the most common tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CumulativeRow {
    /// The token.
    pub token: String,
    /// Number of occurrences of this token.
    pub count: usize,
    /// Occurrences of this token and every more common one.
    pub cumulative_count: usize,
    /// `cumulative_count / total`.
    pub cumulative_frequency: f64,
}

/// Counts of distinct tokens over a corpus.
///
/// Entries keep the order in which tokens first occur in the corpus, so every
/// listing derived from the table is deterministic. The sum of all counts is
/// always the length of the corpus the table was built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    positions: HashMap<String, usize>,
    total: usize,
}

impl FrequencyTable {
    /// Counts every token in the corpus.
    ///
    /// An empty corpus yields an empty table. Empty strings are rejected.
    pub fn from_corpus<S: AsRef<str>>(corpus: &[S]) -> Result<Self> {
        let mut table = Self::default();

        for (index, token) in corpus.iter().enumerate() {
            let token = token.as_ref();
            if token.is_empty() {
                return Err(TokfreqError::InvalidToken { index });
            }

            match table.positions.get(token) {
                Some(&position) => table.entries[position].1 += 1,
                None => {
                    table.positions.insert(token.to_string(), table.entries.len());
                    table.entries.push((token.to_string(), 1));
                }
            }
        }
        table.total = corpus.len();

        debug!(
            "Built frequency table: {} tokens, {} distinct",
            table.total,
            table.bins()
        );
        Ok(table)
    }

    /// Total number of tokens counted.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct tokens.
    #[inline]
    pub fn bins(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no tokens were counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of occurrences of `token` (0 if absent).
    pub fn count(&self, token: &str) -> usize {
        self.positions
            .get(token)
            .map_or(0, |&position| self.entries[position].1)
    }

    /// Relative frequency of `token` in `[0, 1]` (0 if absent or the table is empty).
    pub fn freq(&self, token: &str) -> f64 {
        self.relative(self.count(token))
    }

    fn relative(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64
        }
    }

    /// Iterates over `(token, count)` in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries
            .iter()
            .map(|(token, count)| (token.as_str(), *count))
    }

    /// All entries with their relative frequencies, in first-occurrence order.
    pub fn entries(&self) -> Vec<FrequencyEntry> {
        self.iter()
            .map(|(token, count)| FrequencyEntry {
                token: token.to_string(),
                count,
                frequency: self.relative(count),
            })
            .collect()
    }

    /// The `n` most common tokens (all of them if `n` is `None`), by
    /// descending count. Ties keep first-occurrence order.
    pub fn most_common(&self, n: Option<usize>) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        if let Some(n) = n {
            ranked.truncate(n);
        }
        ranked
    }

    /// The most common token, if any.
    pub fn max(&self) -> Option<&str> {
        self.most_common(Some(1)).first().map(|(token, _)| *token)
    }

    /// Tokens occurring exactly once.
    pub fn hapaxes(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, count)| *count == 1)
            .map(|(token, _)| token)
            .collect()
    }

    /// Running totals over [`most_common`](Self::most_common).
    pub fn cumulative(&self, n: Option<usize>) -> Vec<CumulativeRow> {
        let mut running = 0;
        self.most_common(n)
            .into_iter()
            .map(|(token, count)| {
                running += count;
                CumulativeRow {
                    token: token.to_string(),
                    count,
                    cumulative_count: running,
                    cumulative_frequency: self.relative(running),
                }
            })
            .collect()
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries())
    }
}

/// Counts every distinct token in `corpus`.
pub fn build_frequency_table<S: AsRef<str>>(corpus: &[S]) -> Result<FrequencyTable> {
    FrequencyTable::from_corpus(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PETS: [&str; 10] = [
        "cat", "cat", "cat", "dog", "dog", "cat", "rabbit", "cat", "cat", "dog",
    ];

    #[test]
    fn test_counts() {
        let table = build_frequency_table(&PETS).unwrap();
        assert_eq!(table.total(), 10);
        assert_eq!(table.bins(), 3);
        assert_eq!(table.count("cat"), 6);
        assert_eq!(table.count("dog"), 3);
        assert_eq!(table.count("rabbit"), 1);
        assert_eq!(table.count("horse"), 0);
        assert_eq!(table.iter().map(|(_, c)| c).sum::<usize>(), PETS.len());
    }

    #[test]
    fn test_relative_frequencies() {
        let table = build_frequency_table(&PETS).unwrap();
        assert_eq!(table.freq("cat"), 0.6);
        assert_eq!(table.freq("dog"), 0.3);
        assert_eq!(table.freq("rabbit"), 0.1);
        assert_eq!(table.freq("horse"), 0.0);
    }

    #[test]
    fn test_empty_corpus() {
        let corpus: Vec<String> = Vec::new();
        let table = build_frequency_table(&corpus).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.bins(), 0);
        assert_eq!(table.freq("cat"), 0.0);
        assert_eq!(table.max(), None);
        assert!(table.cumulative(None).is_empty());
    }

    #[test]
    fn test_rejects_empty_token() {
        let result = build_frequency_table(&["cat", "", "dog"]);
        assert_eq!(result, Err(TokfreqError::InvalidToken { index: 1 }));
    }

    #[test]
    fn test_case_sensitive() {
        let table = build_frequency_table(&["Cat", "cat"]).unwrap();
        assert_eq!(table.bins(), 2);
        assert_eq!(table.count("Cat"), 1);
    }

    #[test]
    fn test_first_occurrence_order() {
        let table = build_frequency_table(&["b", "a", "b", "c"]).unwrap();
        let order: Vec<&str> = table.iter().map(|(token, _)| token).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_most_common() {
        let table = build_frequency_table(&PETS).unwrap();
        assert_eq!(
            table.most_common(None),
            vec![("cat", 6), ("dog", 3), ("rabbit", 1)]
        );
        assert_eq!(table.most_common(Some(1)), vec![("cat", 6)]);
        assert_eq!(table.max(), Some("cat"));

        let ties = build_frequency_table(&["x", "y", "y", "x", "z"]).unwrap();
        assert_eq!(ties.most_common(Some(2)), vec![("x", 2), ("y", 2)]);
    }

    #[test]
    fn test_hapaxes() {
        let table = build_frequency_table(&["a", "b", "a", "c"]).unwrap();
        assert_eq!(table.hapaxes(), vec!["b", "c"]);
    }

    #[test]
    fn test_cumulative() {
        let table = build_frequency_table(&PETS).unwrap();
        let rows = table.cumulative(None);
        let totals: Vec<usize> = rows.iter().map(|r| r.cumulative_count).collect();
        assert_eq!(totals, vec![6, 9, 10]);
        assert_eq!(rows[2].cumulative_frequency, 1.0);
        assert_eq!(table.cumulative(Some(2)).len(), 2);
    }

    #[test]
    fn test_serialize() {
        let table = build_frequency_table(&["a", "a", "b", "b"]).unwrap();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(
            json,
            r#"[{"token":"a","count":2,"frequency":0.5},{"token":"b","count":2,"frequency":0.5}]"#
        );
    }
}
