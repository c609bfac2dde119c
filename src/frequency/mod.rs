//! Relative-frequency counting and threshold filtering over token corpora.

mod filter;
mod table;

pub use filter::{filter_corpus, tokens_below, FilterReport, FrequencyFilter, TokenSet};
pub use table::{build_frequency_table, CumulativeRow, FrequencyEntry, FrequencyTable};
