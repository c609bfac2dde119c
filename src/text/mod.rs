//! Text processing module for tokenization and token normalization.

mod normalizer;
mod tokenizer;

pub use normalizer::{reduce_lengthening, Normalizer};
pub use tokenizer::{tokenize, Token, TokenKind, Tokenizer};
