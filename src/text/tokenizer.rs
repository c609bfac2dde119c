//! Rule-based tokenization for social-media style text.

use crate::config::TokenizerConfig;
use crate::text::Normalizer;
use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// `http://`, `https://` or `www.` address.
    Url,
    /// Number with inner separators, such as `3.14` or `10:30`.
    Number,
    /// Emoticon such as `:-)`, `(-:` or `<3`.
    Emoticon,
    /// ASCII arrow such as `->` or `<--`.
    Arrow,
    /// E-mail address.
    Email,
    /// `@handle`.
    Handle,
    /// `#hashtag`.
    Hashtag,
    /// Run of word characters, possibly joined by apostrophes or hyphens.
    Word,
    /// Punctuation mark, or a run of repeated punctuation such as `!!!` or `...`.
    Punctuation,
    /// Any other single grapheme.
    Other,
}

impl TokenKind {
    /// Name of the capture group matching this kind.
    fn group_name(self) -> &'static str {
        match self {
            TokenKind::Url => "url",
            TokenKind::Number => "number",
            TokenKind::Emoticon => "emoticon",
            TokenKind::Arrow => "arrow",
            TokenKind::Email => "email",
            TokenKind::Handle => "handle",
            TokenKind::Hashtag => "hashtag",
            TokenKind::Word => "word",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Other => "other",
        }
    }

    /// Whether case folding must leave tokens of this kind untouched.
    pub fn is_case_sensitive(self) -> bool {
        matches!(self, TokenKind::Emoticon | TokenKind::Handle)
    }

    /// Whether tokens of this kind are addresses that must not be rewritten.
    pub fn is_address(self) -> bool {
        matches!(self, TokenKind::Url | TokenKind::Email)
    }

    /// Whether a match of this kind is dropped when it would split a run of
    /// word characters.
    fn yields_to_words(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::Emoticon)
    }
}

/// Lexical rules in order of precedence. At each position the first rule
/// that matches wins.
const RULES: &[(TokenKind, &str)] = &[
    (
        TokenKind::Url,
        r#"(?:https?://|www\.)(?:[^\s<>"]*[^\s<>".,;:!?'()\[\]{}])?"#,
    ),
    (TokenKind::Number, r"[+\-]?\d+(?:[,/.:\-]\d+)+"),
    (
        TokenKind::Emoticon,
        r"[<>]?[:;=8][\-o*']?[)\](\[dDpP/:}{@|\\]|[)\](\[dDpP/:}{@|\\][\-o*']?[:;=8][<>]?|</?3",
    ),
    (TokenKind::Arrow, r"-+>|<-+"),
    (TokenKind::Email, r"[\w.+\-]+@[\w\-]+\.(?:[\w\-]\.?)+[\w\-]"),
    (TokenKind::Handle, r"@\w+"),
    (TokenKind::Hashtag, r"#\w+(?:['\-]\w+)*"),
    (TokenKind::Word, r"[^\W\d_]+(?:['\-][^\W\d_]+)+|\w+"),
    (
        TokenKind::Punctuation,
        r"[!?]{2,}|\.{2,}|-{2,}|\*{2,}|~{2,}|\p{P}",
    ),
    (TokenKind::Other, r"\S"),
];

fn compile_rules(include: impl Fn(TokenKind) -> bool) -> Regex {
    let pattern = RULES
        .iter()
        .filter(|(kind, _)| include(*kind))
        .map(|(kind, rule)| format!("(?P<{}>{})", kind.group_name(), rule))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&pattern).unwrap()
}

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| compile_rules(|_| true));

/// Used where a number or emoticon would end inside a run of word characters.
static WORD_FIRST_PATTERN: Lazy<Regex> =
    Lazy::new(|| compile_rules(|kind| !kind.yields_to_words()));

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether the match `text[start..end]` ends in a word character that the
/// following text continues.
fn splits_word(text: &str, start: usize, end: usize) -> bool {
    let ends_in_word = text[start..end].chars().next_back().is_some_and(is_word_char);
    ends_in_word && text[end..].chars().next().is_some_and(is_word_char)
}

fn matched_kind(caps: &Captures<'_>) -> TokenKind {
    RULES
        .iter()
        .map(|(kind, _)| *kind)
        .find(|kind| caps.name(kind.group_name()).is_some())
        .unwrap_or(TokenKind::Other)
}

/// A token with its position in the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The normalized token text.
    pub text: String,
    /// Lexical category.
    pub kind: TokenKind,
    /// Start position in the original text (byte offset).
    pub start: usize,
    /// End position in the original text (byte offset).
    pub end: usize,
    /// Token index in the sequence.
    pub index: usize,
}

impl Token {
    /// Creates a new token.
    pub fn new(text: String, kind: TokenKind, start: usize, end: usize, index: usize) -> Self {
        Self {
            text,
            kind,
            start,
            end,
            index,
        }
    }
}

/// Tokenizer that splits text into tokens with position information.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    normalizer: Normalizer,
}

impl Tokenizer {
    /// Creates a new tokenizer with the given configuration.
    pub fn new(config: TokenizerConfig) -> Self {
        Self {
            normalizer: Normalizer::new(config),
        }
    }

    /// Creates a tokenizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(TokenizerConfig::default())
    }

    /// Tokenizes text into a sequence of tokens.
    ///
    /// Whitespace separates tokens and is never emitted. Every other
    /// character ends up in exactly one token unless it belongs to a handle
    /// dropped by `strip_handles`.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut byte_offset = 0;

        while let Some(mut caps) = TOKEN_PATTERN.captures_at(text, byte_offset) {
            let Some(mut whole) = caps.get(0) else { break };
            let mut kind = matched_kind(&caps);

            // `8pm` is a word, not the emoticon `8p` followed by `m`
            if kind.yields_to_words() && splits_word(text, whole.start(), whole.end()) {
                let Some(retry) = WORD_FIRST_PATTERN.captures_at(text, whole.start()) else {
                    break;
                };
                caps = retry;
                let Some(retry_whole) = caps.get(0) else { break };
                whole = retry_whole;
                kind = matched_kind(&caps);
            }

            let start = whole.start();
            let mut end = whole.end();

            // Keep combining marks and emoji modifiers with their base character
            if matches!(kind, TokenKind::Punctuation | TokenKind::Other) {
                if let Some(grapheme) = text[start..].graphemes(true).next() {
                    end = end.max(start + grapheme.len());
                }
            }

            if let Some(normalized) = self.normalizer.normalize_token(&text[start..end], kind) {
                let index = tokens.len();
                tokens.push(Token::new(normalized, kind, start, end, index));
            }

            byte_offset = end;
        }

        debug!("Tokenized {} bytes into {} tokens", text.len(), tokens.len());
        tokens
    }

    /// Tokenizes text and returns only the token strings.
    pub fn tokenize_to_strings(&self, text: &str) -> Vec<String> {
        self.tokenize(text).into_iter().map(|t| t.text).collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::default_config()
    }
}

/// Tokenizes `text` with the given configuration.
pub fn tokenize(text: &str, config: &TokenizerConfig) -> Vec<Token> {
    Tokenizer::new(*config).tokenize(text)
}
