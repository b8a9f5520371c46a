//! Timed word tokens and the flattened-text offset index.
//!
//! The speech recognizer emits an ordered stream of words, each with a start
//! time, an end time, and a confidence. Downstream alignment works over a
//! "flattened" text built by joining the token texts with single spaces;
//! [`FlattenedTokens`] records, for every token, its 0-based byte offset into
//! that text so that character spans reported by a sentence splitter can be
//! mapped back to tokens.

mod reader;

pub use reader::{read_timings, read_timings_file};

use serde::{Deserialize, Serialize};

/// A single recognized word with timing and confidence.
///
/// Tokens are immutable once produced by the recognizer. `start <= end`, and
/// streams arrive in non-decreasing `start` order; the engine never sorts or
/// reorders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The word text, verbatim as recognized.
    pub text: String,
    /// Start time in seconds.
    pub start: f64,
    /// End time in seconds.
    pub end: f64,
    /// Recognizer confidence in [0, 1].
    pub confidence: f64,
}

impl Token {
    /// Create a new token.
    pub fn new(text: impl Into<String>, start: f64, end: f64, confidence: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            confidence,
        }
    }

    /// Duration of this token in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Flattened token text with per-token byte offsets.
///
/// Built by joining token texts with exactly one space. `offsets[k]` is the
/// 0-based byte offset of token `k` in `text`, so
/// `text[offsets[k]..offsets[k] + tokens[k].text.len()] == tokens[k].text`.
#[derive(Debug, Clone)]
pub struct FlattenedTokens {
    /// The joined text.
    pub text: String,
    /// Byte offset of each token in `text`.
    pub offsets: Vec<usize>,
}

impl FlattenedTokens {
    /// Flatten a token stream into joined text plus cumulative offsets.
    ///
    /// An empty stream yields empty text and no offsets; this is a valid
    /// degenerate case, not an error.
    pub fn flatten(tokens: &[Token]) -> Self {
        let mut text = String::new();
        let mut offsets = Vec::with_capacity(tokens.len());

        for token in tokens {
            if !text.is_empty() {
                text.push(' ');
            }
            offsets.push(text.len());
            text.push_str(&token.text);
        }

        Self { text, offsets }
    }

    /// Byte range `[offset, offset + len)` occupied by token `index`.
    pub fn token_range(&self, index: usize, tokens: &[Token]) -> std::ops::Range<usize> {
        let start = self.offsets[index];
        start..start + tokens[index].text.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tokens() -> Vec<Token> {
        vec![
            Token::new("the", 0.09, 0.24, 1.0),
            Token::new("united", 0.24, 0.63, 1.0),
            Token::new("states", 0.63, 1.17, 1.0),
        ]
    }

    #[test]
    fn test_flatten_joins_with_single_spaces() {
        let flat = FlattenedTokens::flatten(&sample_tokens());
        assert_eq!(flat.text, "the united states");
        assert_eq!(flat.offsets, vec![0, 4, 11]);
    }

    #[test]
    fn test_offsets_slice_back_to_token_text() {
        let tokens = sample_tokens();
        let flat = FlattenedTokens::flatten(&tokens);

        for (k, token) in tokens.iter().enumerate() {
            let range = flat.token_range(k, &tokens);
            assert_eq!(&flat.text[range], token.text.as_str());
        }
    }

    #[test]
    fn test_flatten_empty_stream() {
        let flat = FlattenedTokens::flatten(&[]);
        assert_eq!(flat.text, "");
        assert!(flat.offsets.is_empty());
    }

    #[test]
    fn test_flatten_single_token() {
        let tokens = vec![Token::new("hello", 0.0, 0.5, 0.9)];
        let flat = FlattenedTokens::flatten(&tokens);
        assert_eq!(flat.text, "hello");
        assert_eq!(flat.offsets, vec![0]);
    }

    #[test]
    fn test_token_duration() {
        let token = Token::new("word", 1.5, 2.25, 0.8);
        assert!((token.duration() - 0.75).abs() < 1e-9);
    }
}
