//! Rule-based sentence boundary detection.
//!
//! Splits on runs of sentence terminators (`.` `?` `!`), with a guard list
//! of common abbreviations so "Dr. Smith" stays in one sentence. Emitted
//! spans are half-open byte ranges into the exact input text; text without a
//! trailing terminator still yields a final span.

use super::{SentenceBoundary, SentenceSplitter};
use std::collections::HashSet;

/// Abbreviations whose trailing period does not end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "vs", "etc", "e.g", "i.e", "inc", "co",
];

/// Deterministic terminator-run splitter.
pub struct RuleBasedSplitter {
    abbreviations: HashSet<&'static str>,
}

impl RuleBasedSplitter {
    pub fn new() -> Self {
        Self {
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
        }
    }

    /// Whether the word ending at byte `end` is a known abbreviation.
    fn ends_with_abbreviation(&self, text: &str, end: usize) -> bool {
        let word_start = text[..end]
            .rfind(char::is_whitespace)
            .map(|i| i + 1)
            .unwrap_or(0);
        let word = text[word_start..end].to_lowercase();
        self.abbreviations.contains(word.trim_end_matches('.'))
    }
}

impl Default for RuleBasedSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSplitter for RuleBasedSplitter {
    fn split(&self, text: &str) -> Vec<SentenceBoundary> {
        let mut boundaries = Vec::new();
        let bytes = text.as_bytes();
        let mut sentence_start: Option<usize> = None;
        let mut i = 0;

        while i < text.len() {
            let ch = text[i..].chars().next().unwrap_or('\0');
            let ch_len = ch.len_utf8();

            if sentence_start.is_none() && !ch.is_whitespace() {
                sentence_start = Some(i);
            }

            if matches!(ch, '.' | '?' | '!') {
                // Consume the whole terminator run plus closing quotes/brackets.
                let mut end = i + ch_len;
                while end < text.len() {
                    let next = text[end..].chars().next().unwrap_or('\0');
                    if matches!(next, '.' | '?' | '!' | '"' | '\'' | ')' | ']') {
                        end += next.len_utf8();
                    } else {
                        break;
                    }
                }

                let followed_by_break = end >= text.len()
                    || bytes.get(end).is_some_and(|b| (*b as char).is_whitespace());
                let abbreviation = ch == '.'
                    && end - i == 1
                    && self.ends_with_abbreviation(text, i)
                    // An abbreviation period mid-text only continues the
                    // sentence when more text follows.
                    && end < text.len();

                if followed_by_break && !abbreviation {
                    if let Some(start) = sentence_start.take() {
                        boundaries.push(SentenceBoundary::new(start, end));
                    }
                }
                i = end;
                continue;
            }

            i += ch_len;
        }

        // Trailing text without a terminator.
        if let Some(start) = sentence_start {
            let end = text.trim_end().len();
            if end > start {
                boundaries.push(SentenceBoundary::new(start, end));
            }
        }

        boundaries
    }
}
