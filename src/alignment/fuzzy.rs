//! Sliding-window fuzzy span alignment.
//!
//! Finds the contiguous token window whose joined text best matches a
//! target sentence that originates outside the token stream (an instructor
//! script, an edited transcript). The search is exhaustive over
//! `O(n * window_size)` candidate windows; determinism comes from strict
//! best-ratio improvement with earliest-found tie-break.

use super::similarity::Similarity;
use crate::timing::Token;

/// Best-matching token window for one target sentence.
///
/// Ephemeral: used to construct a sentence span, not persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentMatch {
    /// Index of the first token in the window.
    pub window_start: usize,
    /// One past the index of the last token in the window.
    pub window_end: usize,
    /// Similarity of the window text to the target, in `[0, 1]`.
    pub ratio: f64,
}

impl AlignmentMatch {
    /// Start time of the matched span.
    pub fn start(&self, tokens: &[Token]) -> f64 {
        tokens[self.window_start].start
    }

    /// End time of the matched span.
    pub fn end(&self, tokens: &[Token]) -> f64 {
        tokens[self.window_end - 1].end
    }
}

/// Fuzzy span aligner configuration and search.
pub struct FuzzyAligner<'a> {
    similarity: &'a dyn Similarity,
    min_ratio: f64,
    window_size: usize,
}

impl<'a> FuzzyAligner<'a> {
    pub fn new(similarity: &'a dyn Similarity, min_ratio: f64, window_size: usize) -> Self {
        Self {
            similarity,
            min_ratio,
            window_size,
        }
    }

    /// Find the best-matching contiguous token window for the target lemmas.
    ///
    /// `target_lemmas` is the sentence already normalized by the NLP
    /// collaborator (lemmatized, stopwords and punctuation removed). Window
    /// text is the lowercase verbatim token text joined with single spaces;
    /// lowercasing is a matching-time view and never mutates the tokens.
    ///
    /// Returns `None` when either input is empty or no window strictly
    /// exceeds `min_ratio`.
    pub fn find_matching_span(
        &self,
        target_lemmas: &[String],
        tokens: &[Token],
    ) -> Option<AlignmentMatch> {
        if target_lemmas.is_empty() || tokens.is_empty() {
            return None;
        }

        let target_text = target_lemmas.join(" ");
        let lowered: Vec<String> = tokens.iter().map(|t| t.text.to_lowercase()).collect();

        let mut best: Option<AlignmentMatch> = None;
        let mut best_ratio = self.min_ratio;

        for i in 0..tokens.len() {
            let upper = (i + self.window_size).min(tokens.len());
            let mut window_text = String::new();

            for j in (i + 1)..=upper {
                if !window_text.is_empty() {
                    window_text.push(' ');
                }
                window_text.push_str(&lowered[j - 1]);

                let ratio = self.similarity.ratio(&target_text, &window_text);
                // Strict improvement: on ties the earliest-found window wins,
                // favoring earlier, shorter spans.
                if ratio > best_ratio {
                    best_ratio = ratio;
                    best = Some(AlignmentMatch {
                        window_start: i,
                        window_end: j,
                        ratio,
                    });
                }
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::similarity::MatchingBlocks;

    fn country_tokens() -> Vec<Token> {
        vec![
            Token::new("the", 0.09, 0.24, 1.0),
            Token::new("united", 0.24, 0.63, 1.0),
            Token::new("states", 0.63, 1.17, 1.0),
            Token::new("is", 1.23, 1.41, 1.0),
            Token::new("a", 1.41, 1.89, 1.0),
            Token::new("country", 1.89, 2.34, 1.0),
        ]
    }

    fn lemmas(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_country_sentence_matches_above_threshold() {
        let aligner = FuzzyAligner::new(&MatchingBlocks, 0.5, 10);
        let tokens = country_tokens();
        let target = lemmas(&["united", "state", "country"]);

        let m = aligner.find_matching_span(&target, &tokens).unwrap();
        assert!(m.ratio > 0.5);
        assert_eq!(m.window_end, 6);
        assert!((m.end(&tokens) - 2.34).abs() < 1e-9);
        // The match starts at the first content word; the leading stopword
        // is absent from the normalized target, so the best window begins
        // at "united".
        assert_eq!(m.window_start, 1);
        assert!((m.start(&tokens) - 0.24).abs() < 1e-9);
    }

    #[test]
    fn test_empty_token_stream_returns_none() {
        let aligner = FuzzyAligner::new(&MatchingBlocks, 0.5, 10);
        let target = lemmas(&["anything"]);
        assert!(aligner.find_matching_span(&target, &[]).is_none());
    }

    #[test]
    fn test_empty_target_returns_none() {
        let aligner = FuzzyAligner::new(&MatchingBlocks, 0.5, 10);
        assert!(aligner.find_matching_span(&[], &country_tokens()).is_none());
    }

    #[test]
    fn test_no_window_above_threshold_returns_none() {
        let aligner = FuzzyAligner::new(&MatchingBlocks, 0.5, 10);
        let target = lemmas(&["zebra", "quark", "flux"]);
        assert!(aligner
            .find_matching_span(&target, &country_tokens())
            .is_none());
    }

    #[test]
    fn test_idempotent() {
        let aligner = FuzzyAligner::new(&MatchingBlocks, 0.5, 10);
        let tokens = country_tokens();
        let target = lemmas(&["united", "state", "country"]);

        let first = aligner.find_matching_span(&target, &tokens).unwrap();
        let second = aligner.find_matching_span(&target, &tokens).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_raising_min_ratio_keeps_same_window_while_qualified() {
        let tokens = country_tokens();
        let target = lemmas(&["united", "state", "country"]);

        let relaxed = FuzzyAligner::new(&MatchingBlocks, 0.5, 10)
            .find_matching_span(&target, &tokens)
            .unwrap();

        let strict = FuzzyAligner::new(&MatchingBlocks, relaxed.ratio - 0.01, 10)
            .find_matching_span(&target, &tokens)
            .unwrap();
        assert_eq!(relaxed.window_start, strict.window_start);
        assert_eq!(relaxed.window_end, strict.window_end);

        // Above the winning ratio nothing qualifies.
        let over = FuzzyAligner::new(&MatchingBlocks, relaxed.ratio, 10)
            .find_matching_span(&target, &tokens);
        assert!(over.is_none());
    }

    #[test]
    fn test_tie_break_keeps_earliest_window() {
        // Identical phrase twice; both windows score identically.
        let tokens = vec![
            Token::new("hello", 0.0, 0.5, 1.0),
            Token::new("world", 0.5, 1.0, 1.0),
            Token::new("pause", 1.0, 1.5, 1.0),
            Token::new("hello", 2.0, 2.5, 1.0),
            Token::new("world", 2.5, 3.0, 1.0),
        ];
        let target = lemmas(&["hello", "world"]);

        let aligner = FuzzyAligner::new(&MatchingBlocks, 0.5, 10);
        let m = aligner.find_matching_span(&target, &tokens).unwrap();
        assert_eq!(m.window_start, 0);
        assert_eq!(m.window_end, 2);
    }

    #[test]
    fn test_window_size_bounds_span_width() {
        let tokens = country_tokens();
        let target = lemmas(&["united", "state", "country"]);

        let aligner = FuzzyAligner::new(&MatchingBlocks, 0.0, 2);
        if let Some(m) = aligner.find_matching_span(&target, &tokens) {
            assert!(m.window_end - m.window_start <= 2);
        }
    }
}
