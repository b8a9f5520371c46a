//! Transcript-timing alignment engine.
//!
//! Reconciles two independently produced views of one utterance stream: the
//! recognizer's timed word tokens and a sentence-segmented text. Two modes:
//!
//! - **Same-source**: sentence boundaries were detected over the flattened
//!   token text itself; membership is offset arithmetic
//!   ([`boundary::map_boundaries`]).
//! - **External-transcript**: sentences originate outside the token stream
//!   (instructor script, edited transcript) and are fuzzy-matched against
//!   token windows ([`fuzzy::FuzzyAligner`]).
//!
//! The engine is synchronous and stateless per invocation; the injected
//! analyzer is the only shared resource and is read-only after construction,
//! so invocations may run concurrently on separate threads.

mod boundary;
mod fuzzy;
mod similarity;

pub use boundary::map_boundaries;
pub use fuzzy::{AlignmentMatch, FuzzyAligner};
pub use similarity::{
    create_similarity, JaroWinkler, MatchingBlocks, NormalizedLevenshtein, Similarity,
    SimilarityKind,
};

use crate::nlp::{NlpAnalyzer, SentenceBoundary, SentenceSplitter};
use crate::timing::{FlattenedTokens, Token};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Leading "Speaker:" style prefix, stripped before fuzzy matching.
static SPEAKER_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^:]+:").unwrap());

/// A contiguous, time-bounded grouping of tokens representing one sentence.
///
/// `start` and `end` derive from the first and last contained token; a span
/// with no tokens is invalid and is never constructed. Serializes as
/// `{text, start, end, words: [{text, start, end, confidence}]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceSpan {
    /// Canonical sentence text, trimmed.
    pub text: String,
    /// Start time in seconds (first token's start).
    pub start: f64,
    /// End time in seconds (last token's end).
    pub end: f64,
    /// Tokens contained in this sentence, in stream order.
    pub words: Vec<Token>,
}

impl SentenceSpan {
    /// Build a span from a sentence text and its tokens.
    ///
    /// Returns `None` for an empty token list: such a span carries no
    /// timing and must not be emitted.
    pub fn from_tokens(text: &str, words: Vec<Token>) -> Option<Self> {
        let first = words.first()?;
        let last = words.last()?;
        Some(Self {
            text: text.trim().to_string(),
            start: first.start,
            end: last.end,
            words,
        })
    }

    /// Duration of this sentence in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Tunable alignment options.
#[derive(Debug, Clone, Copy)]
pub struct AlignmentOptions {
    /// Minimum similarity a window must strictly exceed to match.
    pub min_ratio: f64,
    /// Maximum token-window width searched per candidate sentence.
    pub window_size: usize,
}

impl Default for AlignmentOptions {
    fn default() -> Self {
        Self {
            min_ratio: 0.5,
            window_size: 10,
        }
    }
}

/// The alignment engine: injected collaborators plus options.
///
/// Construct once and reuse; the analyzer and similarity strategy are
/// loaded a single time and treated as read-only thereafter.
pub struct AlignmentEngine {
    analyzer: Arc<dyn NlpAnalyzer>,
    similarity: Box<dyn Similarity>,
    options: AlignmentOptions,
}

impl AlignmentEngine {
    pub fn new(
        analyzer: Arc<dyn NlpAnalyzer>,
        similarity: Box<dyn Similarity>,
        options: AlignmentOptions,
    ) -> Self {
        Self {
            analyzer,
            similarity,
            options,
        }
    }

    /// Engine with the given analyzer, default similarity and options.
    pub fn with_analyzer(analyzer: Arc<dyn NlpAnalyzer>) -> Self {
        Self::new(
            analyzer,
            create_similarity(SimilarityKind::default()),
            AlignmentOptions::default(),
        )
    }

    pub fn options(&self) -> AlignmentOptions {
        self.options
    }

    /// Same-source mode: map pre-computed boundary spans onto the token
    /// stream. Boundaries must have been produced over the identical
    /// flattened text.
    pub fn map_sentences(
        &self,
        tokens: &[Token],
        flat: &FlattenedTokens,
        boundaries: &[SentenceBoundary],
    ) -> Vec<SentenceSpan> {
        map_boundaries(tokens, flat, boundaries)
    }

    /// Same-source mode, convenience: flatten the stream, run the splitter
    /// over the flattened text, and map the resulting boundaries.
    pub fn segment(&self, tokens: &[Token], splitter: &dyn SentenceSplitter) -> Vec<SentenceSpan> {
        let flat = FlattenedTokens::flatten(tokens);
        let boundaries = splitter.split(&flat.text);
        self.map_sentences(tokens, &flat, &boundaries)
    }

    /// External-transcript mode: best token window for one sentence.
    ///
    /// The sentence is normalized through the analyzer (lemmas, stopwords
    /// and punctuation removed, leading speaker label stripped). `None`
    /// means no window cleared the threshold; that is not an error, and the
    /// caller decides whether to drop, relax thresholds, or flag for review.
    pub fn align_sentence(&self, sentence: &str, tokens: &[Token]) -> Option<AlignmentMatch> {
        let stripped = SPEAKER_PREFIX.replace(sentence, "");
        let target = self.analyzer.content_lemmas(stripped.trim());

        let aligner = FuzzyAligner::new(
            self.similarity.as_ref(),
            self.options.min_ratio,
            self.options.window_size,
        );
        aligner.find_matching_span(&target, tokens)
    }

    /// External-transcript mode over a full sentence list. Sentences with
    /// no qualifying window produce no span.
    pub fn align_transcript(&self, sentences: &[String], tokens: &[Token]) -> Vec<SentenceSpan> {
        let mut spans = Vec::with_capacity(sentences.len());

        for sentence in sentences {
            match self.align_sentence(sentence, tokens) {
                Some(m) => {
                    let words = tokens[m.window_start..m.window_end].to_vec();
                    if let Some(span) = SentenceSpan::from_tokens(sentence, words) {
                        debug!(
                            "Aligned '{}' to [{:.2}, {:.2}] (ratio {:.3})",
                            span.text, span.start, span.end, m.ratio
                        );
                        spans.push(span);
                    }
                }
                None => debug!("No qualifying window for sentence: '{}'", sentence),
            }
        }

        spans
    }
}
