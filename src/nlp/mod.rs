//! Linguistic collaborator seams.
//!
//! Sentence splitting and morphological analysis are external concerns: the
//! alignment engine consumes their output but does not own them. Both are
//! expressed as traits so callers can inject a real NLP backend; the bundled
//! [`HeuristicAnalyzer`] and [`RuleBasedSplitter`] are deterministic
//! fallbacks that keep the binary usable standalone.
//!
//! Analyzer instances are loaded once, treated as read-only afterwards, and
//! are safe to share across concurrent alignment invocations.

mod heuristic;
mod splitter;

pub use heuristic::HeuristicAnalyzer;
pub use splitter::RuleBasedSplitter;

use serde::{Deserialize, Serialize};

/// Universal part-of-speech categories, as assigned by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Adjective,
    Adposition,
    Adverb,
    Auxiliary,
    Conjunction,
    Determiner,
    Interjection,
    Noun,
    Numeral,
    Particle,
    Pronoun,
    ProperNoun,
    Punctuation,
    Symbol,
    Verb,
    Whitespace,
    Other,
}

impl PartOfSpeech {
    /// Whether this part of speech is excluded from vocabulary extraction.
    ///
    /// The exclusion set is fixed: pronouns, numerals, proper nouns,
    /// whitespace, punctuation, symbols, and unclassifiable tokens.
    pub fn is_vocabulary_excluded(&self) -> bool {
        matches!(
            self,
            PartOfSpeech::Pronoun
                | PartOfSpeech::Numeral
                | PartOfSpeech::ProperNoun
                | PartOfSpeech::Whitespace
                | PartOfSpeech::Punctuation
                | PartOfSpeech::Symbol
                | PartOfSpeech::Other
        )
    }
}

impl std::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adposition => "adposition",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Auxiliary => "auxiliary",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Determiner => "determiner",
            PartOfSpeech::Interjection => "interjection",
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Numeral => "numeral",
            PartOfSpeech::Particle => "particle",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::ProperNoun => "proper_noun",
            PartOfSpeech::Punctuation => "punctuation",
            PartOfSpeech::Symbol => "symbol",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Whitespace => "whitespace",
            PartOfSpeech::Other => "other",
        };
        write!(f, "{}", name)
    }
}

/// One analyzed token: surface text plus lemma, part of speech, and
/// stopword flag.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedToken {
    /// Surface form as it appeared in the input.
    pub text: String,
    /// Lowercase lemma (canonical base form).
    pub lemma: String,
    /// Assigned part of speech.
    pub pos: PartOfSpeech,
    /// Whether this is a common function word.
    pub is_stop: bool,
}

/// Trait for morphological analysis backends.
pub trait NlpAnalyzer: Send + Sync {
    /// Tokenize and analyze a piece of text.
    fn analyze(&self, text: &str) -> Vec<AnalyzedToken>;

    /// Lemmas of a sentence with stopwords and punctuation removed,
    /// lowercased. This is the normalized view used for fuzzy matching.
    fn content_lemmas(&self, text: &str) -> Vec<String> {
        self.analyze(text)
            .into_iter()
            .filter(|t| !t.is_stop && t.pos != PartOfSpeech::Punctuation)
            .map(|t| t.lemma)
            .collect()
    }
}

/// A half-open byte span `[start, end)` of one sentence, reported by a
/// sentence splitter over the exact text it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceBoundary {
    /// Byte offset of the first character of the sentence.
    pub start: usize,
    /// Byte offset one past the last character of the sentence.
    pub end: usize,
}

impl SentenceBoundary {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Trait for sentence boundary detection backends.
pub trait SentenceSplitter: Send + Sync {
    /// Split text into sentence boundary spans. Spans must index into the
    /// given text exactly as byte offsets.
    fn split(&self, text: &str) -> Vec<SentenceBoundary>;
}
