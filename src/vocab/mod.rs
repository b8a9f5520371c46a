//! Vocabulary word filtering.
//!
//! Decides, per raw token string, whether it is worth surfacing as a
//! vocabulary word: cleaning, single-word check, part-of-speech and stopword
//! exclusion, and a minimum lemma length. Every decision carries a reason
//! code so rejections can be traced in logs.

use crate::alignment::SentenceSpan;
use crate::nlp::NlpAnalyzer;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

static NON_WORD_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s'-]").unwrap());
static EDGE_HYPHENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-+|-+$").unwrap());
static APOSTROPHE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"'+").unwrap());
static EDGE_APOSTROPHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^'+|'+$").unwrap());

/// Outcome of the word gate for one raw token string.
///
/// `reason` is always populated: a diagnostic code on rejection, and
/// `accepted` on acceptance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDecision {
    /// Whether the word is vocabulary-worthy.
    pub accepted: bool,
    /// The lemma on acceptance; empty on rejection.
    pub normalized_form: String,
    /// Diagnostic code: `accepted`, `empty_after_cleaning`,
    /// `not_a_single_word`, `excluded_pos`, `stopword`, or `too_short`.
    pub reason: String,
}

impl WordDecision {
    fn accept(lemma: String) -> Self {
        Self {
            accepted: true,
            normalized_form: lemma,
            reason: "accepted".to_string(),
        }
    }

    fn reject(reason: &str) -> Self {
        Self {
            accepted: false,
            normalized_form: String::new(),
            reason: reason.to_string(),
        }
    }
}

/// Clean a raw word for linguistic analysis.
///
/// Lowercases, strips diacritics via NFKD decomposition, removes characters
/// outside word characters, whitespace, hyphens, and apostrophes, strips
/// edge hyphens and apostrophes, collapses apostrophe runs and interior
/// whitespace. Returns an empty string when nothing valid remains or when
/// the result is a bare hyphen, starts or ends with a hyphen, or contains a
/// doubled hyphen.
pub fn clean_word(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let ascii: String = lowered.nfkd().filter(char::is_ascii).collect();

    let word = NON_WORD_CHARS.replace_all(&ascii, "");
    let word = EDGE_HYPHENS.replace_all(&word, "");
    let word = APOSTROPHE_RUNS.replace_all(&word, "'");
    let word = EDGE_APOSTROPHES.replace_all(&word, "");
    let word = word.split_whitespace().collect::<Vec<_>>().join(" ");

    if word.is_empty()
        || word == "-"
        || word.starts_with('-')
        || word.ends_with('-')
        || word.contains("--")
    {
        return String::new();
    }

    word
}

/// The word filter gate: a pure per-token decision function.
pub struct WordGate {
    analyzer: Arc<dyn NlpAnalyzer>,
}

impl WordGate {
    pub fn new(analyzer: Arc<dyn NlpAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// Evaluate one raw token string.
    pub fn evaluate(&self, raw: &str) -> WordDecision {
        let cleaned = clean_word(raw);
        if cleaned.is_empty() {
            debug!("Rejected '{}': empty_after_cleaning", raw);
            return WordDecision::reject("empty_after_cleaning");
        }

        let analyzed = self.analyzer.analyze(&cleaned);
        if analyzed.len() != 1 {
            let pieces: Vec<&str> = analyzed.iter().map(|t| t.text.as_str()).collect();
            debug!(
                "Rejected '{}': not_a_single_word (tokens: {:?})",
                cleaned, pieces
            );
            return WordDecision::reject("not_a_single_word");
        }

        let token = &analyzed[0];
        if token.pos.is_vocabulary_excluded() {
            debug!("Rejected '{}': excluded_pos ({})", cleaned, token.pos);
            return WordDecision::reject("excluded_pos");
        }
        if token.is_stop {
            debug!("Rejected '{}': stopword", cleaned);
            return WordDecision::reject("stopword");
        }
        if token.lemma.chars().count() <= 1 {
            debug!("Rejected '{}': too_short", cleaned);
            return WordDecision::reject("too_short");
        }

        debug!("Accepted '{}' (lemma: {})", cleaned, token.lemma);
        WordDecision::accept(token.lemma.clone())
    }

    /// Accepted lemmas for a sentence span, deduplicated in
    /// first-occurrence order.
    pub fn sentence_vocabulary(&self, span: &SentenceSpan) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut lemmas = Vec::new();

        for word in &span.words {
            let decision = self.evaluate(&word.text);
            if decision.accepted && seen.insert(decision.normalized_form.clone()) {
                lemmas.push(decision.normalized_form);
            }
        }

        lemmas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::HeuristicAnalyzer;
    use crate::timing::Token;

    fn gate() -> WordGate {
        WordGate::new(Arc::new(HeuristicAnalyzer::new()))
    }

    #[test]
    fn test_clean_word_strips_diacritics_and_edges() {
        assert_eq!(clean_word("café's-"), "cafe's");
        assert_eq!(clean_word("WORLD!"), "world");
        assert_eq!(clean_word("  hello  "), "hello");
    }

    #[test]
    fn test_clean_word_rejects_hyphen_degenerates() {
        assert_eq!(clean_word("well--known"), "");
        assert_eq!(clean_word("-"), "");
        assert_eq!(clean_word("--"), "");
        assert_eq!(clean_word(""), "");
        assert_eq!(clean_word("!!!"), "");
    }

    #[test]
    fn test_clean_word_keeps_interior_hyphen_and_apostrophe() {
        assert_eq!(clean_word("well-known"), "well-known");
        assert_eq!(clean_word("don''t"), "don't");
    }

    #[test]
    fn test_doubled_hyphen_rejected_before_analysis() {
        let decision = gate().evaluate("well--known");
        assert!(!decision.accepted);
        assert_eq!(decision.reason, "empty_after_cleaning");
    }

    #[test]
    fn test_possessive_is_not_a_single_word() {
        // "café's-" cleans to "cafe's", which decomposes into a base and a
        // clitic under analysis.
        let decision = gate().evaluate("café's-");
        assert!(!decision.accepted);
        assert_eq!(decision.reason, "not_a_single_word");
    }

    #[test]
    fn test_multi_word_phrase_rejected() {
        let decision = gate().evaluate("united states");
        assert_eq!(decision.reason, "not_a_single_word");
    }

    #[test]
    fn test_stopword_rejected() {
        let decision = gate().evaluate("The");
        assert!(!decision.accepted);
        assert_eq!(decision.reason, "stopword");
    }

    #[test]
    fn test_numeral_rejected_by_pos() {
        let decision = gate().evaluate("fifty");
        assert_eq!(decision.reason, "excluded_pos");
    }

    #[test]
    fn test_short_lemma_rejected() {
        let decision = gate().evaluate("x");
        assert_eq!(decision.reason, "too_short");
    }

    #[test]
    fn test_accepted_word_returns_lemma() {
        let decision = gate().evaluate("running");
        assert!(decision.accepted);
        assert_eq!(decision.normalized_form, "run");
        assert_eq!(decision.reason, "accepted");
    }

    #[test]
    fn test_decision_is_total() {
        let gate = gate();
        for raw in ["", "-", "the", "fifty", "x", "running", "café's-", "zebra!"] {
            let decision = gate.evaluate(raw);
            assert!(!decision.reason.is_empty());
            if decision.accepted {
                assert!(!decision.normalized_form.is_empty());
            }
        }
    }

    #[test]
    fn test_sentence_vocabulary_dedups_in_order() {
        let gate = gate();
        let span = SentenceSpan::from_tokens(
            "Zebras chase zebras quickly.",
            vec![
                Token::new("Zebras", 0.0, 0.4, 1.0),
                Token::new("chase", 0.4, 0.8, 1.0),
                Token::new("zebras", 0.8, 1.2, 1.0),
                Token::new("quickly.", 1.2, 1.6, 1.0),
            ],
        )
        .unwrap();

        let lemmas = gate.sentence_vocabulary(&span);
        assert_eq!(lemmas, vec!["zebra", "chase", "quickly"]);
    }
}
