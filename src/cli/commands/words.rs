//! Words command: per-sentence vocabulary extraction from plain text.

use crate::nlp::{HeuristicAnalyzer, NlpAnalyzer, RuleBasedSplitter, SentenceSplitter};
use crate::vocab::WordGate;
use anyhow::Result;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Serialize)]
struct AnalyzedSentence {
    text: String,
    words: Vec<String>,
}

#[derive(Debug, Serialize)]
struct WordsExport {
    sentences: Vec<AnalyzedSentence>,
}

/// Run the words command.
pub fn run_words(input: &str, is_file: bool, output: Option<String>) -> Result<()> {
    let text = if is_file {
        std::fs::read_to_string(input)?
    } else {
        input.to_string()
    };

    let analyzer: Arc<dyn NlpAnalyzer> = Arc::new(HeuristicAnalyzer::new());
    let gate = WordGate::new(analyzer.clone());
    let splitter = RuleBasedSplitter::new();

    let mut sentences = Vec::new();
    for boundary in splitter.split(&text) {
        let sentence = text[boundary.start..boundary.end].trim();
        if sentence.is_empty() {
            continue;
        }

        let mut seen = HashSet::new();
        let mut words = Vec::new();
        for token in analyzer.analyze(sentence) {
            let decision = gate.evaluate(&token.text);
            if decision.accepted && seen.insert(decision.normalized_form.clone()) {
                words.push(decision.normalized_form);
            }
        }

        sentences.push(AnalyzedSentence {
            text: sentence.to_string(),
            words,
        });
    }

    info!("Analyzed {} sentences", sentences.len());
    super::emit_json(&WordsExport { sentences }, output.as_deref())
}
