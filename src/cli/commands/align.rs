//! Align command: external-transcript mode.

use crate::alignment::SentenceSpan;
use crate::cli::Output;
use crate::config::Settings;
use crate::nlp::{RuleBasedSplitter, SentenceSplitter};
use crate::timing::read_timings_file;
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// Run the align command.
pub fn run_align(
    transcript: &str,
    timings: &str,
    output: Option<String>,
    min_ratio: Option<f64>,
    window_size: Option<usize>,
    similarity: Option<String>,
    settings: &Settings,
) -> Result<()> {
    let engine = super::build_engine(settings, min_ratio, window_size, similarity.as_deref())?;

    let text = std::fs::read_to_string(Path::new(transcript))?;
    let splitter = RuleBasedSplitter::new();
    let sentences: Vec<String> = splitter
        .split(&text)
        .into_iter()
        .map(|b| text[b.start..b.end].trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let tokens = read_timings_file(Path::new(timings))?;
    info!(
        "Aligning {} sentences against {} tokens",
        sentences.len(),
        tokens.len()
    );

    let mut spans = Vec::with_capacity(sentences.len());
    let mut unmatched = 0;

    for sentence in &sentences {
        match engine.align_sentence(sentence, &tokens) {
            Some(m) => {
                let words = tokens[m.window_start..m.window_end].to_vec();
                if let Some(span) = SentenceSpan::from_tokens(sentence, words) {
                    if output.is_none() {
                        Output::aligned_sentence(&span.text, span.start, span.end, m.ratio);
                    }
                    spans.push(span);
                }
            }
            None => unmatched += 1,
        }
    }

    if output.is_some() {
        super::emit_json(&spans, output.as_deref())?;
    }

    if unmatched > 0 {
        Output::warning(&format!(
            "{} of {} sentences had no qualifying token window",
            unmatched,
            sentences.len()
        ));
    }

    Ok(())
}
