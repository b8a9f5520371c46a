//! Segment command: same-source mode.

use crate::alignment::SentenceSpan;
use crate::config::Settings;
use crate::nlp::{HeuristicAnalyzer, RuleBasedSplitter};
use crate::timing::read_timings_file;
use crate::vocab::WordGate;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// One sentence span with optional vocabulary lemmas attached.
#[derive(Debug, Serialize)]
struct SegmentExport {
    #[serde(flatten)]
    span: SentenceSpan,
    #[serde(skip_serializing_if = "Option::is_none")]
    vocabulary: Option<Vec<String>>,
}

/// Run the segment command.
pub fn run_segment(
    timings: &str,
    output: Option<String>,
    vocabulary: bool,
    settings: &Settings,
) -> Result<()> {
    let analyzer = Arc::new(HeuristicAnalyzer::new());
    let engine = super::build_engine(settings, None, None, None)?;

    let tokens = read_timings_file(Path::new(timings))?;
    let spans = engine.segment(&tokens, &RuleBasedSplitter::new());
    info!("Segmented {} tokens into {} sentences", tokens.len(), spans.len());

    let gate = WordGate::new(analyzer);
    let exports: Vec<SegmentExport> = spans
        .into_iter()
        .map(|span| {
            let vocabulary = vocabulary.then(|| gate.sentence_vocabulary(&span));
            SegmentExport { span, vocabulary }
        })
        .collect();

    super::emit_json(&exports, output.as_deref())
}
