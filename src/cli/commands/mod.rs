//! CLI command implementations.

mod align;
mod config;
mod segment;
mod words;

pub use align::run_align;
pub use config::run_config;
pub use segment::run_segment;
pub use words::run_words;

use crate::alignment::{create_similarity, AlignmentEngine, AlignmentOptions};
use crate::config::Settings;
use crate::nlp::HeuristicAnalyzer;
use std::sync::Arc;

/// Build an engine from settings, with optional CLI overrides.
pub(crate) fn build_engine(
    settings: &Settings,
    min_ratio: Option<f64>,
    window_size: Option<usize>,
    similarity: Option<&str>,
) -> anyhow::Result<AlignmentEngine> {
    let kind = match similarity {
        Some(name) => name.parse().map_err(anyhow::Error::msg)?,
        None => settings.alignment.similarity,
    };

    let options = AlignmentOptions {
        min_ratio: min_ratio.unwrap_or(settings.alignment.min_ratio),
        window_size: window_size.unwrap_or(settings.alignment.window_size),
    };

    Ok(AlignmentEngine::new(
        Arc::new(HeuristicAnalyzer::new()),
        create_similarity(kind),
        options,
    ))
}

/// Write JSON to a file, or pretty-print to stdout when no path is given.
pub(crate) fn emit_json<T: serde::Serialize>(value: &T, output: Option<&str>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            super::Output::success(&format!("Results saved to: {}", path));
        }
        None => println!("{}", json),
    }
    Ok(())
}
