//! CLI module for Ordspor.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Ordspor - Transcript-Timing Alignment
///
/// Reconciles speech-recognizer word timings with sentence-segmented text.
/// The name "Ordspor" comes from the Norwegian words for "word trail."
#[derive(Parser, Debug)]
#[command(name = "ordspor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Align an external transcript against word timings (fuzzy matching)
    Align {
        /// Path to the transcript text file
        transcript: String,

        /// Path to the word-timing file (header: word, start, end, conf)
        timings: String,

        /// Write aligned sentence spans as JSON instead of a listing
        #[arg(short, long)]
        output: Option<String>,

        /// Minimum similarity a window must strictly exceed (default 0.5)
        #[arg(long)]
        min_ratio: Option<f64>,

        /// Maximum token-window width per candidate sentence (default 10)
        #[arg(long)]
        window_size: Option<usize>,

        /// Similarity strategy (matching-blocks, levenshtein, jaro-winkler)
        #[arg(long)]
        similarity: Option<String>,
    },

    /// Segment a word-timing stream into sentences over its own transcript
    Segment {
        /// Path to the word-timing file (header: word, start, end, conf)
        timings: String,

        /// Write sentence spans as JSON file (stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,

        /// Attach per-sentence vocabulary lemmas to the output
        #[arg(long)]
        vocabulary: bool,
    },

    /// Extract per-sentence vocabulary words from a text
    Words {
        /// Input text, or a file path with --is-file
        input: String,

        /// Treat input as a file path
        #[arg(long)]
        is_file: bool,

        /// Output JSON file path (stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}
