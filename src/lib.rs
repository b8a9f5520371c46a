//! Ordspor - Transcript-Timing Alignment
//!
//! A library and CLI for reconciling two independently produced views of one
//! utterance stream: a speech recognizer's timed word tokens and a
//! sentence-segmented transcript.
//!
//! The name "Ordspor" comes from the Norwegian words for "word trail."
//!
//! # Overview
//!
//! Ordspor allows you to:
//! - Segment an ASR word-timing stream into sentence spans over its own
//!   transcript text (same-source mode)
//! - Fuzzy-match externally supplied sentences against a word-timing stream
//!   (external-transcript mode)
//! - Filter sentence tokens down to vocabulary-worthy lemmas
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `timing` - Timed tokens, flattened-text offsets, timing-file reader
//! - `nlp` - Collaborator seams: analyzer and sentence-splitter traits plus
//!   rule-based fallbacks
//! - `alignment` - Boundary mapping, fuzzy span alignment, similarity
//!   strategies
//! - `vocab` - Vocabulary word filtering
//!
//! # Example
//!
//! ```rust
//! use ordspor::alignment::AlignmentEngine;
//! use ordspor::nlp::HeuristicAnalyzer;
//! use ordspor::timing::Token;
//! use std::sync::Arc;
//!
//! let engine = AlignmentEngine::with_analyzer(Arc::new(HeuristicAnalyzer::new()));
//!
//! let tokens = vec![
//!     Token::new("hello", 0.0, 0.4, 0.98),
//!     Token::new("world", 0.4, 0.9, 0.97),
//! ];
//!
//! let matched = engine.align_sentence("Hello, world!", &tokens);
//! assert!(matched.is_some());
//! ```

pub mod alignment;
pub mod cli;
pub mod config;
pub mod error;
pub mod nlp;
pub mod timing;
pub mod vocab;

pub use error::{OrdsporError, Result};
