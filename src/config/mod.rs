//! Configuration module for Ordspor.

mod settings;

pub use settings::{AlignmentSettings, GeneralSettings, Settings};
