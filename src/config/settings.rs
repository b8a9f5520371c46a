//! Configuration settings for Ordspor.

use crate::alignment::SimilarityKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub alignment: AlignmentSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Alignment engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentSettings {
    /// Minimum similarity a token window must strictly exceed to match.
    pub min_ratio: f64,
    /// Maximum token-window width searched per candidate sentence.
    pub window_size: usize,
    /// Similarity strategy (matching-blocks, levenshtein, jaro-winkler).
    pub similarity: SimilarityKind,
}

impl Default for AlignmentSettings {
    fn default() -> Self {
        Self {
            min_ratio: 0.5,
            window_size: 10,
            similarity: SimilarityKind::MatchingBlocks,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::OrdsporError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ordspor")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.alignment.min_ratio, 0.5);
        assert_eq!(settings.alignment.window_size, 10);
        assert_eq!(settings.alignment.similarity, SimilarityKind::MatchingBlocks);
        assert_eq!(settings.general.log_level, "info");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [alignment]
            min_ratio = 0.7
            "#,
        )
        .unwrap();
        assert_eq!(settings.alignment.min_ratio, 0.7);
        assert_eq!(settings.alignment.window_size, 10);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut settings = Settings::default();
        settings.alignment.window_size = 15;
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(loaded.alignment.window_size, 15);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let loaded = Settings::load_from(Some(&PathBuf::from("/nonexistent/config.toml"))).unwrap();
        assert_eq!(loaded.alignment.min_ratio, 0.5);
    }
}
