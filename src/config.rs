//! Configuration management for the matching engine

use crate::error::{MatcherError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub scoring: ScoringConfig,
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// How many ranked keywords to keep per extraction.
    pub top_keywords: usize,
    /// Longest multi-word phrase considered in phrase mode.
    pub max_phrase_len: usize,
    /// Tokens scanned on each side of a keyword when assigning requirement tiers.
    pub tier_window: usize,
    /// Rank bigrams/trigrams alongside single words.
    pub include_phrases: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub keyword_weight: f32,
    pub skill_weight: f32,
    pub experience_weight: f32,
    pub education_weight: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub enabled: bool,
    pub ttl_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig {
                top_keywords: 20,
                max_phrase_len: 3,
                tier_window: 8,
                include_phrases: false,
            },
            // Weights are a fixed policy constant; changing them changes
            // score parity with previously persisted results.
            scoring: ScoringConfig {
                keyword_weight: 0.30,
                skill_weight: 0.35,
                experience_weight: 0.25,
                education_weight: 0.10,
            },
            cache: CacheConfig {
                enabled: true,
                ttl_secs: 24 * 60 * 60,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| MatcherError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| MatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-matcher")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        let weights = &self.scoring;
        let total = weights.keyword_weight
            + weights.skill_weight
            + weights.experience_weight
            + weights.education_weight;
        if (total - 1.0).abs() > 0.001 {
            return Err(MatcherError::Configuration(format!(
                "Scoring weights must sum to 1.0, got {:.3}",
                total
            )));
        }
        if self.extraction.top_keywords == 0 {
            return Err(MatcherError::Configuration(
                "top_keywords must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let config = Config::default();
        assert_eq!(config.scoring.keyword_weight, 0.30);
        assert_eq!(config.scoring.skill_weight, 0.35);
        assert_eq!(config.scoring.experience_weight, 0.25);
        assert_eq!(config.scoring.education_weight, 0.10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_extraction() {
        let config = Config::default();
        assert_eq!(config.extraction.top_keywords, 20);
        assert_eq!(config.cache.ttl_secs, 86400);
        assert!(config.cache.enabled);
    }

    #[test]
    fn test_validate_rejects_bad_weights() {
        let mut config = Config::default();
        config.scoring.keyword_weight = 0.9;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.extraction.top_keywords, config.extraction.top_keywords);
        assert_eq!(parsed.scoring.skill_weight, config.scoring.skill_weight);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.extraction.top_keywords = 7;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.extraction.top_keywords, 7);
    }

    #[test]
    fn test_load_missing_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.extraction.top_keywords, 20);
    }
}
