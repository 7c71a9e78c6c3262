//! Tunable thresholds.
//!
//! The detector's thresholds are empirical, not derived from a statistical
//! test, so they live here instead of being baked into the algorithms.
//! A config file looks like:
//!
//! ```toml
//! [analyzer]
//! detection_threshold = 0.5
//! block_size = 16
//!
//! [stego]
//! max_message_len = 4096
//! ```
//!
//! Missing keys fall back to the defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::{BLOCK_SIZE, MAX_MESSAGE_LEN};

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

/// Detector settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// `unusual_patterns` is set when `|H - 1|` is below this.
    pub unusual_tolerance: f64,
    /// Probability weight added when `unusual_patterns` is set.
    pub unusual_weight: f64,
    /// Lower (exclusive) bound of the near-random entropy band.
    pub near_random_low: f64,
    /// Upper (exclusive) bound of the near-random entropy band.
    pub near_random_high: f64,
    /// Probability weight added when entropy falls inside the band.
    pub near_random_weight: f64,
    /// Regions, heatmap and heuristic extraction run above this probability.
    pub detection_threshold: f64,
    /// Edge length of scanned blocks, in pixels.
    pub block_size: u32,
    /// A block is flagged when its local entropy exceeds this.
    pub block_entropy_threshold: f64,
    /// How many raw buffer bytes the heuristic extractor walks.
    pub heuristic_byte_window: usize,
    /// Minimum printable run for a `Text` classification.
    pub text_min_len: usize,
    /// Number of bits shown for a `Binary` classification.
    pub binary_preview_bits: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            unusual_tolerance: 0.05,
            unusual_weight: 0.5,
            near_random_low: 0.9,
            near_random_high: 0.99,
            near_random_weight: 0.3,
            detection_threshold: 0.5,
            block_size: BLOCK_SIZE,
            block_entropy_threshold: 0.95,
            heuristic_byte_window: 4000,
            text_min_len: 8,
            binary_preview_bits: 100,
        }
    }
}

/// Embed/extract settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StegoConfig {
    /// Largest byte count a header may announce.
    pub max_message_len: u32,
}

impl Default for StegoConfig {
    fn default() -> Self {
        Self {
            max_message_len: MAX_MESSAGE_LEN,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub analyzer: AnalyzerConfig,
    pub stego: StegoConfig,
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.stego.max_message_len, 10_000);
        assert_eq!(config.analyzer.block_size, 32);
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_toml_str(
            "[analyzer]\nblock_size = 16\n\n[stego]\nmax_message_len = 64\n",
        )
        .unwrap();
        assert_eq!(config.analyzer.block_size, 16);
        assert_eq!(config.analyzer.detection_threshold, 0.5);
        assert_eq!(config.stego.max_message_len, 64);
    }

    #[test]
    fn test_invalid_toml() {
        let result = Config::from_toml_str("[analyzer\nblock_size = ");
        assert!(matches!(result, Err(ConfigError::TomlParseError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("lsbkit.toml");
        fs::write(&path, "[analyzer]\ntext_min_len = 12\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.analyzer.text_min_len, 12);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load(temp_dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
