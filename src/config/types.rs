//! Configuration type definitions.

use crate::constants::{
    DEFAULT_COOLDOWN_SECS, DEFAULT_EXCLUDED_LABELS, DEFAULT_FRAME_INTERVAL_MS, DEFAULT_LOG_FILE,
    DEFAULT_MIN_CONFIDENCE, DEFAULT_SPECIES_FILE, confidence,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Detection gate settings.
    #[serde(default)]
    pub detection: DetectionConfig,

    /// File locations.
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Detection gate and capture loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Minimum confidence for logging a detection.
    pub min_confidence: f32,

    /// Per-species cooldown between log entries, in seconds.
    pub cooldown_secs: u64,

    /// Minimum interval between inference passes, in milliseconds.
    pub frame_interval_ms: u64,

    /// Classifier labels that are never logged.
    pub excluded_labels: Vec<String>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            cooldown_secs: DEFAULT_COOLDOWN_SECS,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            excluded_labels: DEFAULT_EXCLUDED_LABELS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// File locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Detection log file.
    pub log_file: PathBuf,

    /// Species metadata file.
    pub species_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            species_file: PathBuf::from(DEFAULT_SPECIES_FILE),
        }
    }
}

/// Validate value ranges in a configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    let min_conf = config.detection.min_confidence;
    if !(confidence::MIN..=confidence::MAX).contains(&min_conf) {
        return Err(Error::ConfigValidation {
            message: format!("min_confidence must be between 0.0 and 1.0, got {min_conf}"),
        });
    }
    Ok(())
}
