//! Manifest-backed classifier.
//!
//! Maps frame tags to predictions through a JSON object keyed by tag:
//!
//! ```json
//! {
//!   "frame_0001": { "label": "Vaquita", "confidence": 0.97 },
//!   "frame_0002": { "label": "Red Panda", "category": "EN(G2)", "confidence": 0.93 }
//! }
//! ```
//!
//! Tags absent from the manifest are the "no detection" sentinel. When an
//! entry omits its category, the built-in conservation groups fill it in.

use crate::capture::Frame;
use crate::error::{Error, Result};
use crate::inference::{Classifier, Prediction};
use crate::species::category_for;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    label: String,
    #[serde(default)]
    category: Option<String>,
    confidence: f32,
}

/// Classifier that resolves predictions from a JSON manifest.
#[derive(Debug)]
pub struct ManifestClassifier {
    entries: HashMap<String, ManifestEntry>,
}

impl ManifestClassifier {
    /// Load a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::ManifestRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let entries: HashMap<String, ManifestEntry> =
            serde_json::from_str(&content).map_err(|e| Error::ManifestParse {
                path: path.to_path_buf(),
                source: e,
            })?;

        debug!("Loaded prediction manifest with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Number of tags with predictions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest holds no predictions at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Classifier for ManifestClassifier {
    fn classify(&self, frame: &Frame) -> Result<Option<Prediction>> {
        let Some(entry) = self.entries.get(&frame.tag) else {
            return Ok(None);
        };

        // Blank labels are a malformed manifest row, not a detection.
        if entry.label.trim().is_empty() {
            return Ok(None);
        }

        let category = entry
            .category
            .clone()
            .unwrap_or_else(|| category_for(&entry.label).to_string());

        Ok(Some(Prediction::new(
            entry.label.clone(),
            category,
            entry.confidence,
        )))
    }
}
