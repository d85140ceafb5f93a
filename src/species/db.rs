//! Species metadata lookup.
//!
//! Backed by a read-only JSON object keyed by species name. Classifier label
//! strings and table keys are not guaranteed to be written identically, so
//! lookup falls back to a case-insensitive substring match in either direction
//! before degrading to a placeholder. Lookups never fail.

use crate::constants::{PLACEHOLDER_SCIENTIFIC_NAME, PLACEHOLDER_STATUS};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Metadata for one species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesInfo {
    /// Binomial name, or `"Not available"` when unknown.
    pub scientific_name: String,
    /// Conservation status text, or `"Unknown"` when unknown.
    pub status: String,
}

impl SpeciesInfo {
    /// Placeholder returned for wholly unmatched lookups.
    pub fn placeholder() -> Self {
        Self {
            scientific_name: PLACEHOLDER_SCIENTIFIC_NAME.to_string(),
            status: PLACEHOLDER_STATUS.to_string(),
        }
    }
}

/// Static species metadata table, loaded once per process.
///
/// A `BTreeMap` keeps fuzzy-match resolution deterministic when more than one
/// key could match a queried label.
#[derive(Debug, Clone, Default)]
pub struct SpeciesDb {
    entries: BTreeMap<String, SpeciesInfo>,
}

impl SpeciesDb {
    /// Build a database from in-memory entries.
    pub fn from_entries(entries: BTreeMap<String, SpeciesInfo>) -> Self {
        Self { entries }
    }

    /// Load the database from a JSON file.
    ///
    /// A missing file is not fatal: every lookup then degrades to the
    /// placeholder, matching the demo's behavior when the metadata table is
    /// absent. Malformed JSON is an error so a broken deployment is noticed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Species metadata file not found: {}", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(Error::SpeciesDbRead {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        let entries = serde_json::from_str(&content).map_err(|e| Error::SpeciesDbParse {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Self { entries })
    }

    /// Number of species in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up metadata for a classifier label.
    ///
    /// Resolution order: exact key match, then case-insensitive substring
    /// match in either direction, then the placeholder.
    pub fn lookup(&self, label: &str) -> SpeciesInfo {
        if let Some(info) = self.entries.get(label) {
            return info.clone();
        }

        let needle = label.to_lowercase();
        for (key, info) in &self.entries {
            let key_lower = key.to_lowercase();
            if key_lower.contains(&needle) || needle.contains(&key_lower) {
                return info.clone();
            }
        }

        SpeciesInfo::placeholder()
    }
}
