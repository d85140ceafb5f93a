//! Append-only JSON detection log.
//!
//! The log is a single JSON array of flat records, rewritten in full on every
//! append. A missing, empty, or unparsable file is treated as an empty log
//! rather than an error: losing historical entries is preferred over blocking
//! detection. Single writer, no locking.

use crate::constants::TIMESTAMP_FORMAT;
use crate::error::{Error, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// One logged sighting. Immutable after append.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionRecord {
    /// Wall-clock time of logging, second precision.
    #[serde(with = "log_timestamp")]
    pub timestamp: NaiveDateTime,
    /// Species name as produced by the classifier.
    pub class_name: String,
    /// Conservation-status bucket (e.g. `EN(G1)`, `LC(G5)`).
    pub category: String,
    /// Classifier confidence in [0, 1] at time of logging.
    pub confidence_score: f32,
}

/// Serde adapter for the log's `YYYY-MM-DD HH:MM:SS` timestamp strings.
mod log_timestamp {
    use super::{NaiveDateTime, TIMESTAMP_FORMAT};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&ts.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(de)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(de::Error::custom)
    }
}

/// File-backed detection log store.
#[derive(Debug, Clone)]
pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    /// Create a store backed by the given file. Does not touch the filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the log file exists and holds a valid JSON array.
    ///
    /// Creates parent directories and an empty `[]` file when absent, and
    /// resets the file to `[]` when its content is empty or unparsable.
    pub fn init(&self) -> Result<()> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let trimmed = content.trim();
                if trimmed.is_empty()
                    || serde_json::from_str::<Vec<DetectionRecord>>(trimmed).is_err()
                {
                    warn!(
                        "Detection log {} is empty or corrupted, resetting",
                        self.path.display()
                    );
                    self.write_records(&[])?;
                }
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => self.write_records(&[]),
            Err(e) => Err(Error::Io(e)),
        }
    }

    /// Append one record, rewriting the whole file.
    ///
    /// Unparsable existing content is silently replaced by an empty log
    /// before the append (self-healing parse).
    pub fn append(&self, record: &DetectionRecord) -> Result<()> {
        let mut records = self.read_or_heal();
        records.push(record.clone());
        self.write_records(&records)?;
        debug!(
            "Logged {} ({}) at {}",
            record.class_name,
            record.category,
            record.timestamp.format(TIMESTAMP_FORMAT)
        );
        Ok(())
    }

    /// Load all records in insertion order.
    ///
    /// A missing file is "no data yet", not an error; corrupt or empty
    /// content also yields an empty sequence.
    pub fn load_all(&self) -> Result<Vec<DetectionRecord>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(self.parse_or_empty(&content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(Error::Io(e)),
        }
    }

    /// Whether the backing file exists at all.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read_or_heal(&self) -> Vec<DetectionRecord> {
        fs::read_to_string(&self.path)
            .map(|content| self.parse_or_empty(&content))
            .unwrap_or_default()
    }

    fn parse_or_empty(&self, content: &str) -> Vec<DetectionRecord> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        serde_json::from_str(trimmed).unwrap_or_else(|e| {
            warn!(
                "Detection log {} is not valid JSON ({e}), treating as empty",
                self.path.display()
            );
            Vec::new()
        })
    }

    fn write_records(&self, records: &[DetectionRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| Error::LogWrite {
                path: self.path.clone(),
                source: e,
            })?;
        }

        let json =
            serde_json::to_string_pretty(records).map_err(|e| Error::LogSerialize { source: e })?;
        fs::write(&self.path, json).map_err(|e| Error::LogWrite {
            path: self.path.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn record(class_name: &str, secs: u32) -> DetectionRecord {
        DetectionRecord {
            timestamp: NaiveDate::from_ymd_opt(2025, 3, 14)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap()
                + chrono::Duration::seconds(i64::from(secs)),
            class_name: class_name.to_string(),
            category: "EN(G1)".to_string(),
            confidence_score: 0.95,
        }
    }

    #[test]
    fn test_append_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = LogStore::new(dir.path().join("detection_logs.json"));

        let records: Vec<_> = (0..5).map(|i| record(&format!("Species {i}"), i)).collect();
        for r in &records {
            store.append(r).unwrap();
        }

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = LogStore::new(dir.path().join("missing.json"));
        assert!(store.load_all().unwrap().is_empty());
        assert!(!store.exists());
    }

    #[test]
    fn test_corrupt_file_heals_on_append() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("detection_logs.json");
        fs::write(&path, "{not json at all").unwrap();

        let store = LogStore::new(&path);
        assert!(store.load_all().unwrap().is_empty());

        store.append(&record("Vaquita", 0)).unwrap();
        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].class_name, "Vaquita");

        // File content is now a valid array again.
        let raw = fs::read_to_string(&path).unwrap();
        serde_json::from_str::<Vec<DetectionRecord>>(&raw).unwrap();
    }

    #[test]
    fn test_init_creates_empty_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logs").join("detection_logs.json");
        let store = LogStore::new(&path);
        store.init().unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw.trim(), "[]");
    }

    #[test]
    fn test_init_resets_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("detection_logs.json");
        fs::write(&path, "]][[").unwrap();

        LogStore::new(&path).init().unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw.trim(), "[]");
    }

    #[test]
    fn test_init_preserves_valid_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("detection_logs.json");
        let store = LogStore::new(&path);
        store.append(&record("Vaquita", 0)).unwrap();

        store.init().unwrap();
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn test_timestamp_format_round_trip() {
        let r = record("Vaquita", 7);
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"2025-03-14 12:00:07\""));
        assert!(json.contains("\"class_name\""));
        assert!(json.contains("\"confidence_score\""));

        let back: DetectionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
        assert_eq!(back.confidence_score, 0.95);
    }
}
