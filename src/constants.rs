//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "wildwatch";

/// Default minimum confidence threshold for logging a detection.
pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.90;

/// Default per-species cooldown between log entries, in seconds.
pub const DEFAULT_COOLDOWN_SECS: u64 = 30;

/// Default minimum interval between inference passes, in milliseconds.
///
/// Frames arriving inside this window are displayed but not classified,
/// which bounds CPU load when the capture source runs at full rate.
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 250;

/// Sleep between loop iterations when throttled, in milliseconds.
pub const IDLE_SLEEP_MS: u64 = 10;

/// Backoff after a transient frame read failure, in milliseconds.
pub const READ_BACKOFF_MS: u64 = 100;

/// Classifier output labels that must never be logged.
///
/// Matched by exact equality or label suffix, so a model label like
/// `"0 Human"` still hits the `"Human"` exclusion.
pub const DEFAULT_EXCLUDED_LABELS: &[&str] = &["Human", "Environment"];

/// Default detection log file path, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "logs/detection_logs.json";

/// Default species metadata file path, relative to the working directory.
pub const DEFAULT_SPECIES_FILE: &str = "database/endangered.json";

/// Timestamp format used in the detection log.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Confidence value bounds.
pub mod confidence {
    /// Minimum valid confidence value.
    pub const MIN: f32 = 0.0;
    /// Maximum valid confidence value.
    pub const MAX: f32 = 1.0;
    /// Decimal places for confidence percentage formatting.
    pub const DECIMAL_PLACES: usize = 2;
}

/// Category assigned when a species matches no conservation group.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Placeholder scientific name for unmatched species lookups.
pub const PLACEHOLDER_SCIENTIFIC_NAME: &str = "Not available";

/// Placeholder conservation status for unmatched species lookups.
pub const PLACEHOLDER_STATUS: &str = "Unknown";
