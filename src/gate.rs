//! Detection gating: confidence threshold, label exclusion, per-species cooldown.
//!
//! The gate decides whether a single classification result is eligible for
//! logging. It owns its cooldown state explicitly so it can be constructed,
//! reset, and tested independently of any capture loop.

use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::time::Duration;

/// Outcome of evaluating one classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Detection is eligible for logging; cooldown state was updated.
    Accept,
    /// Confidence fell below the configured threshold.
    RejectLowConfidence,
    /// Label is on the exclusion list (non-animal classes).
    RejectExcludedLabel,
    /// Species was logged too recently.
    RejectCooldown {
        /// Seconds until this species may be logged again, clamped at zero.
        remaining_secs: u64,
    },
}

impl Decision {
    /// Whether the detection should be appended to the log.
    pub const fn is_accept(self) -> bool {
        matches!(self, Self::Accept)
    }
}

/// Per-species cooldown bookkeeping.
///
/// Maps label to the timestamp of its last accepted detection. Process-local
/// and never persisted; a restart clears all cooldowns.
#[derive(Debug, Clone, Default)]
pub struct CooldownState {
    last_accept: HashMap<String, NaiveDateTime>,
}

impl CooldownState {
    /// Create empty cooldown state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last accepted detection time for a label, if any.
    pub fn last_accept(&self, label: &str) -> Option<NaiveDateTime> {
        self.last_accept.get(label).copied()
    }

    fn record(&mut self, label: &str, now: NaiveDateTime) {
        self.last_accept.insert(label.to_string(), now);
    }

    fn clear(&mut self) {
        self.last_accept.clear();
    }
}

/// Decision logic for accepting or rejecting classification results.
#[derive(Debug)]
pub struct DetectionGate {
    min_confidence: f32,
    cooldown: Duration,
    excluded_labels: Vec<String>,
    cooldowns: CooldownState,
}

impl DetectionGate {
    /// Create a gate with the given threshold, cooldown window, and exclusions.
    pub fn new(
        min_confidence: f32,
        cooldown: Duration,
        excluded_labels: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            min_confidence,
            cooldown,
            excluded_labels: excluded_labels.into_iter().collect(),
            cooldowns: CooldownState::new(),
        }
    }

    /// Minimum confidence required for acceptance.
    pub const fn min_confidence(&self) -> f32 {
        self.min_confidence
    }

    /// Cooldown window between accepted detections of the same species.
    pub const fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Evaluate one classification result.
    ///
    /// Rules are applied in order: exclusion list, confidence threshold,
    /// cooldown window. Only `Accept` mutates the cooldown state; rejections
    /// are pure queries. Unknown labels never error.
    pub fn evaluate(&mut self, label: &str, confidence: f32, now: NaiveDateTime) -> Decision {
        if self.is_excluded(label) {
            return Decision::RejectExcludedLabel;
        }

        if confidence < self.min_confidence {
            return Decision::RejectLowConfidence;
        }

        if let Some(last) = self.cooldowns.last_accept(label) {
            let elapsed = (now - last).num_seconds();
            let cooldown_secs = i64::try_from(self.cooldown.as_secs()).unwrap_or(i64::MAX);
            if elapsed < cooldown_secs {
                let remaining = cooldown_secs.saturating_sub(elapsed).max(0);
                #[allow(clippy::cast_sign_loss)]
                return Decision::RejectCooldown {
                    remaining_secs: remaining as u64,
                };
            }
        }

        self.cooldowns.record(label, now);
        Decision::Accept
    }

    /// Whether a label is on the exclusion list.
    ///
    /// Matches exact labels and label suffixes, so a prefixed model label
    /// still hits the exclusion.
    pub fn is_excluded(&self, label: &str) -> bool {
        self.excluded_labels
            .iter()
            .any(|excluded| label == excluded || label.ends_with(excluded.as_str()))
    }

    /// Clear all cooldown state, as a process restart would.
    pub fn reset(&mut self) {
        self.cooldowns.clear();
    }

    /// Read-only view of the cooldown state.
    pub const fn cooldowns(&self) -> &CooldownState {
        &self.cooldowns
    }
}
