//! Classifier boundary.
//!
//! The image model itself is an external collaborator: anything that can map
//! a frame to a labeled, scored prediction can sit behind the [`Classifier`]
//! trait. The crate ships a manifest-backed implementation for replayed frame
//! directories, which also serves as the test double.

mod manifest;

pub use manifest::ManifestClassifier;

use crate::capture::Frame;
use crate::constants::confidence;
use crate::error::Result;

/// One classification result above the model's own threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Species or class name.
    pub label: String,
    /// Conservation-status bucket.
    pub category: String,
    /// Confidence in [0, 1].
    pub confidence: f32,
}

impl Prediction {
    /// Create a prediction, clamping confidence into valid bounds.
    pub fn new(label: impl Into<String>, category: impl Into<String>, conf: f32) -> Self {
        Self {
            label: label.into(),
            category: category.into(),
            confidence: conf.clamp(confidence::MIN, confidence::MAX),
        }
    }
}

/// A pretrained image classifier.
///
/// `Ok(None)` is the single "no detection" sentinel: implementations must map
/// any backend-specific null result (empty label, zero confidence, absent
/// entry) to `None` so callers never see a half-filled prediction.
pub trait Classifier {
    /// Classify one frame.
    fn classify(&self, frame: &Frame) -> Result<Option<Prediction>>;
}
