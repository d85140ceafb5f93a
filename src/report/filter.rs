//! Record filtering for the log views.

use crate::store::DetectionRecord;
use chrono::NaiveDate;

/// Filter criteria applied to loaded log records.
#[derive(Debug, Clone, Default)]
pub struct LogFilter {
    /// Earliest date to include (inclusive).
    pub from: Option<NaiveDate>,
    /// Latest date to include (inclusive).
    pub to: Option<NaiveDate>,
    /// Only include this conservation category.
    pub category: Option<String>,
    /// Only include records at or above this confidence.
    pub min_confidence: Option<f32>,
}

impl LogFilter {
    /// Apply the filter, returning matching records newest-first.
    pub fn apply(&self, records: &[DetectionRecord]) -> Vec<DetectionRecord> {
        let mut matched: Vec<DetectionRecord> = records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        matched
    }

    fn matches(&self, record: &DetectionRecord) -> bool {
        let date = record.timestamp.date();
        if self.from.is_some_and(|from| date < from) {
            return false;
        }
        if self.to.is_some_and(|to| date > to) {
            return false;
        }
        if self
            .category
            .as_ref()
            .is_some_and(|category| record.category != *category)
        {
            return false;
        }
        if self
            .min_confidence
            .is_some_and(|min| record.confidence_score < min)
        {
            return false;
        }
        true
    }
}
