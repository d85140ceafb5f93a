//! Aggregations over filtered log records.

use crate::store::DetectionRecord;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};

/// Summary metrics for a set of records.
#[derive(Debug, Clone, PartialEq)]
pub struct LogSummary {
    /// Total record count.
    pub total_detections: usize,
    /// Distinct species names.
    pub unique_species: usize,
    /// Mean confidence as a percentage, `None` when there are no records.
    pub mean_confidence_pct: Option<f32>,
}

/// Compute summary metrics.
pub fn summarize(records: &[DetectionRecord]) -> LogSummary {
    let unique: HashSet<&str> = records.iter().map(|r| r.class_name.as_str()).collect();
    let mean_confidence_pct = if records.is_empty() {
        None
    } else {
        #[allow(clippy::cast_precision_loss)]
        let mean = records
            .iter()
            .map(|r| r.confidence_score)
            .sum::<f32>()
            / records.len() as f32;
        Some(mean * 100.0)
    };

    LogSummary {
        total_detections: records.len(),
        unique_species: unique.len(),
        mean_confidence_pct,
    }
}

/// Detection counts per day, ascending by date.
pub fn daily_counts(records: &[DetectionRecord]) -> Vec<(NaiveDate, usize)> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.timestamp.date()).or_default() += 1;
    }
    counts.into_iter().collect()
}

/// Detection counts per category, descending by count then name.
pub fn category_distribution(records: &[DetectionRecord]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.category.as_str()).or_default() += 1;
    }
    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(category, count)| (category.to_string(), count))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}
