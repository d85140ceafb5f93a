//! Plain-text rendering of the log views.

#![allow(clippy::print_stdout)]

use crate::constants::{TIMESTAMP_FORMAT, confidence::DECIMAL_PLACES};
use crate::report::summary::{category_distribution, daily_counts, summarize};
use crate::store::DetectionRecord;

const NAME_WIDTH: usize = 28;
const CATEGORY_WIDTH: usize = 10;

/// Print summary metrics, daily counts, category distribution, and the
/// record table for an already-filtered record set (newest-first).
pub fn print_report(records: &[DetectionRecord]) {
    let summary = summarize(records);

    println!("Summary");
    println!("  Total detections:  {}", summary.total_detections);
    println!("  Unique species:    {}", summary.unique_species);
    match summary.mean_confidence_pct {
        Some(mean) => println!(
            "  Avg. confidence:   {mean:.prec$}%",
            prec = DECIMAL_PLACES
        ),
        None => println!("  Avg. confidence:   N/A"),
    }

    if records.is_empty() {
        return;
    }

    println!();
    println!("Daily detections");
    for (date, count) in daily_counts(records) {
        println!("  {date}  {count:>5}  {}", "#".repeat(count.min(40)));
    }

    println!();
    println!("Categories");
    for (category, count) in category_distribution(records) {
        #[allow(clippy::cast_precision_loss)]
        let pct = count as f64 / records.len() as f64 * 100.0;
        println!(
            "  {category:<width$}  {count:>5}  ({pct:.1}%)",
            width = CATEGORY_WIDTH
        );
    }

    println!();
    println!(
        "{:<19}  {:<name$}  {:<cat$}  Confidence",
        "Timestamp",
        "Species",
        "Category",
        name = NAME_WIDTH,
        cat = CATEGORY_WIDTH,
    );
    for record in records {
        println!(
            "{}  {:<name$}  {:<cat$}  {:>6.prec$}%",
            record.timestamp.format(TIMESTAMP_FORMAT),
            record.class_name,
            record.category,
            record.confidence_score * 100.0,
            name = NAME_WIDTH,
            cat = CATEGORY_WIDTH,
            prec = DECIMAL_PLACES,
        );
    }
}
