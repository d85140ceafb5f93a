//! CSV export of the filtered detection table.

use crate::constants::{TIMESTAMP_FORMAT, confidence::DECIMAL_PLACES};
use crate::error::{Error, Result};
use crate::store::DetectionRecord;
use std::path::Path;

/// Write records to a CSV file mirroring the table view.
///
/// Columns: `Timestamp,Species,Category,Confidence Score`, with confidence
/// formatted as a percentage. Records are written in the order given.
pub fn export_csv(path: &Path, records: &[DetectionRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| Error::CsvExport {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    writer
        .write_record(["Timestamp", "Species", "Category", "Confidence Score"])
        .map_err(|e| Error::CsvExport {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    for record in records {
        writer
            .write_record([
                record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
                record.class_name.clone(),
                record.category.clone(),
                format!(
                    "{:.prec$}%",
                    record.confidence_score * 100.0,
                    prec = DECIMAL_PLACES
                ),
            ])
            .map_err(|e| Error::CsvExport {
                path: path.to_path_buf(),
                source: Box::new(e),
            })?;
    }

    writer.flush().map_err(|e| Error::CsvExport {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    Ok(())
}
