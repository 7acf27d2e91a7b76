//! CSV export of the scraped records.
//!
//! One header row with the four fixed column names, one row per record,
//! truncating overwrite of any existing file.

use crate::model::{EmployeeRecord, ExportError};
use crate::report::Reporter;
use tracing::debug;

pub fn save_to_csv(
    records: &[EmployeeRecord],
    path: &str,
    reporter: &dyn Reporter,
) -> Result<(), ExportError> {
    if records.is_empty() {
        reporter.failure("No data to save.");
        return Ok(());
    }

    debug!(path, count = records.len(), "Writing CSV");

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    reporter.success(&format!(
        "Data successfully scraped and saved to '{path}'!"
    ));
    Ok(())
}
