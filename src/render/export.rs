//! CSV export of a reading history

use std::io::Write;

use crate::views::PlantDetails;

/// Errors that can occur while exporting
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the history as CSV, newest first.
///
/// Columns: `plant_id`, `timestamp` (RFC 3339, UTC), `moisture_percent`,
/// `status`.
pub fn history_csv<W: Write>(details: &PlantDetails, writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["plant_id", "timestamp", "moisture_percent", "status"])?;

    let plant_id = details.plant().id.to_string();
    for row in details.history() {
        wtr.write_record([
            plant_id.as_str(),
            &row.timestamp.to_rfc3339(),
            &row.moisture_percent.to_string(),
            row.status.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
