//! Write functions - emit the unified dataset as CSV

use crate::ingestion::types::PropertyRecord;
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// Write records to a CSV file, one row per record.
///
/// The header row is the unified schema in its fixed column order; `None`
/// cells serialize as empty. An existing file is overwritten.
pub fn write_csv(path: &Path, records: &[PropertyRecord]) -> Result<()> {
    info!("Writing {} records to {:?}", records.len(), path);

    // Header written up front so an empty dataset still has the full
    // column set; serialize must then not emit its own header row.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(PropertyRecord::COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!("Write complete: {:?}", path);

    Ok(())
}
