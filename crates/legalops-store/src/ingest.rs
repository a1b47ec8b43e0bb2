//! CSV input rows as raw string maps.

use std::path::Path;

use legalops_core::RawRecord;
use tracing::info;

use crate::StoreError;

/// Read every row of a headed CSV file. Cells are trimmed; the header row
/// supplies the keys.
pub fn read_csv_rows(path: &Path) -> Result<Vec<RawRecord>, StoreError> {
    if !path.exists() {
        return Err(StoreError::NotFound(path.to_path_buf()));
    }
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?;

    let rows = reader
        .deserialize::<RawRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    info!(count = rows.len(), path = %path.display(), "read csv rows");
    Ok(rows)
}
