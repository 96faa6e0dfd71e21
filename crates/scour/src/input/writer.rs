//! Delimited-text output for tables.

use std::path::Path;

use crate::error::{Result, ScourError};
use crate::table::Table;

/// Write a table as delimited text with a header row. Missing cells become
/// empty fields.
pub fn write_delimited(table: &Table, path: impl AsRef<Path>, delimiter: u8) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)?;

    writer.write_record(table.columns())?;
    for i in 0..table.row_count() {
        let Some(row) = table.row(i) else { continue };
        let record: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some(v) => format!("{v}"),
                None => String::new(),
            })
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush().map_err(|e| ScourError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
