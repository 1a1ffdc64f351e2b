use std::path::Path;

use crate::common::error::Result;
use crate::domain::Record;

/// Serializes the final record sequence to a delimited text file with a
/// header row, overwriting any existing file at the destination.
///
/// Column order follows the first record's field order; the assembler has
/// already made that uniform. A write failure is fatal for the run, with no
/// partial-write recovery.
pub struct CsvSink;

impl CsvSink {
    pub fn write<P: AsRef<Path>>(&self, path: P, records: &[Record]) -> Result<()> {
        let mut writer = csv::Writer::from_path(path.as_ref())?;

        if let Some(first) = records.first() {
            let header: Vec<&str> = first.fields().collect();
            writer.write_record(&header)?;
            for record in records {
                let row: Vec<&str> = header
                    .iter()
                    .map(|field| record.get(field).unwrap_or(""))
                    .collect();
                writer.write_record(&row)?;
            }
        }

        writer.flush()?;
        Ok(())
    }
}
