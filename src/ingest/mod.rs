//! Collaborator seams between upstream acquisition and the build pipeline.
//!
//! Real scrapers live behind the `Fetcher`/`Extractor` traits; this crate
//! ships only the implementations that need no network: reading previously
//! captured pages or exported tables from disk, and parsing delimited text
//! into records. An HTML extractor for a live source slots in behind the
//! same traits.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::common::error::{BuildError, Result};
use crate::domain::Record;

/// A request for raw bytes from an upstream source.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub url: String,
    pub headers: HashMap<String, String>,
    pub timeout: Duration,
}

impl FetchRequest {
    /// A request for a local file; headers and timeout are irrelevant.
    pub fn local<P: AsRef<Path>>(path: P) -> Self {
        Self {
            url: path.as_ref().display().to_string(),
            headers: HashMap::new(),
            timeout: Duration::from_secs(10),
        }
    }
}

pub trait Fetcher: Send + Sync {
    fn fetch(&self, request: &FetchRequest) -> Result<Vec<u8>>;
}

pub trait Extractor: Send + Sync {
    fn extract(&self, raw: &[u8]) -> Result<Vec<Record>>;
}

/// Fetcher over the local filesystem.
pub struct FileFetcher;

impl Fetcher for FileFetcher {
    fn fetch(&self, request: &FetchRequest) -> Result<Vec<u8>> {
        fs::read(&request.url).map_err(|e| BuildError::Load {
            path: request.url.clone(),
            message: e.to_string(),
        })
    }
}

/// Extractor for delimited text with a header row. Column names are read
/// literally from the header; source row order is preserved.
pub struct CsvExtractor;

impl Extractor for CsvExtractor {
    fn extract(&self, raw: &[u8]) -> Result<Vec<Record>> {
        let mut reader = csv::Reader::from_reader(raw);
        let headers = reader.headers()?.clone();

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let mut record = Record::new();
            for (name, value) in headers.iter().zip(row.iter()) {
                record.set(name, value);
            }
            records.push(record);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_extractor_preserves_row_order() {
        let raw = b"name,price\nGemma,$$$\nTei-An,$$$$\n";
        let records = CsvExtractor.extract(raw).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("name"), Some("Gemma"));
        assert_eq!(records[0].get("price"), Some("$$$"));
        assert_eq!(records[1].get("name"), Some("Tei-An"));
    }

    #[test]
    fn test_csv_extractor_rejects_ragged_rows() {
        let raw = b"name,price\nGemma\n";
        assert!(CsvExtractor.extract(raw).is_err());
    }

    #[test]
    fn test_file_fetcher_missing_file() {
        let request = FetchRequest::local("/no/such/file.csv");
        let err = FileFetcher.fetch(&request).unwrap_err();
        assert!(matches!(err, BuildError::Load { .. }));
    }
}
