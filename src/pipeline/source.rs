use std::path::Path;

use crate::common::error::{BuildError, Result};
use crate::domain::Record;
use crate::ingest::{CsvExtractor, Extractor, FetchRequest, Fetcher, FileFetcher};

/// Reads a base table of entities into an ordered sequence of records.
///
/// Composed from the collaborator seams: a `Fetcher` produces raw bytes and
/// an `Extractor` turns them into records, so a scraped-HTML source can feed
/// the same pipeline as a CSV export.
pub struct SourceLoader {
    fetcher: Box<dyn Fetcher>,
    extractor: Box<dyn Extractor>,
}

impl SourceLoader {
    pub fn new(fetcher: Box<dyn Fetcher>, extractor: Box<dyn Extractor>) -> Self {
        Self { fetcher, extractor }
    }

    /// The production loader: local CSV files with a header row.
    pub fn from_csv_files() -> Self {
        Self::new(Box::new(FileFetcher), Box::new(CsvExtractor))
    }

    /// Load all records from `path`, preserving source row order. A missing
    /// or malformed file aborts the run.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Record>> {
        let path = path.as_ref();
        let raw = self.fetcher.fetch(&FetchRequest::local(path))?;
        self.extractor.extract(&raw).map_err(|e| BuildError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
