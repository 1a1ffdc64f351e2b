use crate::domain::Record;

pub mod lookup;
pub mod metadata;

pub use lookup::LookupEnricher;
pub use metadata::MetadataEnricher;

/// A pure transform adding auxiliary fields to a record.
///
/// Enrichers are total: a key that is absent from the backing data is a
/// normal case with defined defaults, never an error.
pub trait Enricher: Send + Sync {
    /// Produce an enriched copy of the record.
    fn enrich(&self, record: &Record) -> Record;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}

/// Pipeline combinator: fold the enricher list over a record, left to right.
pub fn apply_all(enrichers: &[Box<dyn Enricher>], record: &Record) -> Record {
    enrichers
        .iter()
        .fold(record.clone(), |enriched, enricher| enricher.enrich(&enriched))
}
