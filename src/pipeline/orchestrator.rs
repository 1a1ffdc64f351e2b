use std::path::Path;

use tracing::{debug, info};

use crate::common::error::{BuildError, Result};
use crate::config::DatasetConfig;
use crate::domain::Record;
use crate::pipeline::assemble::SchemaAssembler;
use crate::pipeline::enrich::{apply_all, Enricher, LookupEnricher, MetadataEnricher};
use crate::pipeline::sink::CsvSink;
use crate::pipeline::source::SourceLoader;
use crate::registry::LookupRegistry;

/// Orchestrator for one dataset's build: load → enrich → assemble → write,
/// executed once per run.
///
/// Construction resolves every configured enricher against the lookup
/// registry, so an unknown table id fails before any input is read.
pub struct DatasetPipeline {
    dataset_id: String,
    loader: SourceLoader,
    enrichers: Vec<Box<dyn Enricher>>,
    assembler: SchemaAssembler,
    sink: CsvSink,
}

impl std::fmt::Debug for DatasetPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatasetPipeline")
            .field("dataset_id", &self.dataset_id)
            .finish_non_exhaustive()
    }
}

impl DatasetPipeline {
    pub fn from_config(config: DatasetConfig, registry: &LookupRegistry) -> Result<Self> {
        config.validate()?;

        let mut enrichers: Vec<Box<dyn Enricher>> = Vec::new();
        for table_id in &config.enrichers {
            let table = registry.get(table_id).ok_or_else(|| BuildError::Config {
                message: format!(
                    "dataset '{}' references unknown lookup table '{}' (available: {})",
                    config.dataset_id,
                    table_id,
                    registry.table_ids().join(", ")
                ),
            })?;
            enrichers.push(Box::new(LookupEnricher::new(table.clone())));
        }
        if config.metadata.is_active() {
            enrichers.push(Box::new(MetadataEnricher::from_config(&config.metadata)));
        }

        Ok(Self {
            dataset_id: config.dataset_id,
            loader: SourceLoader::from_csv_files(),
            enrichers,
            assembler: SchemaAssembler::new(config.schema, config.keep_extras),
            sink: CsvSink,
        })
    }

    /// Run the full pipeline once. Either the complete output file is written
    /// or the run fails; there is no partial-success mode.
    pub fn build<P: AsRef<Path>, Q: AsRef<Path>>(&self, input: P, output: Q) -> Result<BuildReport> {
        let input = input.as_ref();
        let output = output.as_ref();

        info!("🔄 Building dataset '{}' from {}", self.dataset_id, input.display());

        let records = self.loader.load(input)?;
        info!("📥 Loaded {} records", records.len());

        let enriched: Vec<Record> = records
            .iter()
            .map(|record| apply_all(&self.enrichers, record))
            .collect();
        for enricher in &self.enrichers {
            debug!("Applied enricher '{}' to {} records", enricher.name(), enriched.len());
        }

        let assembled = self.assembler.assemble(&enriched);
        self.sink.write(output, &assembled)?;
        info!(
            "✅ Wrote {} records to {}",
            assembled.len(),
            output.display()
        );

        Ok(BuildReport {
            dataset_id: self.dataset_id.clone(),
            records_in: records.len(),
            records_out: assembled.len(),
            enrichers_applied: self.enrichers.iter().map(|e| e.name().to_string()).collect(),
        })
    }
}

/// Result of building one dataset.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub dataset_id: String,
    pub records_in: usize,
    pub records_out: usize,
    pub enrichers_applied: Vec<String>,
}

impl BuildReport {
    /// The pipeline never drops or duplicates rows.
    pub fn is_consistent(&self) -> bool {
        self.records_in == self.records_out
    }
}
