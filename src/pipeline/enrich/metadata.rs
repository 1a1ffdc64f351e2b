use chrono::Local;

use crate::config::MetadataConfig;
use crate::domain::Record;

use super::Enricher;

const LAST_UPDATED_FIELD: &str = "last_updated";
const LAST_UPDATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Stamps the dataset's static metadata fields (enrichment source, source
/// platform, placeholder fields) on every record, plus an optional
/// `last_updated` timestamp.
///
/// When `stamp_last_updated` is set, `last_updated` is the one field allowed
/// to differ between otherwise identical runs.
pub struct MetadataEnricher {
    fields: Vec<(String, String)>,
    stamp_last_updated: bool,
}

impl MetadataEnricher {
    pub fn from_config(config: &MetadataConfig) -> Self {
        Self {
            fields: config
                .fields
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
            stamp_last_updated: config.stamp_last_updated,
        }
    }
}

impl Enricher for MetadataEnricher {
    fn enrich(&self, record: &Record) -> Record {
        let mut enriched = record.clone();
        for (field, value) in &self.fields {
            enriched.set(field, value);
        }
        if self.stamp_last_updated {
            let stamp = Local::now().format(LAST_UPDATED_FORMAT).to_string();
            enriched.set(LAST_UPDATED_FIELD, &stamp);
        }
        enriched
    }

    fn name(&self) -> &str {
        "metadata"
    }
}
