use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::common::error::{BuildError, Result};

/// Configuration for building one dataset: target schema, enrichment order,
/// and static metadata stamped on every record.
///
/// Loaded from `registry/datasets/<dataset_id>.toml`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasetConfig {
    pub dataset_id: String,
    /// Ordered field list defining the persisted output shape.
    pub schema: Vec<String>,
    /// Append non-schema fields after the schema fields instead of dropping them.
    #[serde(default = "default_keep_extras")]
    pub keep_extras: bool,
    /// Lookup table ids, applied in order.
    #[serde(default)]
    pub enrichers: Vec<String>,
    #[serde(default)]
    pub metadata: MetadataConfig,
}

/// Static fields every record of the dataset receives, plus an optional
/// `last_updated` timestamp.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MetadataConfig {
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
    #[serde(default)]
    pub stamp_last_updated: bool,
}

impl MetadataConfig {
    pub fn is_active(&self) -> bool {
        !self.fields.is_empty() || self.stamp_last_updated
    }
}

fn default_keep_extras() -> bool {
    true
}

impl DatasetConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| BuildError::Config {
            message: format!("failed to read dataset config {}: {}", path.display(), e),
        })?;

        let config: DatasetConfig = toml::from_str(&content).map_err(|e| BuildError::Config {
            message: format!("failed to parse dataset config {}: {}", path.display(), e),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load `<datasets_dir>/<dataset_id>.toml`.
    pub fn load_for_dataset<P: AsRef<Path>>(datasets_dir: P, dataset_id: &str) -> Result<Self> {
        let path = datasets_dir.as_ref().join(format!("{}.toml", dataset_id));
        let config = Self::load_from_file(&path)?;
        if config.dataset_id != dataset_id {
            return Err(BuildError::Config {
                message: format!(
                    "dataset config {} declares id '{}', expected '{}'",
                    path.display(),
                    config.dataset_id,
                    dataset_id
                ),
            });
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.dataset_id.trim().is_empty() {
            return Err(BuildError::Config {
                message: "dataset_id must not be empty".to_string(),
            });
        }
        if self.schema.is_empty() {
            return Err(BuildError::Config {
                message: format!("dataset '{}' has an empty schema", self.dataset_id),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dataset_config() {
        let toml_src = r#"
            dataset_id = "restaurants"
            schema = ["name", "address", "reservation_platform"]
            enrichers = ["reservations", "price_bands"]

            [metadata]
            stamp_last_updated = true

            [metadata.fields]
            source_platform = "OpenTable, Resy, Tock"
        "#;

        let config: DatasetConfig = toml::from_str(toml_src).unwrap();
        assert_eq!(config.dataset_id, "restaurants");
        assert!(config.keep_extras);
        assert_eq!(config.enrichers, vec!["reservations", "price_bands"]);
        assert!(config.metadata.stamp_last_updated);
        assert_eq!(
            config.metadata.fields.get("source_platform").map(String::as_str),
            Some("OpenTable, Resy, Tock")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_metadata_defaults_to_inactive() {
        let toml_src = r#"
            dataset_id = "causes"
            schema = ["org_name"]
        "#;

        let config: DatasetConfig = toml::from_str(toml_src).unwrap();
        assert!(!config.metadata.is_active());
        assert!(config.enrichers.is_empty());
    }

    #[test]
    fn test_empty_schema_rejected() {
        let toml_src = r#"
            dataset_id = "creators"
            schema = []
        "#;

        let config: DatasetConfig = toml::from_str(toml_src).unwrap();
        assert!(matches!(
            config.validate(),
            Err(BuildError::Config { .. })
        ));
    }

    #[test]
    fn test_load_for_dataset_checks_id() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("restaurants.toml"),
            "dataset_id = \"causes\"\nschema = [\"org_name\"]\n",
        )
        .unwrap();

        let err = DatasetConfig::load_for_dataset(dir.path(), "restaurants").unwrap_err();
        assert!(matches!(err, BuildError::Config { .. }));
    }
}
