use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::common::error::{BuildError, Result};
use crate::domain::Record;

/// A static key → auxiliary-fields mapping used by one enrichment concern
/// (reservations, price bands, contact info, geo coordinates).
///
/// `columns` fixes the order in which auxiliary fields are written into a
/// record. Matching is exact on `key_field`; a key that is absent from
/// `entries` takes the declared defaults, never an error.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LookupTable {
    pub table_id: String,
    pub key_field: String,
    pub columns: Vec<String>,
    #[serde(default)]
    pub defaults: HashMap<String, String>,
    pub entries: HashMap<String, HashMap<String, String>>,
}

impl LookupTable {
    /// Copy this table's auxiliary columns into an enriched copy of the
    /// record. Column resolution order: matched entry value, then table
    /// default, then empty string.
    pub fn apply(&self, record: &Record) -> Record {
        let mut enriched = record.clone();
        let key = record.get(&self.key_field).unwrap_or("");
        let entry = self.entries.get(key);

        for column in &self.columns {
            let value = entry
                .and_then(|fields| fields.get(column))
                .or_else(|| self.defaults.get(column))
                .map(String::as_str)
                .unwrap_or("");
            enriched.set(column, value);
        }

        enriched
    }
}

/// All lookup tables for a city, loaded from a directory of JSON files.
#[derive(Debug, Clone)]
pub struct LookupRegistry {
    tables: HashMap<String, LookupTable>,
}

impl LookupRegistry {
    /// Load every `*.json` lookup table from the registry directory.
    pub fn load_from_directory<P: AsRef<Path>>(registry_dir: P) -> Result<Self> {
        let mut tables = HashMap::new();

        let dir_path = registry_dir.as_ref();
        if !dir_path.exists() {
            return Err(BuildError::Config {
                message: format!("lookup directory does not exist: {}", dir_path.display()),
            });
        }

        let entries = fs::read_dir(dir_path).map_err(|e| BuildError::Config {
            message: format!("failed to read lookup directory: {}", e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| BuildError::Config {
                message: format!("failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("json") {
                let content = fs::read_to_string(&path).map_err(|e| BuildError::Config {
                    message: format!("failed to read lookup table {}: {}", path.display(), e),
                })?;

                let table: LookupTable =
                    serde_json::from_str(&content).map_err(|e| BuildError::Config {
                        message: format!("failed to parse lookup table {}: {}", path.display(), e),
                    })?;

                tables.insert(table.table_id.clone(), table);
            }
        }

        Ok(Self { tables })
    }

    pub fn get(&self, table_id: &str) -> Option<&LookupTable> {
        self.tables.get(table_id)
    }

    pub fn table_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.tables.keys().cloned().collect();
        ids.sort();
        ids
    }
}
