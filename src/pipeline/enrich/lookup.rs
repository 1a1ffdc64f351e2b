use crate::domain::Record;
use crate::registry::LookupTable;

use super::Enricher;

/// Enricher backed by a static lookup table: reservation platforms, price
/// bands, contact info, geo coordinates. All the default-policy and
/// column-order behavior lives in `LookupTable::apply`.
pub struct LookupEnricher {
    table: LookupTable,
}

impl LookupEnricher {
    pub fn new(table: LookupTable) -> Self {
        Self { table }
    }
}

impl Enricher for LookupEnricher {
    fn enrich(&self, record: &Record) -> Record {
        self.table.apply(record)
    }

    fn name(&self) -> &str {
        &self.table.table_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn price_band_table() -> LookupTable {
        LookupTable {
            table_id: "price_bands".to_string(),
            key_field: "price".to_string(),
            columns: vec!["price_band".to_string(), "avg_check_estimate".to_string()],
            defaults: HashMap::from([
                ("price_band".to_string(), "$$$ (Upscale)".to_string()),
                ("avg_check_estimate".to_string(), "75-150".to_string()),
            ]),
            entries: HashMap::from([
                (
                    "$$$".to_string(),
                    HashMap::from([
                        ("price_band".to_string(), "$$$ (Upscale)".to_string()),
                        ("avg_check_estimate".to_string(), "75-150".to_string()),
                    ]),
                ),
                (
                    "$$$$".to_string(),
                    HashMap::from([
                        ("price_band".to_string(), "$$$$ (Fine Dining)".to_string()),
                        ("avg_check_estimate".to_string(), "100-200".to_string()),
                    ]),
                ),
            ]),
        }
    }

    #[test]
    fn test_price_band_hit() {
        let enricher = LookupEnricher::new(price_band_table());
        let record = Record::from_pairs([("name", "Gemma"), ("price", "$$$")]);

        let enriched = enricher.enrich(&record);
        assert_eq!(enriched.get("price_band"), Some("$$$ (Upscale)"));
        assert_eq!(enriched.get("avg_check_estimate"), Some("75-150"));
    }

    #[test]
    fn test_price_band_miss_takes_defaults() {
        let enricher = LookupEnricher::new(price_band_table());
        let record = Record::from_pairs([("name", "Unknown Place"), ("price", "$$")]);

        let enriched = enricher.enrich(&record);
        assert_eq!(enriched.get("price_band"), Some("$$$ (Upscale)"));
        assert_eq!(enriched.get("avg_check_estimate"), Some("75-150"));
    }

    #[test]
    fn test_enricher_name_is_table_id() {
        let enricher = LookupEnricher::new(price_band_table());
        assert_eq!(enricher.name(), "price_bands");
    }
}
