use crate::domain::Record;

/// Reshapes enriched records to a uniform output shape: every record gets
/// exactly the schema's fields in schema order, missing ones filled with the
/// empty string, optionally followed by any extra fields not in the schema.
///
/// Purely structural; never drops or duplicates rows.
pub struct SchemaAssembler {
    schema: Vec<String>,
    keep_extras: bool,
}

impl SchemaAssembler {
    pub fn new(schema: Vec<String>, keep_extras: bool) -> Self {
        Self { schema, keep_extras }
    }

    pub fn assemble(&self, records: &[Record]) -> Vec<Record> {
        records.iter().map(|r| self.assemble_record(r)).collect()
    }

    fn assemble_record(&self, record: &Record) -> Record {
        let mut out = Record::new();
        for field in &self.schema {
            out.set(field, record.get(field).unwrap_or(""));
        }
        if self.keep_extras {
            for (field, value) in record.iter() {
                if !out.contains(field) {
                    out.set(field, value);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Vec<String> {
        vec!["name".to_string(), "phone".to_string(), "website".to_string()]
    }

    #[test]
    fn test_schema_conformance_without_extras() {
        let assembler = SchemaAssembler::new(schema(), false);
        let records = vec![
            Record::from_pairs([("website", "http://gemmadallas.com"), ("name", "Gemma")]),
            Record::from_pairs([("name", "Tei-An"), ("cuisine", "Soba")]),
        ];

        let assembled = assembler.assemble(&records);
        for record in &assembled {
            let fields: Vec<&str> = record.fields().collect();
            assert_eq!(fields, vec!["name", "phone", "website"]);
        }
        assert_eq!(assembled[0].get("website"), Some("http://gemmadallas.com"));
        // Missing fields are filled with empty string
        assert_eq!(assembled[0].get("phone"), Some(""));
        // Non-schema fields are dropped
        assert!(!assembled[1].contains("cuisine"));
    }

    #[test]
    fn test_extras_follow_schema_fields() {
        let assembler = SchemaAssembler::new(schema(), true);
        let record = Record::from_pairs([("cuisine", "Soba"), ("name", "Tei-An")]);

        let assembled = assembler.assemble(&[record]);
        let fields: Vec<&str> = assembled[0].fields().collect();
        assert_eq!(fields, vec!["name", "phone", "website", "cuisine"]);
        assert_eq!(assembled[0].get("cuisine"), Some("Soba"));
    }

    #[test]
    fn test_record_count_is_preserved() {
        let assembler = SchemaAssembler::new(schema(), true);
        let records: Vec<Record> = (0..7)
            .map(|i| Record::from_pairs([("name", format!("r{}", i).as_str())]))
            .collect();

        assert_eq!(assembler.assemble(&records).len(), records.len());
        assert_eq!(assembler.assemble(&[]).len(), 0);
    }
}
