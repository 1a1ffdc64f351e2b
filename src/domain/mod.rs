use serde::{Deserialize, Serialize};

/// One row of scraped or enriched data: restaurant, cause, or creator.
///
/// Fields are kept in insertion order so that the persisted column order is
/// deterministic. `set` overwrites in place when the field already exists;
/// no field is ever removed once set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Self::new();
        for (field, value) in pairs {
            record.set(&field.into(), &value.into());
        }
        record
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Set a field value, overwriting in place if the field exists and
    /// appending otherwise.
    pub fn set(&mut self, field: &str, value: &str) {
        match self.fields.iter_mut().find(|(name, _)| name == field) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.fields.push((field.to_string(), value.to_string())),
        }
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == field)
    }

    /// Field names in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// (field, value) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The three datasets the collection project produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    Restaurants,
    Causes,
    Creators,
}

impl DatasetKind {
    pub fn id(&self) -> &'static str {
        match self {
            DatasetKind::Restaurants => "restaurants",
            DatasetKind::Causes => "causes",
            DatasetKind::Creators => "creators",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "restaurants" => Some(DatasetKind::Restaurants),
            "causes" => Some(DatasetKind::Causes),
            "creators" => Some(DatasetKind::Creators),
            _ => None,
        }
    }

    pub fn all() -> [DatasetKind; 3] {
        [
            DatasetKind::Restaurants,
            DatasetKind::Causes,
            DatasetKind::Creators,
        ]
    }
}
