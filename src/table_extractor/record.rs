//! Output records and their serialisable groupings
//!
//! A `RowRecord` is an ordered header-to-value mapping. It serialises as a
//! map in header order; turning that into JSON text is left to the caller's
//! serializer.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Rows extracted from one table, in document order
pub type TableRecords = Vec<RowRecord>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowRecord {
    fields: Vec<(String, String)>,
}

impl RowRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `header` to `value`.
    ///
    /// A repeated header keeps its first position and takes the new value.
    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<String>) {
        let header = header.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == header) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((header, value)),
        }
    }

    #[must_use]
    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == header)
            .map(|(_, value)| value.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RowRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (header, value) in iter {
            record.insert(header, value);
        }
        record
    }
}

impl IntoIterator for RowRecord {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl Serialize for RowRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Tables keyed `table1`, `table2`, ... under a `tables` object
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct GroupedTables {
    tables: NumberedTables,
}

#[derive(Debug, Clone, Default)]
struct NumberedTables(Vec<TableRecords>);

impl Serialize for NumberedTables {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (index, table) in self.0.iter().enumerate() {
            map.serialize_entry(&format!("table{}", index + 1), table)?;
        }
        map.end()
    }
}

impl GroupedTables {
    #[must_use]
    pub fn new(tables: Vec<TableRecords>) -> Self {
        Self {
            tables: NumberedTables(tables),
        }
    }

    #[must_use]
    pub fn tables(&self) -> &[TableRecords] {
        &self.tables.0
    }
}

/// Rows of every table concatenated under a single `table` array
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct UngroupedTables {
    table: Vec<RowRecord>,
}

impl UngroupedTables {
    #[must_use]
    pub fn new(tables: Vec<TableRecords>) -> Self {
        Self {
            table: tables.into_iter().flatten().collect(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[RowRecord] {
        &self.table
    }
}
