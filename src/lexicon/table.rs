use crate::lexicon::entry::LexicalEntry;
use crate::lexicon::schema::TableSchema;
use serde_json::Value;

/// Immutable, ordered collection of entries from one data source.
#[derive(Debug, Clone)]
pub struct LexicalTable {
    name: String,
    entries: Vec<LexicalEntry>,
    skipped: usize,
}

impl LexicalTable {
    /// Build a table from entries that were already adapted.
    pub fn new(name: impl Into<String>, entries: Vec<LexicalEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
            skipped: 0,
        }
    }

    /// Adapt raw records with `schema`, skipping malformed ones.
    pub fn from_records(schema: &TableSchema, records: &[Value]) -> Self {
        let entries: Vec<LexicalEntry> = records.iter().filter_map(|r| schema.adapt(r)).collect();
        let skipped = records.len() - entries.len();

        Self {
            name: schema.name.clone(),
            entries,
            skipped,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[LexicalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of raw records dropped by the adapter.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
