//! Reads lexical tables from JSON files on disk.
//!
//! Loading happens once at startup. Any failure here is fatal for the process:
//! the service never starts serving against a partially loaded table set.

use crate::lexicon::schema::TableSchema;
use crate::lexicon::table::LexicalTable;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while loading a lexical table.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The data file could not be read.
    #[error("Failed to read table '{table}' from {path}: {source}")]
    Io {
        table: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not valid JSON.
    #[error("Invalid JSON in table '{table}' ({path}): {source}")]
    Json {
        table: String,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The top-level JSON value is not an array of records.
    #[error("Table '{table}' ({path}) must be a JSON array, found {found}")]
    NotAnArray {
        table: String,
        path: PathBuf,
        found: &'static str,
    },
}

/// Result type for table loading.
pub type LexiconResult<T> = Result<T, LexiconError>;

/// Parse a JSON document into a table using `schema`.
pub fn parse_table(
    schema: &TableSchema,
    path: &Path,
    contents: &str,
) -> LexiconResult<LexicalTable> {
    let document: Value = serde_json::from_str(contents).map_err(|source| LexiconError::Json {
        table: schema.name.clone(),
        path: path.to_path_buf(),
        source,
    })?;

    let records = match &document {
        Value::Array(records) => records,
        other => {
            return Err(LexiconError::NotAnArray {
                table: schema.name.clone(),
                path: path.to_path_buf(),
                found: json_kind(other),
            })
        }
    };

    Ok(LexicalTable::from_records(schema, records))
}

/// Load a table file from disk.
pub fn load_table(schema: &TableSchema, path: &Path) -> LexiconResult<LexicalTable> {
    let contents = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
        table: schema.name.clone(),
        path: path.to_path_buf(),
        source,
    })?;

    let table = parse_table(schema, path, &contents)?;

    if table.skipped() > 0 {
        warn!(
            "Skipped {} malformed record(s) in table '{}' ({})",
            table.skipped(),
            table.name(),
            path.display()
        );
    }
    info!(
        "Loaded table '{}' with {} entries from {}",
        table.name(),
        table.len(),
        path.display()
    );

    Ok(table)
}

/// Load every `(schema, path)` pair in order, stopping at the first failure.
pub fn load_tables(sources: &[(TableSchema, PathBuf)]) -> LexiconResult<Vec<LexicalTable>> {
    sources
        .iter()
        .map(|(schema, path)| load_table(schema, path))
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
