//! Lexical data: uniform entries, per-source schemas and table loading.
//!
//! # Architecture
//!
//! - `entry`: `LexicalEntry` and the shared text normalization
//! - `schema`: field layouts for each data source and the record adapter
//! - `table`: immutable `LexicalTable`
//! - `loader`: reads JSON files into tables at startup

mod entry;
mod loader;
mod schema;
mod table;

pub use entry::{tokenize, Gloss, LexicalEntry, UNKNOWN_PHONETIC};
pub use loader::{load_table, load_tables, parse_table, LexiconError, LexiconResult};
pub use schema::TableSchema;
pub use table::LexicalTable;
