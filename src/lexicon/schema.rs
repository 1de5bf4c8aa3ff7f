//! Per-source field layouts and the adapter that reads raw records with them.
//!
//! The data files are loosely typed JSON. Each source names its fields
//! differently, so a `TableSchema` describes where to find the gloss, target
//! form, phonetic form and audio identifier for one source.

use crate::lexicon::entry::LexicalEntry;
use serde_json::Value;

/// Field layout of one lexical data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    /// Table name reported as the match source (e.g., "dictionary")
    pub name: String,

    /// Field holding the source-language gloss(es)
    pub gloss_field: String,

    /// Candidate fields for the target form, first string wins
    pub target_fields: Vec<String>,

    /// Candidate fields for the phonetic form, first non-empty string wins
    pub phonetic_fields: Vec<String>,

    /// Dotted path to the audio identifier (e.g., "audio_file.mp3")
    pub audio_path: Option<String>,
}

impl TableSchema {
    /// Original dictionary export: `english`, `quileute_unicode`,
    /// `pronunciation` and a nested `audio_file.mp3`.
    pub fn dictionary() -> Self {
        Self {
            name: "dictionary".to_string(),
            gloss_field: "english".to_string(),
            target_fields: vec!["quileute_unicode".to_string(), "quileute".to_string()],
            phonetic_fields: vec!["pronunciation".to_string()],
            audio_path: Some("audio_file.mp3".to_string()),
        }
    }

    /// Normalized paradigm dataset: `english`, `quileute`, `phonetic`, `audio`.
    pub fn normalized() -> Self {
        Self {
            name: "normalized".to_string(),
            gloss_field: "english".to_string(),
            target_fields: vec!["quileute".to_string()],
            phonetic_fields: vec!["phonetic".to_string()],
            audio_path: Some("audio".to_string()),
        }
    }

    /// Lexical suffix dataset: `english`, `quileute`, `phonetic`, no audio.
    pub fn suffixes() -> Self {
        Self {
            name: "suffixes".to_string(),
            gloss_field: "english".to_string(),
            target_fields: vec!["quileute".to_string()],
            phonetic_fields: vec!["phonetic".to_string()],
            audio_path: None,
        }
    }

    /// Look up a built-in schema by table name.
    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "dictionary" => Some(Self::dictionary()),
            "normalized" => Some(Self::normalized()),
            "suffixes" => Some(Self::suffixes()),
            _ => None,
        }
    }

    /// Names of all built-in schemas, in default precedence order.
    pub fn preset_names() -> &'static [&'static str] {
        &["dictionary", "normalized", "suffixes"]
    }

    /// Convert one raw record into a `LexicalEntry`.
    ///
    /// Returns `None` for records that must be skipped: non-objects, missing
    /// or non-string glosses, and glosses with no usable tokens.
    pub fn adapt(&self, record: &Value) -> Option<LexicalEntry> {
        let object = record.as_object()?;
        let gloss = object.get(&self.gloss_field)?.as_str()?;

        let target = self
            .target_fields
            .iter()
            .find_map(|field| object.get(field).and_then(Value::as_str))
            .unwrap_or_default();

        let phonetic = self
            .phonetic_fields
            .iter()
            .filter_map(|field| object.get(field).and_then(Value::as_str))
            .find(|p| !p.trim().is_empty())
            .map(str::to_string);

        let audio = self
            .audio_path
            .as_deref()
            .and_then(|path| lookup_path(record, path))
            .and_then(Value::as_str)
            .map(str::to_string);

        LexicalEntry::new(gloss, target, phonetic, audio)
    }
}

/// Follow a dotted path through nested objects.
fn lookup_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, key| current.as_object()?.get(key))
}
