use crate::audio::DEFAULT_AUDIO_BASE_URL;
use crate::lexicon::TableSchema;
use crate::matcher::MatchKind;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

const DEFAULT_ALLOWED_ORIGINS: &str =
    "http://localhost,http://localhost:8000,https://quileutelanguage.com";

#[derive(Debug, Clone)]
pub struct Config {
    // Data files
    pub dictionary_path: String,
    pub normalized_path: String,
    pub suffixes_path: String,

    // Resolution
    pub table_precedence: Vec<String>,
    pub phrase_match_kind: MatchKind,
    pub audio_base_url: String,

    // Server
    pub allowed_origins: Vec<String>,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            // Data files
            dictionary_path: std::env::var("DICTIONARY_PATH")
                .unwrap_or_else(|_| "QuilDict_Unicode.json".to_string()),
            normalized_path: std::env::var("NORMALIZED_PATH")
                .unwrap_or_else(|_| "normalized_quileute_dataset.json".to_string()),
            suffixes_path: std::env::var("SUFFIXES_PATH")
                .unwrap_or_else(|_| "quileute_lexical_suffixes_expanded.json".to_string()),

            // Resolution
            table_precedence: split_list(
                &std::env::var("TABLE_PRECEDENCE")
                    .unwrap_or_else(|_| TableSchema::preset_names().join(",")),
            ),
            phrase_match_kind: match std::env::var("PHRASE_MATCH_KIND") {
                Ok(value) => value
                    .parse::<MatchKind>()
                    .map_err(anyhow::Error::msg)
                    .context("Invalid PHRASE_MATCH_KIND")?,
                Err(_) => MatchKind::Exact,
            },
            audio_base_url: std::env::var("AUDIO_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_AUDIO_BASE_URL.to_string()),

            // Server
            allowed_origins: split_list(
                &std::env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string()),
            ),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.table_precedence.is_empty() {
            bail!("TABLE_PRECEDENCE must name at least one table");
        }
        if self.phrase_match_kind == MatchKind::None {
            bail!("PHRASE_MATCH_KIND must be one of exact, partial, overlap");
        }
        self.table_sources().map(|_| ())
    }

    /// Schemas and file paths of the configured tables, in precedence order.
    pub fn table_sources(&self) -> Result<Vec<(TableSchema, PathBuf)>> {
        let mut sources: Vec<(TableSchema, PathBuf)> = Vec::new();

        for name in &self.table_precedence {
            let schema = TableSchema::preset(name).with_context(|| {
                format!(
                    "Unknown table '{}' in TABLE_PRECEDENCE (expected one of: {})",
                    name,
                    TableSchema::preset_names().join(", ")
                )
            })?;

            if sources.iter().any(|(s, _)| s.name == schema.name) {
                bail!("Table '{}' listed more than once in TABLE_PRECEDENCE", schema.name);
            }

            let path = match schema.name.as_str() {
                "dictionary" => &self.dictionary_path,
                "normalized" => &self.normalized_path,
                _ => &self.suffixes_path,
            };
            sources.push((schema, PathBuf::from(path)));
        }

        Ok(sources)
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
