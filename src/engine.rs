//! The translation engine: segmentation plus assembly over a fixed table set.
//!
//! A `Translator` is built once, after every table has been loaded, and is
//! then shared read-only between requests. Translation is synchronous,
//! in-memory work with no internal locking.

use crate::assembler::{assemble, TranslationResponse};
use crate::audio::AudioUrlDeriver;
use crate::lexicon::LexicalTable;
use crate::matcher::{EntryMatcher, MatchKind, MatchResult};
use crate::resolver::Resolver;
use crate::segmenter::Segmenter;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Precondition violations reported by the engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslateError {
    /// The sentence contained no tokens.
    #[error("sentence must contain at least one word")]
    EmptySentence,

    /// The lookup word was blank.
    #[error("word must not be empty")]
    EmptyWord,
}

/// Name and size of one loaded table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub name: String,
    pub entries: usize,
}

/// Translates sentences against an immutable, precedence-ordered table set.
#[derive(Debug, Clone)]
pub struct Translator {
    resolver: Resolver,
    segmenter: Segmenter,
}

impl Translator {
    /// Build a translator. `tables` must be fully loaded and in precedence
    /// order, highest first.
    pub fn new(
        tables: Vec<LexicalTable>,
        audio: AudioUrlDeriver,
        phrase_threshold: MatchKind,
    ) -> Self {
        Self {
            resolver: Resolver::new(tables, EntryMatcher::new(audio)),
            segmenter: Segmenter::new(phrase_threshold),
        }
    }

    /// Translate a sentence into target text, phonetics and a per-segment
    /// morphology breakdown.
    pub fn translate(&self, sentence: &str) -> Result<TranslationResponse, TranslateError> {
        if sentence.trim().is_empty() {
            return Err(TranslateError::EmptySentence);
        }

        let segments = self.segmenter.segment(sentence, &self.resolver);
        debug!("Segmented '{}' into {} segment(s)", sentence.trim(), segments.len());

        Ok(assemble(segments.into_iter().map(|s| s.result).collect()))
    }

    /// Every match the winning table holds for `word`, best first.
    pub fn lookup(&self, word: &str) -> Result<Vec<MatchResult>, TranslateError> {
        if word.trim().is_empty() {
            return Err(TranslateError::EmptyWord);
        }
        Ok(self.resolver.resolve_all(word))
    }

    /// Loaded tables in precedence order.
    pub fn table_summaries(&self) -> Vec<TableSummary> {
        self.resolver
            .tables()
            .iter()
            .map(|t| TableSummary {
                name: t.name().to_string(),
                entries: t.len(),
            })
            .collect()
    }

    pub fn phrase_threshold(&self) -> MatchKind {
        self.segmenter.phrase_threshold()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{LexicalEntry, TableSchema};
    use serde_json::json;

    // ==================== Helper Functions ====================

    fn entry(gloss: &str, target: &str, phonetic: &str) -> LexicalEntry {
        LexicalEntry::new(gloss, target, Some(phonetic.to_string()), None).expect("valid entry")
    }

    fn create_translator() -> Translator {
        let dictionary = LexicalTable::from_records(
            &TableSchema::dictionary(),
            &[
                json!({"english": "hello", "quileute_unicode": "ʔal", "pronunciation": "AL",
                       "audio_file": {"mp3": "1042.mp3"}}),
                json!({"english": "good", "quileute_unicode": "ʔáx̣", "pronunciation": "AHH"}),
                json!({"english": "good morning", "quileute_unicode": "ʔáx̣ tsʼáy",
                       "pronunciation": "AHH TSAI"}),
            ],
        );
        let normalized = LexicalTable::new(
            "normalized",
            vec![entry("hello", "should-not-win", "X"), entry("whale", "kʷalís", "KWA-LIS")],
        );
        let suffixes = LexicalTable::new("suffixes", vec![entry("in the water", "-ayaq", "AYAQ")]);

        Translator::new(
            vec![dictionary, normalized, suffixes],
            AudioUrlDeriver::new("https://quileutelanguage.com/data/audio"),
            MatchKind::Exact,
        )
    }

    // ==================== translate Tests ====================

    #[test]
    fn test_translate_single_word() {
        let response = create_translator().translate("hello").expect("Should translate");

        assert_eq!(response.target_text, "ʔal");
        assert_eq!(response.phonetic_text, "AL");
        assert_eq!(response.morphology.len(), 1);
        assert_eq!(
            response.morphology[0].audio_url.as_deref(),
            Some("https://quileutelanguage.com/data/audio/1/1042.mp3")
        );
        assert_eq!(response.morphology[0].source_table.as_deref(), Some("dictionary"));
    }

    #[test]
    fn test_translate_uses_lower_precedence_tables() {
        let response = create_translator()
            .translate("hello whale")
            .expect("Should translate");

        assert_eq!(response.target_text, "ʔal kʷalís");
        assert_eq!(response.morphology[1].source_table.as_deref(), Some("normalized"));
    }

    #[test]
    fn test_translate_prefers_phrase() {
        let response = create_translator()
            .translate("Good morning")
            .expect("Should translate");

        assert_eq!(response.morphology.len(), 1);
        assert_eq!(response.target_text, "ʔáx̣ tsʼáy");
        assert_eq!(response.phonetic_text, "AHH TSAI");
    }

    #[test]
    fn test_translate_suffix_phrase() {
        let response = create_translator()
            .translate("whale in the water")
            .expect("Should translate");

        assert_eq!(response.target_text, "kʷalís -ayaq");
        assert_eq!(response.morphology[1].source_table.as_deref(), Some("suffixes"));
    }

    #[test]
    fn test_translate_unknown_word() {
        let response = create_translator().translate("xyz").expect("Should translate");

        assert_eq!(response.target_text, "[hypothetical]");
        assert_eq!(response.phonetic_text, "[unknown]");
        assert_eq!(response.morphology[0].source_text, "xyz");
        assert!(response.morphology[0].audio_url.is_none());
    }

    #[test]
    fn test_translate_rejects_blank_sentence() {
        let translator = create_translator();
        assert_eq!(translator.translate(""), Err(TranslateError::EmptySentence));
        assert_eq!(translator.translate("  \n "), Err(TranslateError::EmptySentence));
    }

    // ==================== lookup Tests ====================

    #[test]
    fn test_lookup_returns_winning_table_matches() {
        let matches = create_translator().lookup("good").expect("Should look up");

        let targets: Vec<_> = matches.iter().map(|m| m.target_form.as_str()).collect();
        assert_eq!(targets, vec!["ʔáx̣", "ʔáx̣ tsʼáy"]);
        assert_eq!(matches[0].match_kind, MatchKind::Exact);
        assert_eq!(matches[1].match_kind, MatchKind::Partial);
    }

    #[test]
    fn test_lookup_rejects_blank_word() {
        assert_eq!(create_translator().lookup(" "), Err(TranslateError::EmptyWord));
    }

    // ==================== table_summaries Tests ====================

    #[test]
    fn test_table_summaries_in_precedence_order() {
        let summaries = create_translator().table_summaries();
        assert_eq!(
            summaries,
            vec![
                TableSummary { name: "dictionary".to_string(), entries: 3 },
                TableSummary { name: "normalized".to_string(), entries: 2 },
                TableSummary { name: "suffixes".to_string(), entries: 1 },
            ]
        );
    }
}
