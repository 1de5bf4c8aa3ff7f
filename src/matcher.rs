//! Entry matching and match-quality classification.
//!
//! A candidate phrase is compared against every gloss of every entry in a
//! table. Both sides are reduced to tokens with [`tokenize`], then classified
//! as `exact` (same token sequence), `partial` (one token set contains the
//! other) or `overlap` (the sets share a token).

use crate::audio::AudioUrlDeriver;
use crate::lexicon::{tokenize, LexicalEntry, LexicalTable, UNKNOWN_PHONETIC};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Target form reported for segments no table could resolve.
pub const HYPOTHETICAL_TARGET: &str = "[hypothetical]";

/// Strength of a match, strongest first.
///
/// The derived ordering ranks `Exact < Partial < Overlap < None`, so sorting
/// ascending puts the best matches first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Partial,
    Overlap,
    /// No table matched; used for hypothetical segments only
    None,
}

impl MatchKind {
    /// Whether this kind is at least as strong as `threshold`.
    pub fn meets(self, threshold: MatchKind) -> bool {
        self <= threshold
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Partial => "partial",
            MatchKind::Overlap => "overlap",
            MatchKind::None => "none",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exact" => Ok(MatchKind::Exact),
            "partial" => Ok(MatchKind::Partial),
            "overlap" => Ok(MatchKind::Overlap),
            "none" => Ok(MatchKind::None),
            other => Err(format!("Unknown match kind: '{}'", other)),
        }
    }
}

/// One resolved (or hypothetical) segment.
///
/// Serializes to the morphology item shape:
/// `{"english", "quileute", "phonetic", "audio"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    #[serde(rename = "english")]
    pub source_text: String,

    #[serde(rename = "quileute")]
    pub target_form: String,

    #[serde(rename = "phonetic")]
    pub phonetic_form: String,

    #[serde(rename = "audio")]
    pub audio_url: Option<String>,

    #[serde(skip)]
    pub match_kind: MatchKind,

    /// Name of the table the entry came from; `None` for hypothetical segments
    #[serde(skip)]
    pub source_table: Option<String>,
}

impl MatchResult {
    /// Fallback result for a token no table could resolve.
    pub fn hypothetical(token: &str) -> Self {
        Self {
            source_text: token.to_string(),
            target_form: HYPOTHETICAL_TARGET.to_string(),
            phonetic_form: UNKNOWN_PHONETIC.to_string(),
            audio_url: None,
            match_kind: MatchKind::None,
            source_table: None,
        }
    }

    pub fn is_hypothetical(&self) -> bool {
        self.match_kind == MatchKind::None
    }
}

/// Classify how a candidate token sequence relates to a gloss.
pub fn classify(candidate: &[String], gloss: &[String]) -> Option<MatchKind> {
    if candidate.is_empty() || gloss.is_empty() {
        return None;
    }
    if candidate == gloss {
        return Some(MatchKind::Exact);
    }

    let candidate_set: HashSet<&str> = candidate.iter().map(String::as_str).collect();
    let gloss_set: HashSet<&str> = gloss.iter().map(String::as_str).collect();

    if candidate_set.is_subset(&gloss_set) || gloss_set.is_subset(&candidate_set) {
        Some(MatchKind::Partial)
    } else if !candidate_set.is_disjoint(&gloss_set) {
        Some(MatchKind::Overlap)
    } else {
        None
    }
}

/// Matches candidate phrases against a single table.
#[derive(Debug, Clone, Default)]
pub struct EntryMatcher {
    audio: AudioUrlDeriver,
}

impl EntryMatcher {
    pub fn new(audio: AudioUrlDeriver) -> Self {
        Self { audio }
    }

    /// All entries of `table` matching `candidate`, best kinds first.
    ///
    /// An entry contributes one result per distinct match kind among its
    /// glosses. Ties keep table order.
    pub fn match_table(&self, candidate: &str, table: &LexicalTable) -> Vec<MatchResult> {
        let tokens = tokenize(candidate);
        if tokens.is_empty() {
            return Vec::new();
        }

        let mut results = Vec::new();
        for entry in table.entries() {
            let mut kinds: Vec<MatchKind> = entry
                .glosses
                .iter()
                .filter_map(|gloss| classify(&tokens, &gloss.tokens))
                .collect();
            kinds.sort();
            kinds.dedup();

            for kind in kinds {
                results.push(self.to_result(entry, kind, table.name()));
            }
        }

        // stable: equal kinds stay in table order
        results.sort_by_key(|r| r.match_kind);
        results
    }

    fn to_result(&self, entry: &LexicalEntry, kind: MatchKind, table: &str) -> MatchResult {
        MatchResult {
            source_text: entry.source_text.clone(),
            target_form: entry.target_form.clone(),
            phonetic_form: entry.phonetic_form.clone(),
            audio_url: self.audio.derive(entry.audio_file_id.as_deref()),
            match_kind: kind,
            source_table: Some(table.to_string()),
        }
    }
}
