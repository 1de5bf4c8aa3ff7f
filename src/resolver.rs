//! Precedence-ordered lookup across several lexical tables.
//!
//! Tables are consulted strictly in order. The first table that yields any
//! acceptable match wins outright; lower-precedence tables are never consulted
//! for that phrase, even if they hold a stronger match.

use crate::lexicon::LexicalTable;
use crate::matcher::{EntryMatcher, MatchKind, MatchResult};
use std::sync::Arc;
use tracing::trace;

/// Resolves phrases against an immutable, ordered table set.
#[derive(Debug, Clone)]
pub struct Resolver {
    tables: Arc<[LexicalTable]>,
    matcher: EntryMatcher,
}

impl Resolver {
    /// Create a resolver; `tables` is in precedence order, highest first.
    pub fn new(tables: impl Into<Arc<[LexicalTable]>>, matcher: EntryMatcher) -> Self {
        Self {
            tables: tables.into(),
            matcher,
        }
    }

    pub fn tables(&self) -> &[LexicalTable] {
        &self.tables
    }

    /// Token count of the longest gloss in any table.
    ///
    /// No phrase longer than this can match any gloss exactly.
    pub fn max_gloss_tokens(&self) -> usize {
        self.tables
            .iter()
            .flat_map(|t| t.entries())
            .flat_map(|e| e.glosses.iter())
            .map(|g| g.tokens.len())
            .max()
            .unwrap_or(0)
    }

    /// All matches from the first table that matches `phrase` at all.
    pub fn resolve_all(&self, phrase: &str) -> Vec<MatchResult> {
        self.resolve_all_at_least(phrase, MatchKind::Overlap)
    }

    /// Like [`resolve_all`](Self::resolve_all), ignoring matches weaker than
    /// `min_kind` before precedence is applied.
    pub fn resolve_all_at_least(&self, phrase: &str, min_kind: MatchKind) -> Vec<MatchResult> {
        for table in self.tables.iter() {
            let matches: Vec<MatchResult> = self
                .matcher
                .match_table(phrase, table)
                .into_iter()
                .filter(|m| m.match_kind.meets(min_kind))
                .collect();

            if !matches.is_empty() {
                trace!(
                    "'{}' matched {} entr(ies) in table '{}'",
                    phrase,
                    matches.len(),
                    table.name()
                );
                return matches;
            }
        }
        Vec::new()
    }

    /// Best single match for `phrase`, or `None` for an unknown phrase.
    pub fn resolve(&self, phrase: &str) -> Option<MatchResult> {
        self.resolve_at_least(phrase, MatchKind::Overlap)
    }

    /// Best single match at least as strong as `min_kind`.
    pub fn resolve_at_least(&self, phrase: &str, min_kind: MatchKind) -> Option<MatchResult> {
        // match_table output is already ranked best-first
        self.resolve_all_at_least(phrase, min_kind).into_iter().next()
    }
}
