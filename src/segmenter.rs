//! Greedy longest-match segmentation of a sentence into lexical units.
//!
//! At each position the segmenter tries the longest remaining run of tokens
//! first and shrinks it one token at a time until the resolver accepts a
//! candidate. A token nothing matches becomes a hypothetical segment.
//!
//! The search never backtracks: an early multi-word match can prevent a
//! better segmentation further along. That trade-off is intentional; the
//! output is deterministic and the work is bounded by `n` rounds.

use crate::lexicon::tokenize;
use crate::matcher::{MatchKind, MatchResult};
use crate::resolver::Resolver;
use std::ops::Range;
use tracing::debug;

/// A resolved span of input tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Token indices `[start, end)` covered by this segment
    pub span: Range<usize>,

    pub result: MatchResult,
}

/// Greedy longest-match segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segmenter {
    /// Weakest match kind accepted for a multi-token candidate
    phrase_threshold: MatchKind,
}

impl Segmenter {
    pub fn new(phrase_threshold: MatchKind) -> Self {
        Self { phrase_threshold }
    }

    pub fn phrase_threshold(&self) -> MatchKind {
        self.phrase_threshold
    }

    /// Split `sentence` on whitespace and resolve it into segments.
    ///
    /// The returned spans partition `0..n` in order, where `n` is the number
    /// of whitespace-separated tokens.
    pub fn segment(&self, sentence: &str, resolver: &Resolver) -> Vec<Segment> {
        let tokens: Vec<&str> = sentence.split_whitespace().collect();
        let n = tokens.len();

        // Normalized token counts, prefix-summed. Punctuation-only input
        // tokens contribute nothing, so span length and normalized length
        // can differ.
        let mut weight = Vec::with_capacity(n + 1);
        let mut total = 0;
        weight.push(total);
        for token in &tokens {
            total += tokenize(token).len();
            weight.push(total);
        }

        // Longer candidates can only ever match partially or by overlap
        let max_gloss = if self.phrase_threshold == MatchKind::Exact {
            Some(resolver.max_gloss_tokens())
        } else {
            None
        };

        let mut segments = Vec::new();
        let mut i = 0;
        while i < n {
            let found = (i + 1..=n).rev().find_map(|j| {
                let multi = j - i > 1;
                if multi && max_gloss.is_some_and(|max| weight[j] - weight[i] > max) {
                    return None;
                }
                let threshold = if multi {
                    self.phrase_threshold
                } else {
                    MatchKind::Overlap
                };
                let candidate = tokens[i..j].join(" ");
                resolver
                    .resolve_at_least(&candidate, threshold)
                    .map(|result| (j, result))
            });

            match found {
                Some((j, result)) => {
                    debug!(
                        "Segment '{}' resolved via {} match in '{}'",
                        tokens[i..j].join(" "),
                        result.match_kind,
                        result.source_table.as_deref().unwrap_or("?")
                    );
                    segments.push(Segment { span: i..j, result });
                    i = j;
                }
                None => {
                    debug!("No match for '{}', marking hypothetical", tokens[i]);
                    segments.push(Segment {
                        span: i..i + 1,
                        result: MatchResult::hypothetical(tokens[i]),
                    });
                    i += 1;
                }
            }
        }

        segments
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(MatchKind::Exact)
    }
}
