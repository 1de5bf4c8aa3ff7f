//! Uniform lexical entry produced by the per-table adapters.
//!
//! Every data source is converted into `LexicalEntry` values at load time, so
//! nothing downstream of the loader ever looks at source-specific field names.

use unicode_normalization::UnicodeNormalization;

/// Placeholder used when an entry carries no phonetic transcription.
pub const UNKNOWN_PHONETIC: &str = "[unknown]";

/// Normalize free text into comparable tokens.
///
/// Applies NFC composition, Unicode case folding, drops every character that
/// is not alphanumeric or whitespace, then splits on whitespace. Candidates
/// and glosses from every table go through this same function.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut cleaned = String::with_capacity(text.len());
    for c in text.trim().nfc().flat_map(char::to_lowercase) {
        match c {
            // Full folding expands these where lower-casing leaves them alone
            'ß' => cleaned.push_str("ss"),
            'ς' => cleaned.push('σ'),
            c if c.is_alphanumeric() || c.is_whitespace() => cleaned.push(c),
            _ => {}
        }
    }

    cleaned.split_whitespace().map(str::to_string).collect()
}

/// One synonym of an entry, with its tokens precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gloss {
    /// Gloss as written in the source data (trimmed)
    pub text: String,

    /// Normalized tokens, never empty
    pub tokens: Vec<String>,
}

impl Gloss {
    /// Build a gloss, returning `None` when it normalizes to nothing.
    pub fn new(text: &str) -> Option<Self> {
        let text = text.trim();
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            tokens,
        })
    }
}

/// Immutable record mapping source-language glosses to a target form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalEntry {
    /// The full gloss field as stored in the data (may list several synonyms)
    pub source_text: String,

    /// Comma-separated synonyms, each tokenized
    pub glosses: Vec<Gloss>,

    /// Form in the target script
    pub target_form: String,

    /// Phonetic transcription, `[unknown]` when the source had none
    pub phonetic_form: String,

    /// Audio file identifier such as `1042.mp3`
    pub audio_file_id: Option<String>,
}

impl LexicalEntry {
    /// Build an entry from an already-extracted gloss string.
    ///
    /// Returns `None` if no synonym survives normalization.
    pub fn new(
        source_text: &str,
        target_form: impl Into<String>,
        phonetic_form: Option<String>,
        audio_file_id: Option<String>,
    ) -> Option<Self> {
        let glosses: Vec<Gloss> = source_text.split(',').filter_map(Gloss::new).collect();
        if glosses.is_empty() {
            return None;
        }

        Some(Self {
            source_text: source_text.trim().to_string(),
            glosses,
            target_form: target_form.into(),
            phonetic_form: phonetic_form
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_PHONETIC.to_string()),
            audio_file_id: audio_file_id
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== tokenize Tests ====================

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(tokenize("  Good   Morning "), vec!["good", "morning"]);
    }

    #[test]
    fn test_tokenize_strips_punctuation() {
        assert_eq!(tokenize("hello, world!"), vec!["hello", "world"]);
        assert_eq!(tokenize("don't"), vec!["dont"]);
        assert_eq!(tokenize("(to) run"), vec!["to", "run"]);
    }

    #[test]
    fn test_tokenize_keeps_digits() {
        assert_eq!(tokenize("2 dogs"), vec!["2", "dogs"]);
    }

    #[test]
    fn test_tokenize_unicode_lowercase() {
        assert_eq!(tokenize("ÉTÉ"), vec!["été"]);
    }

    #[test]
    fn test_tokenize_folds_case_beyond_lowercase() {
        assert_eq!(tokenize("STRASSE"), tokenize("straße"));
        assert_eq!(tokenize("Straẞe"), vec!["strasse"]);
        assert_eq!(tokenize("ΛΟΓΟΣ"), tokenize("λογος"));
    }

    #[test]
    fn test_tokenize_composes_decomposed_forms() {
        // "e" followed by a combining acute accent
        let decomposed = "cafe\u{301}";
        assert_eq!(tokenize(decomposed), tokenize("café"));
    }

    #[test]
    fn test_tokenize_punctuation_only_is_empty() {
        assert!(tokenize("?!...").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    // ==================== LexicalEntry Tests ====================

    #[test]
    fn test_entry_splits_synonyms() {
        let entry = LexicalEntry::new("run, sprint", "x", None, None).expect("valid entry");
        assert_eq!(entry.glosses.len(), 2);
        assert_eq!(entry.glosses[0].text, "run");
        assert_eq!(entry.glosses[1].text, "sprint");
        assert_eq!(entry.source_text, "run, sprint");
    }

    #[test]
    fn test_entry_drops_empty_synonyms() {
        let entry = LexicalEntry::new("run,, ,", "x", None, None).expect("valid entry");
        assert_eq!(entry.glosses.len(), 1);
    }

    #[test]
    fn test_entry_without_tokens_is_rejected() {
        assert!(LexicalEntry::new(" , ;", "x", None, None).is_none());
        assert!(LexicalEntry::new("", "x", None, None).is_none());
    }

    #[test]
    fn test_entry_phonetic_default() {
        let entry = LexicalEntry::new("hello", "ʔal", None, None).expect("valid entry");
        assert_eq!(entry.phonetic_form, UNKNOWN_PHONETIC);

        let entry =
            LexicalEntry::new("hello", "ʔal", Some("  ".to_string()), None).expect("valid entry");
        assert_eq!(entry.phonetic_form, UNKNOWN_PHONETIC);
    }

    #[test]
    fn test_entry_blank_audio_is_absent() {
        let entry = LexicalEntry::new("hello", "ʔal", None, Some(" ".to_string()))
            .expect("valid entry");
        assert!(entry.audio_file_id.is_none());
    }
}
