use crate::matcher::MatchResult;
use serde::Serialize;

/// Aggregate translation of one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationResponse {
    /// Space-joined target forms of all segments
    #[serde(rename = "quileute_unicode")]
    pub target_text: String,

    /// Space-joined phonetic forms of all segments
    #[serde(rename = "phonetic")]
    pub phonetic_text: String,

    /// Per-segment breakdown, in input order
    pub morphology: Vec<MatchResult>,
}

impl TranslationResponse {
    /// Number of segments no table could resolve.
    pub fn hypothetical_count(&self) -> usize {
        self.morphology.iter().filter(|m| m.is_hypothetical()).count()
    }
}

/// Join per-segment results into a response.
///
/// Empty input produces empty strings and no morphology; rejecting blank
/// sentences is the caller's job.
pub fn assemble(segments: Vec<MatchResult>) -> TranslationResponse {
    let target_text = segments
        .iter()
        .map(|m| m.target_form.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let phonetic_text = segments
        .iter()
        .map(|m| m.phonetic_form.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    TranslationResponse {
        target_text,
        phonetic_text,
        morphology: segments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::MatchKind;
    use serde_json::json;

    fn result(english: &str, target: &str, phonetic: &str, audio: Option<&str>) -> MatchResult {
        MatchResult {
            source_text: english.to_string(),
            target_form: target.to_string(),
            phonetic_form: phonetic.to_string(),
            audio_url: audio.map(str::to_string),
            match_kind: MatchKind::Exact,
            source_table: Some("dictionary".to_string()),
        }
    }

    #[test]
    fn test_assemble_joins_in_order() {
        let response = assemble(vec![
            result("hello", "ʔal", "AL", None),
            result("dog", "kʷaʔ", "KWA", Some("http://a/1/1042.mp3")),
            MatchResult::hypothetical("xyz"),
        ]);

        assert_eq!(response.target_text, "ʔal kʷaʔ [hypothetical]");
        assert_eq!(response.phonetic_text, "AL KWA [unknown]");
        assert_eq!(response.morphology.len(), 3);
        assert_eq!(response.morphology[1].source_text, "dog");
        assert_eq!(response.hypothetical_count(), 1);
    }

    #[test]
    fn test_assemble_empty() {
        let response = assemble(Vec::new());
        assert_eq!(response.target_text, "");
        assert_eq!(response.phonetic_text, "");
        assert!(response.morphology.is_empty());
    }

    #[test]
    fn test_response_serialization() {
        let response = assemble(vec![result("hello", "ʔal", "AL", None)]);

        let value = serde_json::to_value(&response).expect("Should serialize");
        assert_eq!(
            value,
            json!({
                "quileute_unicode": "ʔal",
                "phonetic": "AL",
                "morphology": [
                    {"english": "hello", "quileute": "ʔal", "phonetic": "AL", "audio": null}
                ]
            })
        );
    }
}
