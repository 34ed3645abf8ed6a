//! Success-body parsing with flexible field names.
//!
//! The backend has shipped the answer under different names over time;
//! candidates are probed in order and the first usable one wins. An empty
//! string does not count as present.

use medchat_domain::{AnswerResult, Source};
use serde_json::Value;

/// Shown when a success response carries no usable answer text.
pub const MISSING_ANSWER_TEXT: &str = "Mi dispiace, non ho potuto generare una risposta.";

const ANSWER_FIELDS: [&str; 3] = ["answer", "response", "text"];
const SOURCE_FIELDS: [&str; 2] = ["sources", "references"];

/// Extract an [`AnswerResult`] from a parsed success body.
pub fn parse_answer(body: &Value) -> AnswerResult {
    let text = ANSWER_FIELDS
        .iter()
        .find_map(|field| non_empty_str(body, field))
        .unwrap_or(MISSING_ANSWER_TEXT);

    let sources = SOURCE_FIELDS
        .iter()
        .find_map(|field| body.get(field).and_then(Value::as_array))
        .map(|items| items.iter().map(parse_source).collect())
        .unwrap_or_default();

    AnswerResult::new(text, sources)
}

fn parse_source(item: &Value) -> Source {
    Source {
        title: non_empty_str(item, "title").map(str::to_string),
        url: non_empty_str(item, "url").map(str::to_string),
    }
}

fn non_empty_str<'a>(value: &'a Value, field: &str) -> Option<&'a str> {
    value
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_answer_field_aliases_in_order() {
        let body = json!({"answer": "a"});
        assert_eq!(parse_answer(&body).text, "a");

        let body = json!({"response": "b"});
        assert_eq!(parse_answer(&body).text, "b");

        let body = json!({"text": "c"});
        assert_eq!(parse_answer(&body).text, "c");

        // First candidate wins when several are present
        let body = json!({"text": "c", "answer": "a", "response": "b"});
        assert_eq!(parse_answer(&body).text, "a");
    }

    #[test]
    fn test_empty_answer_falls_through_to_next_candidate() {
        let body = json!({"answer": "", "response": "b"});
        assert_eq!(parse_answer(&body).text, "b");

        let body = json!({"answer": null, "response": "b"});
        assert_eq!(parse_answer(&body).text, "b");
    }

    #[test]
    fn test_missing_answer_uses_fallback_text() {
        let result = parse_answer(&json!({}));
        assert_eq!(result.text, MISSING_ANSWER_TEXT);
        assert!(result.sources.is_empty());
    }

    #[test]
    fn test_sources_and_references_aliases() {
        let body = json!({
            "answer": "a",
            "sources": [{"title": "WHO", "url": "https://x"}]
        });
        let result = parse_answer(&body);
        assert_eq!(result.sources.len(), 1);
        assert_eq!(result.sources[0].label(), "WHO");
        assert_eq!(result.sources[0].href(), "https://x");

        let body = json!({
            "answer": "a",
            "references": [{"url": "https://y"}]
        });
        let result = parse_answer(&body);
        assert_eq!(result.sources.len(), 1);
        assert_eq!(result.sources[0].label(), "https://y");
    }

    #[test]
    fn test_empty_sources_array_does_not_fall_through() {
        // An empty `sources` array is still "present"
        let body = json!({
            "answer": "a",
            "sources": [],
            "references": [{"url": "https://y"}]
        });
        assert!(parse_answer(&body).sources.is_empty());
    }

    #[test]
    fn test_junk_source_entries_become_fallback_links() {
        let body = json!({"answer": "a", "sources": [42, {"extra": true}]});
        let result = parse_answer(&body);
        assert_eq!(result.sources.len(), 2);
        for source in &result.sources {
            assert_eq!(source.label(), "Fonte");
            assert_eq!(source.href(), "#");
        }
    }
}
