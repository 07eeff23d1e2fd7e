//! Tolerant extraction of generated text from `rawPredict` response bodies.
//!
//! Serving stacks disagree on the envelope shape: some return
//! `{"predictions": ["..."]}`, some wrap the text in an object under
//! `output`/`text`/`generated_text`/`content`, some return a top-level
//! `text` field or a bare string. Strategies are tried in order and the
//! first hit wins; an unrecognized body is stringified rather than rejected.

use serde_json::Value;

type Extractor = fn(&Value) -> Option<String>;

/// Order matters: prediction-array forms first, then top-level forms.
const EXTRACTORS: &[Extractor] = &[
    first_prediction_string,
    first_prediction_field,
    first_prediction_stringified,
    top_level_text,
    bare_string_body,
];

/// Pull the generated text out of a response body, whatever its shape.
pub fn extract_generated_text(body: &Value) -> String {
    for extract in EXTRACTORS {
        if let Some(text) = extract(body) {
            return text;
        }
    }
    body.to_string()
}

fn first_prediction(body: &Value) -> Option<&Value> {
    body.get("predictions")?.as_array()?.first()
}

fn first_prediction_string(body: &Value) -> Option<String> {
    first_prediction(body)?.as_str().map(str::to_string)
}

/// Object predictions carry the text under one of several field names.
/// Empty strings are skipped so a hollow `output` does not mask `text`;
/// an object with no usable field is stringified wholesale.
fn first_prediction_field(body: &Value) -> Option<String> {
    let pred = first_prediction(body)?;
    if !pred.is_object() {
        return None;
    }
    for field in ["output", "text", "generated_text", "content"] {
        if let Some(s) = pred.get(field).and_then(Value::as_str) {
            if !s.is_empty() {
                return Some(s.to_string());
            }
        }
    }
    Some(pred.to_string())
}

fn first_prediction_stringified(body: &Value) -> Option<String> {
    let pred = first_prediction(body)?;
    Some(match pred {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

fn top_level_text(body: &Value) -> Option<String> {
    let s = body.get("text")?.as_str()?;
    if s.is_empty() {
        return None;
    }
    Some(s.to_string())
}

fn bare_string_body(body: &Value) -> Option<String> {
    body.as_str().map(str::to_string)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_string_prediction() {
        let body = json!({"predictions": ["(B)"]});
        assert_eq!(extract_generated_text(&body), "(B)");
    }

    #[test]
    fn test_object_prediction_field_order() {
        let body = json!({"predictions": [{"output": "from output", "text": "from text"}]});
        assert_eq!(extract_generated_text(&body), "from output");

        let body = json!({"predictions": [{"text": "from text"}]});
        assert_eq!(extract_generated_text(&body), "from text");

        let body = json!({"predictions": [{"generated_text": "g"}]});
        assert_eq!(extract_generated_text(&body), "g");

        let body = json!({"predictions": [{"content": "c"}]});
        assert_eq!(extract_generated_text(&body), "c");
    }

    #[test]
    fn test_empty_field_falls_through_to_next() {
        let body = json!({"predictions": [{"output": "", "text": "answer"}]});
        assert_eq!(extract_generated_text(&body), "answer");
    }

    #[test]
    fn test_object_with_no_known_field_is_stringified() {
        let body = json!({"predictions": [{"tokens": 3}]});
        assert_eq!(extract_generated_text(&body), r#"{"tokens":3}"#);
    }

    #[test]
    fn test_scalar_prediction_is_stringified() {
        let body = json!({"predictions": [500]});
        assert_eq!(extract_generated_text(&body), "500");
    }

    #[test]
    fn test_empty_predictions_falls_back_to_top_level_text() {
        let body = json!({"predictions": [], "text": "top"});
        assert_eq!(extract_generated_text(&body), "top");
    }

    #[test]
    fn test_bare_string_body() {
        let body = json!("just text");
        assert_eq!(extract_generated_text(&body), "just text");
    }

    #[test]
    fn test_unrecognized_body_is_stringified() {
        let body = json!({"weird": true});
        assert_eq!(extract_generated_text(&body), r#"{"weird":true}"#);
    }
}
