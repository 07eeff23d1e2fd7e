//! Tolerant decoding of raw model text into typed results.
//!
//! Decoding never fails: categorical answers degrade to the first label,
//! continuous answers degrade to a zero score, and structured-chat
//! extraction degrades to plain text. The only explicit intermediate is
//! [`LabelParse`], which keeps the "ambiguous text means label A" policy a
//! visible, testable case instead of a silent default branch.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use elionyx_common::{
    ChatReply, DesignGuidance, DesignSuggestion, Label, PredictionResult, PropertyDefinition,
    PropertyKind, StartingMolecule, Status, StructuredReply,
};

// The endpoint does not report confidences; these are fixed per answer type.
pub const CLASSIFICATION_CONFIDENCE: f64 = 0.85;
pub const REGRESSION_CONFIDENCE: f64 = 0.80;

// ── Categorical decoding ──────────────────────────────────────────────────────

/// Outcome of scanning raw text for an (A)/(B) marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelParse {
    Recognized(Label),
    Unrecognized,
}

impl LabelParse {
    /// Ambiguous or missing markers resolve to the first outcome.
    pub fn resolve(self) -> Label {
        match self {
            LabelParse::Recognized(label) => label,
            LabelParse::Unrecognized => Label::A,
        }
    }
}

/// Best-effort marker scan. A "(B)" token anywhere, or text beginning with
/// "B", selects the second outcome; the same rule then applies for "A".
pub fn parse_label(raw: &str) -> LabelParse {
    let normalized = raw.trim().to_uppercase();
    if normalized.contains("(B)") || normalized.starts_with('B') {
        LabelParse::Recognized(Label::B)
    } else if normalized.contains("(A)") || normalized.starts_with('A') {
        LabelParse::Recognized(Label::A)
    } else {
        LabelParse::Unrecognized
    }
}

fn classification_status(property: &PropertyDefinition, label: Label) -> Status {
    match property.favorable {
        Some(favorable) if label == favorable => Status::Positive,
        Some(_) => Status::Negative,
        None => Status::Neutral,
    }
}

pub fn parse_classification(raw: &str, property: &PropertyDefinition) -> PredictionResult {
    let label = parse_label(raw).resolve();
    let value = match &property.labels {
        Some(labels) => labels.phrase(label).to_string(),
        None => label.as_str().to_string(),
    };
    PredictionResult {
        property_id: property.id.to_string(),
        value,
        numeric_value: None,
        label: Some(label),
        confidence: Some(CLASSIFICATION_CONFIDENCE),
        status: classification_status(property, label),
        error: None,
    }
}

// ── Continuous decoding ───────────────────────────────────────────────────────

fn digit_run() -> &'static Regex {
    static DIGIT_RUN: OnceLock<Regex> = OnceLock::new();
    DIGIT_RUN.get_or_init(|| Regex::new(r"\d+").expect("valid digit pattern"))
}

/// First run of digits in the text as the 000-1000 normalized score; absent
/// digits count as zero.
fn normalized_score(raw: &str) -> f64 {
    digit_run()
        .find(raw)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Per-property remap from the normalized 000-1000 score to real units.
/// Properties without a formula keep the raw score.
fn rescale(property_id: &str, raw: f64) -> f64 {
    match property_id {
        "logp" => raw / 100.0 - 2.0,
        "ppbr" => raw / 10.0,
        "caco2" => raw / 200.0 - 3.0,
        "ld50" => 10f64.powf(raw / 100.0 - 1.0),
        _ => raw,
    }
}

pub fn parse_regression(raw: &str, property: &PropertyDefinition) -> PredictionResult {
    let numeric_value = rescale(property.id, normalized_score(raw));
    let value = if property.unit.is_empty() {
        format!("{numeric_value:.2}")
    } else {
        format!("{numeric_value:.2} {}", property.unit)
    };
    PredictionResult {
        property_id: property.id.to_string(),
        value,
        numeric_value: Some(numeric_value),
        label: None,
        confidence: Some(REGRESSION_CONFIDENCE),
        status: Status::Neutral,
        error: None,
    }
}

/// Decode one raw scoring answer according to the property's answer type.
pub fn parse_prediction(raw: &str, property: &PropertyDefinition) -> PredictionResult {
    match property.kind {
        PropertyKind::Classification => parse_classification(raw, property),
        PropertyKind::Regression => parse_regression(raw, property),
    }
}

// ── Structured-chat extraction ────────────────────────────────────────────────

/// First balanced-brace object substring, skipping braces inside string
/// literals. Returns `None` when no brace ever balances.
pub fn find_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (i, ch) in text[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + i + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

fn decode_suggestions(value: &Value) -> Vec<DesignSuggestion> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

fn decode_molecules(value: &Value) -> Vec<StartingMolecule> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// A payload counts as structured only if it carries a suggestions array or
/// a molecule array under one of the two accepted field names.
fn structured_payload(value: &Value) -> Option<StructuredReply> {
    let suggestions = value.get("suggestions").filter(|v| v.is_array());
    let molecules = ["startingMolecules", "molecules"]
        .iter()
        .find_map(|key| value.get(*key).filter(|v| v.is_array()));
    if suggestions.is_none() && molecules.is_none() {
        return None;
    }
    Some(StructuredReply {
        suggestions: suggestions.map(decode_suggestions),
        molecules: molecules.map(decode_molecules),
    })
}

/// Split an assistant reply into prose and any embedded structured block.
/// Replies without a recognizable block come back verbatim with no payload.
pub fn decode_chat_reply(response: &str) -> ChatReply {
    if let Some(json_text) = find_json_object(response) {
        if let Ok(value) = serde_json::from_str::<Value>(json_text) {
            if let Some(structured) = structured_payload(&value) {
                let text = response.replacen(json_text, "", 1).trim().to_string();
                return ChatReply {
                    text,
                    structured: Some(structured),
                };
            }
        }
    }
    ChatReply {
        text: response.to_string(),
        structured: None,
    }
}

/// Decode a design-guidance reply. A malformed reply degrades to the whole
/// response as the summary with empty lists.
pub fn decode_design_guidance(response: &str) -> DesignGuidance {
    if let Some(json_text) = find_json_object(response) {
        if let Ok(value) = serde_json::from_str::<Value>(json_text) {
            return DesignGuidance {
                summary: value
                    .get("summary")
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .unwrap_or("No summary available.")
                    .to_string(),
                suggestions: value
                    .get("suggestions")
                    .map(decode_suggestions)
                    .unwrap_or_default(),
                starting_molecules: value
                    .get("startingMolecules")
                    .map(decode_molecules)
                    .unwrap_or_default(),
            };
        }
    }
    DesignGuidance {
        summary: response.to_string(),
        suggestions: Vec::new(),
        starting_molecules: Vec::new(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
