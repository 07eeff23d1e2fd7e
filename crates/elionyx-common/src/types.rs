//! Result and chat types shared across the prediction pipeline and the API.
//!
//! All wire-facing structs serialize camelCase to match the UI contract
//! (`propertyId`, `numericValue`, `startingMolecules`, ...).

use chrono::Utc;
use serde::{Deserialize, Serialize};

// ── Prediction results ────────────────────────────────────────────────────────

/// Directional reading of a prediction for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Positive,
    Negative,
    Neutral,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Positive => "positive",
            Status::Negative => "negative",
            Status::Neutral => "neutral",
        }
    }
}

/// Two-way categorical outcome as emitted by the model ("(A)" / "(B)").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    A,
    B,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::A => "A",
            Label::B => "B",
        }
    }
}

/// One predicted property value for one molecule.
///
/// Classification results carry `label`; regression results carry
/// `numeric_value`. A failed per-property evaluation is represented as a
/// placeholder entry (value "Error", neutral status, `error` populated)
/// rather than dropping the property from the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub property_id: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictionResult {
    /// Placeholder entry for a property whose evaluation failed.
    pub fn failed(property_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property_id: property_id.into(),
            value: "Error".to_string(),
            numeric_value: None,
            label: None,
            confidence: None,
            status: Status::Neutral,
            error: Some(message.into()),
        }
    }
}

/// Structural rationale for one prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationResult {
    pub property_id: String,
    pub smiles: String,
    pub explanation: String,
}

// ── Chat ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
            ChatRole::System => "system",
        }
    }
}

/// One turn of an assistant conversation. Incoming wire turns usually carry
/// only role + content; the timestamp then deserializes as 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured: Option<StructuredReply>,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            timestamp: Utc::now().timestamp_millis(),
            structured: None,
        }
    }

    pub fn assistant(content: impl Into<String>, structured: Option<StructuredReply>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
            timestamp: Utc::now().timestamp_millis(),
            structured,
        }
    }
}

/// Decoded chat output: reply text plus any machine-readable payload the
/// model embedded in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured: Option<StructuredReply>,
}

/// Machine-readable block a chat reply may embed: design suggestions and/or
/// concrete candidate molecules. Models emit the molecule list under either
/// `startingMolecules` or `molecules`; both decode into `molecules`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructuredReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<DesignSuggestion>>,
    #[serde(
        default,
        alias = "startingMolecules",
        skip_serializing_if = "Option::is_none"
    )]
    pub molecules: Option<Vec<StartingMolecule>>,
}

/// Actionable design suggestion. Unknown kinds degrade to `General` so a
/// creative model cannot break decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignSuggestion {
    #[serde(default)]
    pub text: String,
    #[serde(default, rename = "type")]
    pub kind: SuggestionKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Modify,
    Add,
    Remove,
    #[default]
    #[serde(other)]
    General,
}

/// Named candidate molecule proposed by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartingMolecule {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub smiles: String,
}

/// Structured answer to a therapeutic-goal query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignGuidance {
    pub summary: String,
    #[serde(default)]
    pub suggestions: Vec<DesignSuggestion>,
    #[serde(default)]
    pub starting_molecules: Vec<StartingMolecule>,
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_result_wire_shape() {
        let result = PredictionResult {
            property_id: "logp".to_string(),
            value: "1.19".to_string(),
            numeric_value: Some(1.19),
            label: None,
            confidence: Some(0.80),
            status: Status::Neutral,
            error: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["propertyId"], "logp");
        assert_eq!(json["numericValue"], 1.19);
        assert_eq!(json["status"], "neutral");
        // Absent options must not appear on the wire
        assert!(json.get("label").is_none());
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_failed_placeholder_is_neutral() {
        let result = PredictionResult::failed("foo", "Unknown property: foo");
        assert_eq!(result.value, "Error");
        assert_eq!(result.status, Status::Neutral);
        assert_eq!(result.error.as_deref(), Some("Unknown property: foo"));
        assert!(result.label.is_none());
        assert!(result.numeric_value.is_none());
    }

    #[test]
    fn test_chat_turn_deserializes_bare_wire_form() {
        let turn: ChatTurn =
            serde_json::from_str(r#"{"role":"user","content":"hello"}"#).unwrap();
        assert_eq!(turn.role, ChatRole::User);
        assert_eq!(turn.content, "hello");
        assert_eq!(turn.timestamp, 0);
        assert!(turn.structured.is_none());
    }

    #[test]
    fn test_structured_reply_accepts_both_molecule_keys() {
        let a: StructuredReply = serde_json::from_str(
            r#"{"startingMolecules":[{"name":"Aspirin","smiles":"CC(=O)Oc1ccccc1C(=O)O"}]}"#,
        )
        .unwrap();
        let b: StructuredReply = serde_json::from_str(
            r#"{"molecules":[{"name":"Aspirin","smiles":"CC(=O)Oc1ccccc1C(=O)O"}]}"#,
        )
        .unwrap();
        assert_eq!(a.molecules.unwrap()[0].name, "Aspirin");
        assert_eq!(b.molecules.unwrap()[0].name, "Aspirin");
    }

    #[test]
    fn test_suggestion_kind_tolerates_unknown_strings() {
        let s: DesignSuggestion =
            serde_json::from_str(r#"{"text":"x","type":"replace"}"#).unwrap();
        assert_eq!(s.kind, SuggestionKind::General);
        let s: DesignSuggestion = serde_json::from_str(r#"{"text":"x","type":"modify"}"#).unwrap();
        assert_eq!(s.kind, SuggestionKind::Modify);
    }
}
