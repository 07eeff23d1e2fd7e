//! Pipeline tests against a scripted gateway double: cache short-circuits,
//! concurrent fan-out with per-property degradation, chat context assembly,
//! and guidance decoding.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use elionyx_common::{ChatTurn, PredictionResult, Status, SuggestionKind};
use elionyx_llm::{GatewayError, Message, TextGateway};
use elionyx_predict::{PredictError, PredictionPipeline};

const ASPIRIN: &str = "CC(=O)Oc1ccccc1C(=O)O";

/// Replays canned answers keyed by a prompt substring and records every call.
struct ScriptedGateway {
    score_replies: Vec<(&'static str, &'static str)>,
    chat_reply: &'static str,
    score_calls: Mutex<Vec<String>>,
    chat_calls: Mutex<Vec<Vec<Message>>>,
}

impl ScriptedGateway {
    fn new(
        score_replies: Vec<(&'static str, &'static str)>,
        chat_reply: &'static str,
    ) -> Arc<Self> {
        Arc::new(Self {
            score_replies,
            chat_reply,
            score_calls: Mutex::new(Vec::new()),
            chat_calls: Mutex::new(Vec::new()),
        })
    }

    fn score_count(&self) -> usize {
        self.score_calls.lock().unwrap().len()
    }

    fn chat_count(&self) -> usize {
        self.chat_calls.lock().unwrap().len()
    }

    fn chat_messages(&self, call: usize) -> Vec<Message> {
        self.chat_calls.lock().unwrap()[call].clone()
    }
}

#[async_trait]
impl TextGateway for ScriptedGateway {
    async fn score(&self, prompt: &str) -> Result<String, GatewayError> {
        self.score_calls.lock().unwrap().push(prompt.to_string());
        for (needle, reply) in &self.score_replies {
            if prompt.contains(needle) {
                return Ok((*reply).to_string());
            }
        }
        Err(GatewayError::Api {
            status: 500,
            message: "no scripted reply".to_string(),
        })
    }

    async fn chat(&self, messages: &[Message]) -> Result<String, GatewayError> {
        self.chat_calls.lock().unwrap().push(messages.to_vec());
        Ok(self.chat_reply.to_string())
    }
}

fn pipeline(gateway: &Arc<ScriptedGateway>) -> PredictionPipeline {
    PredictionPipeline::new(gateway.clone())
}

fn ids(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

// ── evaluate ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_cached_molecule_never_reaches_the_gateway() {
    let gateway = ScriptedGateway::new(vec![], "");
    let results = pipeline(&gateway)
        .evaluate(ASPIRIN, &ids(&["bbb", "logp"]), None)
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].property_id, "bbb");
    assert_eq!(results[0].value, "Does not cross");
    assert_eq!(results[0].status, Status::Negative);
    assert_eq!(results[1].property_id, "logp");
    assert_eq!(results[1].numeric_value, Some(1.19));
    assert_eq!(gateway.score_count(), 0);
}

#[tokio::test]
async fn test_uncached_molecule_fans_out_per_property() {
    let gateway = ScriptedGateway::new(
        vec![
            ("crosses the BBB", "Output:\n(B) crosses the BBB"),
            ("normalized lipophilicity", "Answer: 320"),
        ],
        "",
    );
    let results = pipeline(&gateway)
        .evaluate("CCO", &ids(&["bbb", "logp"]), None)
        .await
        .unwrap();

    assert_eq!(gateway.score_count(), 2);
    assert_eq!(results[0].value, "Crosses BBB");
    assert_eq!(results[0].status, Status::Positive);
    assert_eq!(results[1].value, "1.20");
    assert!((results[1].numeric_value.unwrap() - 1.2).abs() < 1e-9);
}

#[tokio::test]
async fn test_unknown_property_degrades_without_a_gateway_call() {
    let gateway = ScriptedGateway::new(
        vec![
            ("crosses the BBB", "(A) does not cross the BBB"),
            ("normalized lipophilicity", "Answer: 500"),
        ],
        "",
    );
    let results = pipeline(&gateway)
        .evaluate("CCO", &ids(&["bbb", "foo", "logp"]), None)
        .await
        .unwrap();

    // The unscripted property never produced a scoring call
    assert_eq!(gateway.score_count(), 2);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].value, "Does not cross");
    assert_eq!(results[1].property_id, "foo");
    assert_eq!(results[1].value, "Error");
    assert_eq!(results[1].status, Status::Neutral);
    assert_eq!(results[1].error.as_deref(), Some("Unknown property: foo"));
    assert_eq!(results[2].property_id, "logp");
    assert_eq!(results[2].value, "3.00");
}

#[tokio::test]
async fn test_gateway_failure_degrades_to_placeholder_entry() {
    let gateway = ScriptedGateway::new(
        vec![("crosses the BBB", "(B) crosses the BBB")],
        "",
    );
    let results = pipeline(&gateway)
        .evaluate("CCO", &ids(&["bbb", "logp"]), None)
        .await
        .unwrap();

    assert_eq!(gateway.score_count(), 2);
    assert_eq!(results[0].status, Status::Positive);
    assert_eq!(results[1].value, "Error");
    assert_eq!(
        results[1].error.as_deref(),
        Some("Vertex AI error [500]: no scripted reply")
    );
}

#[tokio::test]
async fn test_blank_smiles_is_rejected() {
    let gateway = ScriptedGateway::new(vec![], "");
    let err = pipeline(&gateway)
        .evaluate("   ", &ids(&["bbb"]), None)
        .await
        .unwrap_err();
    assert!(matches!(err, PredictError::MissingField("smiles")));
    assert_eq!(err.to_string(), "Missing required field: smiles");
}

#[tokio::test]
async fn test_empty_property_list_is_rejected() {
    let gateway = ScriptedGateway::new(vec![], "");
    let err = pipeline(&gateway)
        .evaluate("CCO", &[], None)
        .await
        .unwrap_err();
    assert!(matches!(err, PredictError::MissingField("properties")));
}

// ── explain ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_cached_explanation_short_circuits() {
    let gateway = ScriptedGateway::new(vec![], "");
    let result = pipeline(&gateway)
        .explain(ASPIRIN, "dili", "DILI risk")
        .await
        .unwrap();

    assert!(result.explanation.starts_with("Aspirin carries a DILI risk"));
    assert_eq!(result.property_id, "dili");
    assert_eq!(result.smiles, ASPIRIN);
    assert_eq!(gateway.chat_count(), 0);
}

#[tokio::test]
async fn test_live_explanation_sends_one_user_turn() {
    let gateway = ScriptedGateway::new(vec![], "Ethanol is small and polar.");
    let result = pipeline(&gateway)
        .explain("CCO", "logp", "-0.31")
        .await
        .unwrap();

    assert_eq!(result.explanation, "Ethanol is small and polar.");
    assert_eq!(gateway.chat_count(), 1);
    let messages = gateway.chat_messages(0);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, "user");
    assert!(messages[0].content.contains("SMILES \"CCO\""));
    assert!(messages[0]
        .content
        .contains("Lipophilicity (logP): -0.31."));
}

#[tokio::test]
async fn test_explain_rejects_unknown_property() {
    let gateway = ScriptedGateway::new(vec![], "");
    let err = pipeline(&gateway)
        .explain("CCO", "foo", "x")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Unknown property: foo");
}

// ── chat ──────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_starter_prompt_is_answered_from_cache() {
    let gateway = ScriptedGateway::new(vec![], "");
    let reply = pipeline(&gateway)
        .chat(
            &[ChatTurn::user("What properties does this molecule have?")],
            None,
            &[],
        )
        .await
        .unwrap();

    assert!(reply.text.starts_with("This app predicts"));
    let molecules = reply.structured.unwrap().molecules.unwrap();
    assert_eq!(molecules.len(), 4);
    assert_eq!(molecules[0].name, "Aspirin");
    assert_eq!(gateway.chat_count(), 0);
}

#[tokio::test]
async fn test_live_chat_injects_system_turn_with_molecule_context() {
    let gateway = ScriptedGateway::new(vec![], "Happy to help.");
    let history = vec![
        ChatTurn::user("How do I lower its toxicity?"),
        ChatTurn::assistant("Consider reducing lipophilicity.", None),
        ChatTurn::user("Which group should go first?"),
    ];
    let predictions = vec![PredictionResult {
        property_id: "logp".to_string(),
        value: "3.97".to_string(),
        numeric_value: Some(3.97),
        label: None,
        confidence: Some(0.80),
        status: Status::Neutral,
        error: None,
    }];

    let reply = pipeline(&gateway)
        .chat(&history, Some("CC(C)Cc1ccc(cc1)C(C)C(=O)O"), &predictions)
        .await
        .unwrap();

    assert_eq!(reply.text, "Happy to help.");
    assert!(reply.structured.is_none());

    let messages = gateway.chat_messages(0);
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0].role, "system");
    assert!(messages[0]
        .content
        .contains("The user is currently working with this molecule: CC(C)Cc1ccc(cc1)C(C)C(=O)O"));
    assert!(messages[0].content.contains("- Lipophilicity (logP): 3.97"));
    assert_eq!(messages[1].role, "user");
    assert_eq!(messages[2].role, "assistant");
    assert_eq!(messages[3].content, "Which group should go first?");
}

#[tokio::test]
async fn test_multi_turn_history_bypasses_chat_cache() {
    let gateway = ScriptedGateway::new(vec![], "Let's dig deeper.");
    let history = vec![
        ChatTurn::user("hi"),
        ChatTurn::user("What properties does this molecule have?"),
    ];
    let reply = pipeline(&gateway).chat(&history, None, &[]).await.unwrap();

    assert_eq!(reply.text, "Let's dig deeper.");
    assert_eq!(gateway.chat_count(), 1);
}

#[tokio::test]
async fn test_empty_history_is_rejected() {
    let gateway = ScriptedGateway::new(vec![], "");
    let err = pipeline(&gateway).chat(&[], None, &[]).await.unwrap_err();
    assert!(matches!(err, PredictError::MissingField("messages")));
    assert_eq!(err.to_string(), "Missing required field: messages");
}

#[tokio::test]
async fn test_chat_reply_with_embedded_molecules_is_decoded() {
    let gateway = ScriptedGateway::new(
        vec![],
        "Try this scaffold:\n{\"startingMolecules\":[{\"name\":\"Cetirizine\",\"smiles\":\"CCO\"}]}\nIt avoids CNS exposure.",
    );
    let reply = pipeline(&gateway)
        .chat(&[ChatTurn::user("suggest an antihistamine")], None, &[])
        .await
        .unwrap();

    assert_eq!(reply.text, "Try this scaffold:\n\nIt avoids CNS exposure.");
    let molecules = reply.structured.unwrap().molecules.unwrap();
    assert_eq!(molecules[0].name, "Cetirizine");
}

// ── design guidance ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_guidance_decodes_strict_json_reply() {
    let gateway = ScriptedGateway::new(
        vec![],
        r#"```json
{"summary":"Lower lipophilicity and add a polar handle.","suggestions":[{"text":"Add a carboxylic acid","type":"add"}],"startingMolecules":[{"name":"Cetirizine","smiles":"OC(=O)CN1CCN(CC1)CCOC(c1ccccc1Cl)c1ccc(Cl)cc1"}]}
```"#,
    );
    let guidance = pipeline(&gateway)
        .design_guidance("a non-sedating antihistamine")
        .await
        .unwrap();

    assert_eq!(guidance.summary, "Lower lipophilicity and add a polar handle.");
    assert_eq!(guidance.suggestions.len(), 1);
    assert_eq!(guidance.suggestions[0].kind, SuggestionKind::Add);
    assert_eq!(guidance.starting_molecules[0].name, "Cetirizine");

    let messages = gateway.chat_messages(0);
    assert_eq!(messages.len(), 1);
    assert!(messages[0]
        .content
        .contains("\"a non-sedating antihistamine\""));
}

#[tokio::test]
async fn test_guidance_degrades_to_summary_only() {
    let gateway = ScriptedGateway::new(vec![], "Focus on reducing TPSA first.");
    let guidance = pipeline(&gateway)
        .design_guidance("improve BBB penetration")
        .await
        .unwrap();

    assert_eq!(guidance.summary, "Focus on reducing TPSA first.");
    assert!(guidance.suggestions.is_empty());
    assert!(guidance.starting_molecules.is_empty());
}
