//! TextGateway trait and the Vertex AI `rawPredict` implementation.
//!
//! Two call shapes against the same wire format:
//!   score — single-shot prompt, short deterministic answer (temperature 0)
//!   chat  — turn list serialized into the Gemma chat template, longer
//!           sampled answer
//!
//! The gateway is constructed once by the hosting process and injected where
//! needed; it owns no global state and never retries.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::auth::TokenProvider;
use crate::envelope;
use crate::stack::ServingStack;

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Credential error: {0}")]
    Credentials(String),
    #[error("Token exchange failed [{status}]: {message}")]
    TokenExchange { status: u16, message: String },
    #[error("Vertex AI error [{status}]: {message}")]
    Api { status: u16, message: String },
}

// ── Messages ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String, // "system" | "user" | "assistant"
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self { role: role.into(), content: content.into() }
    }
}

/// Serialize a turn list into the Gemma chat template. The `assistant` role
/// maps to Gemma's `model`; a trailing open model turn tells the server where
/// generation continues.
pub fn format_turn_prompt(messages: &[Message]) -> String {
    let mut prompt = String::new();
    for msg in messages {
        let role = if msg.role == "assistant" { "model" } else { msg.role.as_str() };
        prompt.push_str("<start_of_turn>");
        prompt.push_str(role);
        prompt.push('\n');
        prompt.push_str(&msg.content);
        prompt.push_str("<end_of_turn>\n");
    }
    prompt.push_str("<start_of_turn>model\n");
    prompt
}

// ── Trait ─────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait TextGateway: Send + Sync {
    /// Single-shot scoring round trip. Returns cleaned generated text.
    async fn score(&self, prompt: &str) -> Result<String, GatewayError>;
    /// Multi-turn chat round trip. Returns cleaned generated text.
    async fn chat(&self, messages: &[Message]) -> Result<String, GatewayError>;
}

// ── Vertex AI rawPredict ──────────────────────────────────────────────────────

/// One deployed endpoint: region + endpoint id. Scoring and chat may be
/// served from different regions.
#[derive(Debug, Clone)]
pub struct EndpointRef {
    pub region: String,
    pub endpoint_id: String,
}

impl EndpointRef {
    pub fn new(region: impl Into<String>, endpoint_id: impl Into<String>) -> Self {
        Self { region: region.into(), endpoint_id: endpoint_id.into() }
    }
}

// Scoring wants a deterministic short answer; chat needs room for prose.
const SCORE_MAX_TOKENS: u32 = 64;
const SCORE_TEMPERATURE: f32 = 0.0;
const CHAT_MAX_TOKENS: u32 = 2048;
const CHAT_TEMPERATURE: f32 = 0.3;

pub struct VertexGateway {
    pub project_id: String,
    pub score_endpoint: EndpointRef,
    pub chat_endpoint: EndpointRef,
    stack: ServingStack,
    tokens: Arc<dyn TokenProvider>,
    client: reqwest::Client,
}

impl VertexGateway {
    pub fn new(
        project_id: impl Into<String>,
        score_endpoint: EndpointRef,
        chat_endpoint: EndpointRef,
        stack: ServingStack,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            score_endpoint,
            chat_endpoint,
            stack,
            tokens,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint_url(&self, ep: &EndpointRef) -> String {
        format!(
            "https://{region}-aiplatform.googleapis.com/v1/projects/{project}/locations/{region}/endpoints/{endpoint}:rawPredict",
            region = ep.region,
            project = self.project_id,
            endpoint = ep.endpoint_id,
        )
    }

    #[instrument(skip(self, prompt))]
    async fn raw_predict(
        &self,
        ep: &EndpointRef,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, GatewayError> {
        let token = self.tokens.bearer_token().await?;
        let url = self.endpoint_url(ep);
        debug!(chars = prompt.len(), %url, "rawPredict request");

        // Generation parameters must ride inside `instances`: the top-level
        // `parameters` field is not forwarded to the vLLM server, which then
        // falls back to its short deployment default and truncates replies.
        let body = serde_json::json!({
            "instances": [{
                "prompt":      prompt,
                "max_tokens":  max_tokens,
                "temperature": temperature,
            }],
        });

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if !resp.status().is_success() {
            let message = resp.text().await.unwrap_or_default();
            warn!(status, "rawPredict error response");
            return Err(GatewayError::Api { status, message });
        }

        let json: serde_json::Value = resp.json().await?;
        let raw = envelope::extract_generated_text(&json);
        let cleaned = self.stack.strip(&raw);
        debug!(chars = cleaned.len(), "rawPredict cleaned output");
        Ok(cleaned)
    }
}

#[async_trait]
impl TextGateway for VertexGateway {
    async fn score(&self, prompt: &str) -> Result<String, GatewayError> {
        self.raw_predict(&self.score_endpoint, prompt, SCORE_MAX_TOKENS, SCORE_TEMPERATURE)
            .await
    }

    async fn chat(&self, messages: &[Message]) -> Result<String, GatewayError> {
        let prompt = format_turn_prompt(messages);
        self.raw_predict(&self.chat_endpoint, &prompt, CHAT_MAX_TOKENS, CHAT_TEMPERATURE)
            .await
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticTokenProvider;

    fn test_gateway() -> VertexGateway {
        VertexGateway::new(
            "demo-project",
            EndpointRef::new("us-central1", "111"),
            EndpointRef::new("europe-west4", "222"),
            ServingStack::Gemma,
            Arc::new(StaticTokenProvider::new("test-token")),
        )
    }

    #[test]
    fn test_endpoint_url_shape() {
        let gw = test_gateway();
        assert_eq!(
            gw.endpoint_url(&gw.score_endpoint),
            "https://us-central1-aiplatform.googleapis.com/v1/projects/demo-project/locations/us-central1/endpoints/111:rawPredict"
        );
        assert_eq!(
            gw.endpoint_url(&gw.chat_endpoint),
            "https://europe-west4-aiplatform.googleapis.com/v1/projects/demo-project/locations/europe-west4/endpoints/222:rawPredict"
        );
    }

    #[test]
    fn test_turn_prompt_maps_assistant_to_model() {
        let messages = vec![
            Message::new("system", "Be helpful."),
            Message::new("user", "hi"),
            Message::new("assistant", "hello"),
        ];
        let prompt = format_turn_prompt(&messages);
        assert_eq!(
            prompt,
            "<start_of_turn>system\nBe helpful.<end_of_turn>\n\
             <start_of_turn>user\nhi<end_of_turn>\n\
             <start_of_turn>model\nhello<end_of_turn>\n\
             <start_of_turn>model\n"
        );
    }

    #[test]
    fn test_turn_prompt_ends_with_open_model_turn() {
        let prompt = format_turn_prompt(&[Message::new("user", "q")]);
        assert!(prompt.ends_with("<start_of_turn>model\n"));
        assert!(!prompt.ends_with("<end_of_turn>\n"));
    }

    #[test]
    fn test_api_error_display_carries_status_and_body() {
        let err = GatewayError::Api { status: 403, message: "permission denied".to_string() };
        assert_eq!(err.to_string(), "Vertex AI error [403]: permission denied");
    }
}
