//! Orchestration of the model-backed operations: cache consultation, prompt
//! assembly, gateway round trips, and tolerant decoding.

use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{debug, instrument, warn};

use elionyx_common::{
    property_by_id, ChatReply, ChatTurn, DesignGuidance, ExplanationResult, PredictionResult,
};
use elionyx_llm::{Message, TextGateway};

use crate::cache;
use crate::error::PredictError;
use crate::parser;
use crate::prompts;

/// Front door for every model-backed operation. Holds the gateway behind a
/// trait object so the hosting process wires in the real Vertex AI client
/// and tests wire in a scripted fake.
pub struct PredictionPipeline {
    gateway: Arc<dyn TextGateway>,
}

impl PredictionPipeline {
    pub fn new(gateway: Arc<dyn TextGateway>) -> Self {
        Self { gateway }
    }

    /// Evaluate a batch of properties for one molecule.
    ///
    /// Cached molecules are answered without touching the endpoint; anything
    /// else fans out one concurrent scoring call per property. A failed
    /// property degrades to a placeholder entry instead of sinking the batch,
    /// so the output always carries one entry per requested property, in
    /// request order.
    #[instrument(skip(self))]
    pub async fn evaluate(
        &self,
        smiles: &str,
        properties: &[String],
        target: Option<&str>,
    ) -> Result<Vec<PredictionResult>, PredictError> {
        if smiles.trim().is_empty() {
            return Err(PredictError::MissingField("smiles"));
        }
        if properties.is_empty() {
            return Err(PredictError::MissingField("properties"));
        }

        if let Some(cached) = cache::cached_predictions(smiles, properties) {
            debug!(count = cached.len(), "serving cached predictions");
            return Ok(cached);
        }

        let calls = properties
            .iter()
            .map(|id| self.evaluate_property(smiles, id, target));
        let outcomes = join_all(calls).await;

        let results = properties
            .iter()
            .zip(outcomes)
            .map(|(id, outcome)| match outcome {
                Ok(result) => result,
                Err(err) => {
                    warn!(property = %id, error = %err, "property evaluation failed");
                    PredictionResult::failed(id.as_str(), err.to_string())
                }
            })
            .collect();
        Ok(results)
    }

    async fn evaluate_property(
        &self,
        smiles: &str,
        property_id: &str,
        target: Option<&str>,
    ) -> Result<PredictionResult, PredictError> {
        let property = property_by_id(property_id)
            .ok_or_else(|| PredictError::UnknownProperty(property_id.to_string()))?;
        let prompt = prompts::scoring_prompt(property_id, smiles, target)?;
        let raw = self.gateway.score(&prompt).await?;
        Ok(parser::parse_prediction(&raw, property))
    }

    /// Structural rationale for an already-computed prediction.
    #[instrument(skip(self))]
    pub async fn explain(
        &self,
        smiles: &str,
        property_id: &str,
        prediction: &str,
    ) -> Result<ExplanationResult, PredictError> {
        if let Some(text) = cache::cached_explanation(smiles, property_id) {
            debug!(property = %property_id, "serving cached explanation");
            return Ok(ExplanationResult {
                property_id: property_id.to_string(),
                smiles: smiles.to_string(),
                explanation: text.to_string(),
            });
        }

        let property = property_by_id(property_id)
            .ok_or_else(|| PredictError::UnknownProperty(property_id.to_string()))?;
        let prompt = prompts::explanation_prompt(property, smiles, prediction);
        let explanation = self.gateway.chat(&[Message::new("user", prompt)]).await?;
        Ok(ExplanationResult {
            property_id: property_id.to_string(),
            smiles: smiles.to_string(),
            explanation,
        })
    }

    /// One conversational turn. The reply to a starter prompt comes from the
    /// cache; everything else gets a system turn carrying the molecule
    /// context, then the full history, and the reply is decoded for an
    /// embedded structured block.
    #[instrument(skip_all)]
    pub async fn chat(
        &self,
        history: &[ChatTurn],
        current_smiles: Option<&str>,
        current_predictions: &[PredictionResult],
    ) -> Result<ChatReply, PredictError> {
        if history.is_empty() {
            return Err(PredictError::MissingField("messages"));
        }

        if let Some(reply) = cache::cached_chat_reply(history) {
            debug!("serving cached chat reply");
            return Ok(reply);
        }

        let system = prompts::chat_system_prompt(current_smiles, current_predictions);
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(Message::new("system", system));
        for turn in history {
            messages.push(Message::new(turn.role.as_str(), turn.content.as_str()));
        }

        let response = self.gateway.chat(&messages).await?;
        Ok(parser::decode_chat_reply(&response))
    }

    /// Structured starting-point guidance for a therapeutic goal. The model
    /// is asked for strict JSON; a non-conforming reply degrades to a
    /// summary-only answer rather than an error.
    #[instrument(skip(self))]
    pub async fn design_guidance(
        &self,
        therapeutic_goal: &str,
    ) -> Result<DesignGuidance, PredictError> {
        let prompt = prompts::design_guidance_prompt(therapeutic_goal);
        let response = self.gateway.chat(&[Message::new("user", prompt)]).await?;
        Ok(parser::decode_design_guidance(&response))
    }
}
