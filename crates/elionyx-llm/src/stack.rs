//! Serving-stack specific post-processing of generated text.
//!
//! vLLM deployments of Gemma-family models echo the prompt back: the answer
//! follows an `Output:` section, or the final open model turn when no output
//! marker is present. Other stacks return the bare completion untouched.

use serde::{Deserialize, Serialize};

const OUTPUT_MARKER: &str = "Output:\n";
const MODEL_TURN_MARKER: &str = "<start_of_turn>model\n";
const END_OF_TURN: &str = "<end_of_turn>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServingStack {
    /// Gemma chat template behind vLLM: strip the echoed prompt and turn tags.
    #[default]
    Gemma,
    /// Completion-only stacks: trim and pass through.
    Plain,
}

impl ServingStack {
    pub fn strip(&self, raw: &str) -> String {
        match self {
            ServingStack::Gemma => strip_gemma(raw),
            ServingStack::Plain => raw.trim().to_string(),
        }
    }
}

fn strip_gemma(raw: &str) -> String {
    let tail = match raw.rfind(OUTPUT_MARKER) {
        Some(idx) => &raw[idx + OUTPUT_MARKER.len()..],
        None => match raw.rfind(MODEL_TURN_MARKER) {
            Some(idx) => &raw[idx + MODEL_TURN_MARKER.len()..],
            None => raw,
        },
    };
    tail.replace(END_OF_TURN, "").trim().to_string()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
