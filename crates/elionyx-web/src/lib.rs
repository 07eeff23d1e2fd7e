//! elionyx-web — axum HTTP boundary for the Elionyx design assistant.
//!
//! Four routes mirror the assistant UI's API surface: batch property
//! prediction, prediction explanations, conversational chat, and a health
//! probe. All model work is delegated to the injected prediction pipeline.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
