//! Property evaluation pipeline: prompt construction, tolerant response
//! parsing, the static answer cache, and the orchestrator that fans
//! scoring calls out per property.
//!
//! The pipeline talks to the model exclusively through the
//! [`elionyx_llm::TextGateway`] trait, so tests drive it with a scripted
//! fake instead of a live endpoint.

pub mod cache;
pub mod error;
pub mod parser;
pub mod pipeline;
pub mod prompts;

pub use error::PredictError;
pub use pipeline::PredictionPipeline;
