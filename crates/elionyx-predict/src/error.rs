//! Pipeline error taxonomy.
//!
//! Parsing never appears here: decoding is total and degrades to defaults
//! instead of failing. Errors are config/input problems or gateway failures.

use thiserror::Error;

use elionyx_llm::GatewayError;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("Unknown property: {0}")]
    UnknownProperty(String),

    #[error("No prompt template for property: {0}")]
    NoPromptTemplate(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
