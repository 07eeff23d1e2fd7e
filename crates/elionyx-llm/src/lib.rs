//! elionyx-llm — remote therapeutics-model gateway.
//! Talks to a TxGemma-style deployment served behind a Vertex AI
//! `rawPredict` endpoint (vLLM serving stack).
//!
//! Modules:
//!   auth     — service-account credentials and bearer-token acquisition
//!   envelope — tolerant extraction of generated text from response bodies
//!   stack    — serving-stack specific echo stripping
//!   gateway  — the TextGateway trait and the Vertex implementation

pub mod auth;
pub mod envelope;
pub mod gateway;
pub mod stack;

pub use auth::{ServiceAccountKey, ServiceAccountTokenProvider, StaticTokenProvider, TokenProvider};
pub use gateway::{EndpointRef, GatewayError, Message, TextGateway, VertexGateway};
pub use stack::ServingStack;
