//! elionyx-common — shared domain types for the Elionyx design assistant.
//!
//! Holds the property registry (what the model can predict, and how each
//! prediction is typed, labelled, and scored), the evaluation panels, the
//! built-in example molecules, and the wire-level result/chat types shared
//! by the prediction pipeline and the web boundary.

pub mod catalog;
pub mod properties;
pub mod types;

pub use catalog::{example_by_name, ExampleMolecule, EXAMPLE_MOLECULES};
pub use properties::{
    panel_properties, property_by_id, OutcomeLabels, Panel, PropertyCategory, PropertyDefinition,
    PropertyKind, PROPERTY_DEFINITIONS,
};
pub use types::{
    ChatReply, ChatRole, ChatTurn, DesignGuidance, DesignSuggestion, ExplanationResult, Label,
    PredictionResult, StartingMolecule, Status, StructuredReply, SuggestionKind,
};
