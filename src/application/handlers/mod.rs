//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod evaluation;
pub mod knowledge;

pub use evaluation::{EvaluateModelsCommand, EvaluateModelsError, EvaluateModelsHandler};
pub use knowledge::{
    GetKnowledgeStatusHandler, KnowledgeStatusReport, LoadKnowledgeCommand, LoadKnowledgeError,
    LoadKnowledgeHandler,
};
