//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//!
//! - `agent` - The evaluator agent behind the [`Agent`](crate::ports::Agent) port
//! - `handlers` - Evaluation and knowledge base handlers

pub mod agent;
pub mod handlers;

pub use agent::{create_evaluator_agent, EvaluatorAgent};
pub use handlers::{
    EvaluateModelsCommand, EvaluateModelsError, EvaluateModelsHandler, GetKnowledgeStatusHandler,
    KnowledgeStatusReport, LoadKnowledgeCommand, LoadKnowledgeError, LoadKnowledgeHandler,
};
