//! Agent Port - Interface for the long-lived generation delegate.
//!
//! The HTTP layer hands a fully composed prompt to an [`Agent`] and shapes
//! whatever text comes back. How the agent builds its conversation, which
//! model it calls, and whether it consults a knowledge base are adapter
//! concerns.

use async_trait::async_trait;
use thiserror::Error;

use super::ai_provider::AIError;
use super::knowledge_base::KnowledgeError;

/// Port for running one prompt through the evaluator agent.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Runs the prompt once and returns the final answer.
    async fn run(&self, prompt: &str) -> Result<AgentResponse, AgentError>;
}

/// Final answer of one agent run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentResponse {
    /// Answer text, empty when the model returned no content.
    pub content: String,
    /// Conversation session the run belongs to, if the agent tracks one.
    pub session_id: Option<String>,
}

impl AgentResponse {
    pub fn new(content: impl Into<String>, session_id: Option<String>) -> Self {
        Self {
            content: content.into(),
            session_id,
        }
    }
}

/// Failures of an agent run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    /// The model provider failed.
    #[error("{0}")]
    Provider(#[from] AIError),

    /// A knowledge search issued by the model failed.
    #[error("knowledge search failed: {0}")]
    Knowledge(#[from] KnowledgeError),

    /// The model kept requesting tools past the round limit.
    #[error("tool call limit exceeded after {rounds} rounds")]
    ToolLimitExceeded { rounds: usize },

    /// The model called a tool that was never offered.
    #[error("unknown tool requested: {0}")]
    UnknownTool(String),
}
