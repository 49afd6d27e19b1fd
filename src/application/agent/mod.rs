//! Evaluator agent construction and behaviour.
//!
//! - `evaluator` - the [`EvaluatorAgent`] delegate and its tool loop
//! - `system_message` - system message assembly from [`AgentConfig`]
//! - `history` - bounded replay of completed runs
//! - `knowledge_tool` - the `search_knowledge_base` function tool

mod evaluator;
mod history;
mod knowledge_tool;
mod system_message;

use std::sync::Arc;

pub use evaluator::{EvaluatorAgent, MAX_TOOL_ROUNDS};
pub use history::RunHistory;
pub use knowledge_tool::{search_knowledge_definition, SEARCH_KNOWLEDGE_TOOL};
pub use system_message::build_system_message;

use crate::config::AgentConfig;
use crate::ports::{AIProvider, KnowledgeBase};

/// Builds the process-wide evaluator agent.
pub fn create_evaluator_agent(
    config: AgentConfig,
    provider: Arc<dyn AIProvider>,
    knowledge: Option<Arc<dyn KnowledgeBase>>,
    search_limit: usize,
) -> EvaluatorAgent {
    let agent = EvaluatorAgent::new(config, provider, knowledge).with_search_limit(search_limit);
    tracing::info!(
        agent = %agent.name(),
        session_id = %agent.session_id(),
        "Evaluator agent created"
    );
    agent
}
