//! Process wiring: turns [`AppConfig`] into the shared agent and knowledge
//! handle.

use std::sync::Arc;

use crate::adapters::ai::{
    OpenAIConfig, OpenAIEmbeddingConfig, OpenAIEmbeddingProvider, OpenAIProvider,
};
use crate::adapters::knowledge::PgVectorKnowledgeBase;
use crate::application::agent::{create_evaluator_agent, EvaluatorAgent};
use crate::config::{AgentConfig, AppConfig};
use crate::ports::{AIError, KnowledgeBase};

/// Builds the knowledge handle, or `None` when it cannot be used.
///
/// The pool connects lazily, so an unreachable database is only noticed by
/// the first query.
pub fn build_knowledge_base(config: &AppConfig) -> Option<Arc<dyn KnowledgeBase>> {
    let knowledge = &config.knowledge;
    if !knowledge.enabled {
        tracing::info!("Knowledge base disabled by configuration");
        return None;
    }
    if let Err(e) = knowledge.validate() {
        tracing::warn!("Knowledge base disabled, invalid configuration: {}", e);
        return None;
    }

    let embedder = match OpenAIEmbeddingProvider::new(OpenAIEmbeddingConfig::from_app_config(
        &config.ai, knowledge,
    )) {
        Ok(embedder) => embedder,
        Err(e) => {
            tracing::warn!("Knowledge base disabled, embedding client failed: {}", e);
            return None;
        }
    };

    match PgVectorKnowledgeBase::connect_lazy(knowledge, Arc::new(embedder)) {
        Ok(store) => {
            tracing::info!(
                schema = %knowledge.schema,
                table = %knowledge.table_name,
                "Knowledge base configured"
            );
            Some(Arc::new(store))
        }
        Err(e) => {
            tracing::warn!("Knowledge base disabled, could not create pool: {}", e);
            None
        }
    }
}

/// Builds the evaluator agent from the application and agent configuration.
pub fn build_agent(
    config: &AppConfig,
    knowledge: Option<Arc<dyn KnowledgeBase>>,
) -> Result<EvaluatorAgent, AIError> {
    if !config.ai.has_api_key() {
        tracing::warn!("OPENAI_API_KEY is not set, evaluations will fail upstream");
    }

    let agent_config = AgentConfig::load_or_default(&config.agent_config_path);
    let provider = OpenAIProvider::new(OpenAIConfig::from_app_config(&config.ai))?;

    Ok(create_evaluator_agent(
        agent_config,
        Arc::new(provider),
        knowledge,
        config.knowledge.search_limit,
    ))
}
