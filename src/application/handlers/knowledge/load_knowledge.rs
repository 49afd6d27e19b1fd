//! LoadKnowledgeHandler - Command handler for (re)loading the knowledge base.

use std::sync::Arc;

use thiserror::Error;

use crate::ports::{KnowledgeBase, LoadSummary};

/// Command to load the configured documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadKnowledgeCommand {
    /// Re-embed and overwrite chunks that are already stored.
    pub recreate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadKnowledgeError {
    #[error("No knowledge base available")]
    NoKnowledgeBase,

    /// The store failed; carries its message.
    #[error("{0}")]
    Upstream(String),
}

/// Handler for loading the knowledge base.
///
/// Concurrent loads are not serialized here.
pub struct LoadKnowledgeHandler {
    knowledge: Option<Arc<dyn KnowledgeBase>>,
}

impl LoadKnowledgeHandler {
    pub fn new(knowledge: Option<Arc<dyn KnowledgeBase>>) -> Self {
        Self { knowledge }
    }

    pub async fn handle(&self, cmd: LoadKnowledgeCommand) -> Result<LoadSummary, LoadKnowledgeError> {
        let knowledge = self
            .knowledge
            .as_ref()
            .ok_or(LoadKnowledgeError::NoKnowledgeBase)?;

        tracing::info!("Loading knowledge base (recreate={})", cmd.recreate);
        let summary = knowledge.load(cmd.recreate).await.map_err(|e| {
            tracing::error!("Knowledge base load failed: {}", e);
            LoadKnowledgeError::Upstream(e.to_string())
        })?;
        tracing::info!("Knowledge base loaded successfully");

        Ok(summary)
    }
}
