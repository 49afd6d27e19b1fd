//! GetKnowledgeStatusHandler - Query handler for knowledge base readiness.

use std::sync::Arc;

use crate::domain::knowledge::KnowledgeStatus;
use crate::ports::KnowledgeBase;

/// Outcome of a status query. Probe failures are reported, never raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KnowledgeStatusReport {
    /// No knowledge base is configured.
    NoKnowledge,
    /// The store answered the probe.
    Probed(KnowledgeStatus),
    /// The probe failed.
    ProbeFailed(String),
}

/// Handler for the knowledge status query.
pub struct GetKnowledgeStatusHandler {
    knowledge: Option<Arc<dyn KnowledgeBase>>,
}

impl GetKnowledgeStatusHandler {
    pub fn new(knowledge: Option<Arc<dyn KnowledgeBase>>) -> Self {
        Self { knowledge }
    }

    pub async fn handle(&self) -> KnowledgeStatusReport {
        let Some(knowledge) = &self.knowledge else {
            return KnowledgeStatusReport::NoKnowledge;
        };

        match knowledge.table_exists().await {
            Ok(exists) => KnowledgeStatusReport::Probed(KnowledgeStatus::from_table_exists(exists)),
            Err(e) => {
                tracing::warn!("Knowledge status probe failed: {}", e);
                KnowledgeStatusReport::ProbeFailed(e.to_string())
            }
        }
    }
}
