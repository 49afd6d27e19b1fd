//! Shared application state.

use std::sync::Arc;

use crate::application::handlers::{
    EvaluateModelsHandler, GetKnowledgeStatusHandler, LoadKnowledgeHandler,
};
use crate::ports::{Agent, KnowledgeBase};

/// Dependencies shared by every endpoint.
#[derive(Clone)]
pub struct ApiState {
    pub agent: Arc<dyn Agent>,
    pub knowledge: Option<Arc<dyn KnowledgeBase>>,
}

impl ApiState {
    pub fn new(agent: Arc<dyn Agent>, knowledge: Option<Arc<dyn KnowledgeBase>>) -> Self {
        Self { agent, knowledge }
    }

    pub fn knowledge_available(&self) -> bool {
        self.knowledge.is_some()
    }

    pub fn evaluate_models_handler(&self) -> EvaluateModelsHandler {
        EvaluateModelsHandler::new(self.agent.clone(), self.knowledge_available())
    }

    pub fn knowledge_status_handler(&self) -> GetKnowledgeStatusHandler {
        GetKnowledgeStatusHandler::new(self.knowledge.clone())
    }

    pub fn load_knowledge_handler(&self) -> LoadKnowledgeHandler {
        LoadKnowledgeHandler::new(self.knowledge.clone())
    }
}
