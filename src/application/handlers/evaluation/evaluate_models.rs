//! EvaluateModelsHandler - Command handler for model response comparison.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::evaluation::{
    compose_evaluation_prompt, knowledge_used, EvaluationMetadata, EvaluationRequest,
    EvaluationResult, ValidationError,
};
use crate::ports::Agent;

/// Command carrying the raw request fields.
#[derive(Debug, Clone)]
pub struct EvaluateModelsCommand {
    pub prompt: String,
    pub model1: String,
    pub model2: String,
    pub model3: String,
    pub use_knowledge: bool,
}

/// Failures of an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluateModelsError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The agent failed; carries its message.
    #[error("{0}")]
    Upstream(String),
}

/// Handler for evaluating one model response against two others.
pub struct EvaluateModelsHandler {
    agent: Arc<dyn Agent>,
    knowledge_available: bool,
}

impl EvaluateModelsHandler {
    pub fn new(agent: Arc<dyn Agent>, knowledge_available: bool) -> Self {
        Self {
            agent,
            knowledge_available,
        }
    }

    pub async fn handle(
        &self,
        cmd: EvaluateModelsCommand,
    ) -> Result<EvaluationResult, EvaluateModelsError> {
        // 1. Validate
        let request = EvaluationRequest::new(
            cmd.prompt,
            cmd.model1,
            cmd.model2,
            cmd.model3,
            cmd.use_knowledge,
        )?;

        // 2. Compose
        let prompt = compose_evaluation_prompt(&request, self.knowledge_available);

        // 3. Delegate, exactly once
        tracing::info!(
            knowledge_used = knowledge_used(&request, self.knowledge_available),
            prompt_chars = prompt.chars().count(),
            "Running evaluation"
        );
        let response = self.agent.run(&prompt).await.map_err(|e| {
            tracing::error!("Evaluation failed: {}", e);
            EvaluateModelsError::Upstream(e.to_string())
        })?;

        // 4. Shape
        let metadata =
            EvaluationMetadata::describe(&request, self.knowledge_available, response.session_id);
        Ok(EvaluationResult::success(response.content, metadata))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::evaluation::{EvaluationField, KNOWLEDGE_HINT};
    use crate::ports::{AIError, AgentError, AgentResponse};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockAgent {
        prompts: Mutex<Vec<String>>,
        result: Result<AgentResponse, AgentError>,
    }

    impl MockAgent {
        fn answering(content: &str) -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
                result: Ok(AgentResponse::new(content, Some("session-1".to_string()))),
            }
        }

        fn failing(err: AgentError) -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
                result: Err(err),
            }
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Agent for MockAgent {
        async fn run(&self, prompt: &str) -> Result<AgentResponse, AgentError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.result.clone()
        }
    }

    fn command(use_knowledge: bool) -> EvaluateModelsCommand {
        EvaluateModelsCommand {
            prompt: "Explain X".to_string(),
            model1: "A".to_string(),
            model2: "B".to_string(),
            model3: "C".to_string(),
            use_knowledge,
        }
    }

    #[tokio::test]
    async fn evaluates_and_shapes_result() {
        let agent = Arc::new(MockAgent::answering("Model 1 wins"));
        let handler = EvaluateModelsHandler::new(agent.clone(), false);

        let result = handler.handle(command(false)).await.unwrap();

        assert_eq!(result.status, "success");
        assert_eq!(result.analysis, "Model 1 wins");
        assert_eq!(result.metadata.prompt_length, 9);
        assert_eq!(result.metadata.session_id.as_deref(), Some("session-1"));
        assert!(!result.metadata.knowledge_used);
        assert_eq!(agent.prompts().len(), 1);
    }

    #[tokio::test]
    async fn knowledge_hint_only_with_handle() {
        let with_handle = Arc::new(MockAgent::answering("ok"));
        let result = EvaluateModelsHandler::new(with_handle.clone(), true)
            .handle(command(true))
            .await
            .unwrap();
        assert!(result.metadata.knowledge_used);
        assert!(with_handle.prompts()[0].ends_with(KNOWLEDGE_HINT));

        let without_handle = Arc::new(MockAgent::answering("ok"));
        let result = EvaluateModelsHandler::new(without_handle.clone(), false)
            .handle(command(true))
            .await
            .unwrap();
        assert!(!result.metadata.knowledge_used);
        assert!(!without_handle.prompts()[0].contains(KNOWLEDGE_HINT));
    }

    #[tokio::test]
    async fn invalid_request_never_reaches_agent() {
        let agent = Arc::new(MockAgent::answering("unused"));
        let handler = EvaluateModelsHandler::new(agent.clone(), true);
        let mut cmd = command(false);
        cmd.model1 = "   ".to_string();

        let err = handler.handle(cmd).await.unwrap_err();

        assert_eq!(
            err,
            EvaluateModelsError::Validation(ValidationError::EmptyField {
                field: EvaluationField::Model1
            })
        );
        assert!(agent.prompts().is_empty());
    }

    #[tokio::test]
    async fn agent_failure_is_upstream_and_not_retried() {
        let agent = Arc::new(MockAgent::failing(AgentError::Provider(
            AIError::unavailable("model offline"),
        )));
        let handler = EvaluateModelsHandler::new(agent.clone(), false);

        let err = handler.handle(command(false)).await.unwrap_err();

        assert_eq!(
            err,
            EvaluateModelsError::Upstream("provider unavailable: model offline".to_string())
        );
        assert_eq!(agent.prompts().len(), 1);
    }
}
