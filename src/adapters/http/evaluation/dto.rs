//! HTTP DTOs for the evaluation endpoint.

use serde::Deserialize;

use crate::application::handlers::EvaluateModelsCommand;

/// Body of `POST /evaluate`.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluateRequest {
    pub prompt: String,
    pub model1: String,
    pub model2: String,
    pub model3: String,
    #[serde(default)]
    pub use_knowledge: bool,
}

impl From<EvaluateRequest> for EvaluateModelsCommand {
    fn from(request: EvaluateRequest) -> Self {
        Self {
            prompt: request.prompt,
            model1: request.model1,
            model2: request.model2,
            model3: request.model3,
            use_knowledge: request.use_knowledge,
        }
    }
}
