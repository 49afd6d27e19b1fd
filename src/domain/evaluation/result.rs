//! Successful evaluation outcome.

use serde::Serialize;

use super::prompt::knowledge_used;
use super::request::{char_len, EvaluationRequest};

/// Request statistics reported next to the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationMetadata {
    pub prompt_length: usize,
    pub model1_length: usize,
    pub model2_length: usize,
    pub model3_length: usize,
    pub knowledge_used: bool,
    /// Serialized as `null` when the agent reports no session.
    pub session_id: Option<String>,
}

impl EvaluationMetadata {
    /// Describes `request` as evaluated by an agent session.
    pub fn describe(
        request: &EvaluationRequest,
        knowledge_available: bool,
        session_id: Option<String>,
    ) -> Self {
        Self {
            prompt_length: char_len(request.prompt()),
            model1_length: char_len(request.model1()),
            model2_length: char_len(request.model2()),
            model3_length: char_len(request.model3()),
            knowledge_used: knowledge_used(request, knowledge_available),
            session_id,
        }
    }
}

/// The success envelope of an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    pub status: &'static str,
    pub analysis: String,
    pub metadata: EvaluationMetadata,
}

impl EvaluationResult {
    pub fn success(analysis: impl Into<String>, metadata: EvaluationMetadata) -> Self {
        Self {
            status: "success",
            analysis: analysis.into(),
            metadata,
        }
    }
}
