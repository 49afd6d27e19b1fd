//! Model response evaluation.
//!
//! - `request` - validated comparison request and its limits
//! - `prompt` - pure evaluation prompt composition
//! - `result` - success envelope and request metadata

mod prompt;
mod request;
mod result;

pub use prompt::{compose_evaluation_prompt, knowledge_used, EVALUATION_INSTRUCTION, KNOWLEDGE_HINT};
pub use request::{
    char_len, EvaluationField, EvaluationRequest, ValidationError, MAX_PROMPT_CHARS,
    MAX_RESPONSE_CHARS,
};
pub use result::{EvaluationMetadata, EvaluationResult};
