//! Validated comparison request.

use std::fmt;
use thiserror::Error;

/// Maximum characters accepted in the original prompt.
pub const MAX_PROMPT_CHARS: usize = 10_000;

/// Maximum characters accepted in each candidate model response.
pub const MAX_RESPONSE_CHARS: usize = 50_000;

/// The four text inputs of a comparison request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvaluationField {
    Prompt,
    Model1,
    Model2,
    Model3,
}

impl EvaluationField {
    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationField::Prompt => "prompt",
            EvaluationField::Model1 => "model1",
            EvaluationField::Model2 => "model2",
            EvaluationField::Model3 => "model3",
        }
    }
}

impl fmt::Display for EvaluationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a comparison request is rejected before any downstream work.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field cannot be empty")]
    EmptyField { field: EvaluationField },

    #[error("Prompt too long (max 10,000 characters)")]
    PromptTooLong { length: usize },

    #[error("{field} response too long (max 50,000 characters)")]
    ResponseTooLong { field: EvaluationField, length: usize },
}

impl ValidationError {
    /// The offending field.
    pub fn field(&self) -> EvaluationField {
        match self {
            ValidationError::EmptyField { field } => *field,
            ValidationError::PromptTooLong { .. } => EvaluationField::Prompt,
            ValidationError::ResponseTooLong { field, .. } => *field,
        }
    }
}

/// A comparison request whose invariants have been checked.
///
/// Only constructible through [`EvaluationRequest::new`]; fields are read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationRequest {
    prompt: String,
    model1: String,
    model2: String,
    model3: String,
    use_knowledge: bool,
}

impl EvaluationRequest {
    /// Validates the raw inputs.
    ///
    /// All four fields are checked for emptiness first (after trimming), then
    /// the prompt length, then each response length in order. Lengths count
    /// characters, and the stored text is left untrimmed.
    pub fn new(
        prompt: impl Into<String>,
        model1: impl Into<String>,
        model2: impl Into<String>,
        model3: impl Into<String>,
        use_knowledge: bool,
    ) -> Result<Self, ValidationError> {
        let request = Self {
            prompt: prompt.into(),
            model1: model1.into(),
            model2: model2.into(),
            model3: model3.into(),
            use_knowledge,
        };

        for (field, value) in request.fields() {
            if value.trim().is_empty() {
                return Err(ValidationError::EmptyField { field });
            }
        }

        let prompt_length = char_len(&request.prompt);
        if prompt_length > MAX_PROMPT_CHARS {
            return Err(ValidationError::PromptTooLong {
                length: prompt_length,
            });
        }

        for (field, value) in request.responses() {
            let length = char_len(value);
            if length > MAX_RESPONSE_CHARS {
                return Err(ValidationError::ResponseTooLong { field, length });
            }
        }

        Ok(request)
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn model1(&self) -> &str {
        &self.model1
    }

    pub fn model2(&self) -> &str {
        &self.model2
    }

    pub fn model3(&self) -> &str {
        &self.model3
    }

    pub fn use_knowledge(&self) -> bool {
        self.use_knowledge
    }

    fn fields(&self) -> [(EvaluationField, &str); 4] {
        [
            (EvaluationField::Prompt, self.prompt.as_str()),
            (EvaluationField::Model1, self.model1.as_str()),
            (EvaluationField::Model2, self.model2.as_str()),
            (EvaluationField::Model3, self.model3.as_str()),
        ]
    }

    fn responses(&self) -> [(EvaluationField, &str); 3] {
        [
            (EvaluationField::Model1, self.model1.as_str()),
            (EvaluationField::Model2, self.model2.as_str()),
            (EvaluationField::Model3, self.model3.as_str()),
        ]
    }
}

/// Length in characters, the unit the limits are expressed in.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
