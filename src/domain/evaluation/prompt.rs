//! Evaluation prompt composition.
//!
//! Pure functions: the same request always yields byte-identical text.

use super::request::EvaluationRequest;

/// Closing instruction of every evaluation prompt.
pub const EVALUATION_INSTRUCTION: &str =
    "Please evaluate Model 1 against Models 2 and 3 according to your instructions.";

/// Appended when knowledge is requested and a knowledge base is configured.
pub const KNOWLEDGE_HINT: &str = "Please search your knowledge base for relevant evaluation criteria and best practices before providing your analysis.";

const HEADER: &str = "Please analyze and compare the following AI model responses:";

/// Whether the evaluation counts as knowledge-assisted.
pub fn knowledge_used(request: &EvaluationRequest, knowledge_available: bool) -> bool {
    request.use_knowledge() && knowledge_available
}

/// Builds the prompt handed to the evaluator agent.
///
/// The inputs are interpolated verbatim. The knowledge hint is appended only
/// when [`knowledge_used`] holds.
pub fn compose_evaluation_prompt(request: &EvaluationRequest, knowledge_available: bool) -> String {
    let mut prompt = format!(
        "{HEADER}\n\n\
         **Original Prompt:**\n{}\n\n\
         **Model 1 Response:**\n{}\n\n\
         **Model 2 Response:**\n{}\n\n\
         **Model 3 Response:**\n{}\n\n\
         {EVALUATION_INSTRUCTION}",
        request.prompt(),
        request.model1(),
        request.model2(),
        request.model3(),
    );

    if knowledge_used(request, knowledge_available) {
        prompt.push_str("\n\n");
        prompt.push_str(KNOWLEDGE_HINT);
    }

    prompt
}
