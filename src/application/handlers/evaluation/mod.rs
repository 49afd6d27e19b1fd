//! Evaluation command handlers.

mod evaluate_models;

pub use evaluate_models::{EvaluateModelsCommand, EvaluateModelsError, EvaluateModelsHandler};
