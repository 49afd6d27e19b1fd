//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `evaluation` - Comparison requests, prompt composition and result envelope
//! - `knowledge` - Knowledge documents, chunking and store readiness

pub mod evaluation;
pub mod knowledge;
