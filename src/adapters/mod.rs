//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `ai` - OpenAI chat completions and embeddings, plus a mock provider
//! - `knowledge` - Document reading and the pgvector / in-memory stores
//! - `http` - Axum REST API

pub mod ai;
pub mod http;
pub mod knowledge;

pub use ai::{MockAIProvider, OpenAIEmbeddingProvider, OpenAIProvider};
pub use knowledge::{DocumentReader, InMemoryKnowledgeBase, PgVectorKnowledgeBase};
