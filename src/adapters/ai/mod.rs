//! AI Provider Adapters.
//!
//! Implementations of the AIProvider and EmbeddingProvider ports.
//!
//! ## Available Adapters
//!
//! - `MockAIProvider` - Configurable mock for testing
//! - `OpenAIProvider` - OpenAI chat completions with function tools
//! - `OpenAIEmbeddingProvider` - OpenAI embeddings for the knowledge base

mod mock_provider;
mod openai_embeddings;
mod openai_provider;

pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use openai_embeddings::{OpenAIEmbeddingConfig, OpenAIEmbeddingProvider, MAX_BATCH_SIZE};
pub use openai_provider::{OpenAIConfig, OpenAIProvider};
