//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Chat completions with function tools
//! - `EmbeddingProvider` - Text embeddings for similarity search
//! - `KnowledgeBase` - Document-backed vector store
//! - `Agent` - The long-lived evaluator delegate

mod agent;
mod ai_provider;
mod embedding;
mod knowledge_base;

pub use agent::{Agent, AgentError, AgentResponse};
pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, TokenUsage, ToolCall, ToolDefinition,
};
pub use embedding::EmbeddingProvider;
pub use knowledge_base::{KnowledgeBase, KnowledgeError, LoadSummary};
