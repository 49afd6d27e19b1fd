//! Knowledge base command and query handlers.

mod get_knowledge_status;
mod load_knowledge;

pub use get_knowledge_status::{GetKnowledgeStatusHandler, KnowledgeStatusReport};
pub use load_knowledge::{LoadKnowledgeCommand, LoadKnowledgeError, LoadKnowledgeHandler};
