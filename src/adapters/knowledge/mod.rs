//! Knowledge Base Adapters.
//!
//! - `DocumentReader` - PDF/text/markdown extraction from the docs folder
//! - `PgVectorKnowledgeBase` - Postgres + pgvector store with hybrid search
//! - `InMemoryKnowledgeBase` - Process-local store for tests

mod document_reader;
mod in_memory;
mod pgvector_knowledge_base;

pub use document_reader::DocumentReader;
pub use in_memory::InMemoryKnowledgeBase;
pub use pgvector_knowledge_base::PgVectorKnowledgeBase;
