//! Knowledge base domain types.
//!
//! - `document` - source documents, chunking and retrieved chunks
//! - `status` - vector store readiness

mod document;
mod status;

pub use document::{chunk_text, Document, DocumentChunk, RetrievedChunk, DEFAULT_CHUNK_SIZE};
pub use status::KnowledgeStatus;
