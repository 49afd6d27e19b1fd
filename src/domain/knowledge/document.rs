//! Knowledge documents and their chunks.

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Default chunk size in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 5000;

/// Text extracted from one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File stem, e.g. `rubric` for `docs/rubric.pdf`.
    pub name: String,
    pub content: String,
}

impl Document {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Splits the document into chunks of at most `chunk_size` characters.
    pub fn chunks(&self, chunk_size: usize) -> Vec<DocumentChunk> {
        chunk_text(&self.content, chunk_size)
            .into_iter()
            .enumerate()
            .map(|(index, content)| DocumentChunk::new(&self.name, index, content))
            .collect()
    }
}

/// A unit of embedding and retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentChunk {
    /// Stable id derived from name, position and content.
    pub id: String,
    pub name: String,
    pub chunk_index: usize,
    pub content: String,
    /// SHA-256 of the content alone.
    pub content_hash: String,
}

impl DocumentChunk {
    pub fn new(name: &str, chunk_index: usize, content: impl Into<String>) -> Self {
        let content = content.into();
        let content_hash = format!("{:x}", Sha256::digest(content.as_bytes()));

        let mut hasher = Sha256::new();
        hasher.update(name.as_bytes());
        hasher.update(chunk_index.to_le_bytes());
        hasher.update(content_hash.as_bytes());
        let id = format!("{:x}", hasher.finalize());

        Self {
            id,
            name: name.to_string(),
            chunk_index,
            content,
            content_hash,
        }
    }
}

/// A chunk returned by a knowledge search, best match first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetrievedChunk {
    pub name: String,
    pub chunk_index: usize,
    pub content: String,
    pub score: f64,
}

/// Splits `text` into pieces of at most `chunk_size` characters.
///
/// A cut prefers the last paragraph break, then sentence end, then line break
/// found in the second half of the window. Cuts always land on character
/// boundaries, and whitespace-only pieces are dropped.
pub fn chunk_text(text: &str, chunk_size: usize) -> Vec<String> {
    let chunk_size = chunk_size.max(1);
    let mut chunks = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let window_end = rest
            .char_indices()
            .nth(chunk_size)
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());

        let cut = if window_end == rest.len() {
            window_end
        } else {
            preferred_cut(&rest[..window_end]).unwrap_or(window_end)
        };

        let piece = rest[..cut].trim();
        if !piece.is_empty() {
            chunks.push(piece.to_string());
        }
        rest = &rest[cut..];
    }

    chunks
}

/// Byte offset just after the best break in the second half of `window`.
fn preferred_cut(window: &str) -> Option<usize> {
    let half = window.len() / 2;
    ["\n\n", ". ", "\n"].iter().find_map(|separator| {
        window
            .rfind(separator)
            .map(|idx| idx + separator.len())
            .filter(|&cut| cut > half)
    })
}
