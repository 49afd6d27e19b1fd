//! In-memory KnowledgeBase for tests and local runs without Postgres.
//!
//! Documents are supplied up front and chunked on `load`. Search scores a
//! chunk by the fraction of query terms it contains.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::knowledge::{Document, DocumentChunk, RetrievedChunk, DEFAULT_CHUNK_SIZE};
use crate::ports::{KnowledgeBase, KnowledgeError, LoadSummary};

/// Knowledge base held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryKnowledgeBase {
    sources: Vec<Document>,
    chunk_size: usize,
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    /// `None` until the first load creates the table.
    chunks: Option<BTreeMap<String, DocumentChunk>>,
    failure: Option<String>,
    loads: Vec<bool>,
}

impl InMemoryKnowledgeBase {
    pub fn new(sources: Vec<Document>) -> Self {
        Self {
            sources,
            chunk_size: DEFAULT_CHUNK_SIZE,
            state: Mutex::new(State::default()),
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Makes every following operation fail with a database error.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.lock().failure = Some(message.into());
        self
    }

    /// The `recreate` flag of every load so far.
    pub fn loads(&self) -> Vec<bool> {
        self.lock().loads.clone()
    }

    /// Number of stored chunks.
    pub fn chunk_count(&self) -> usize {
        self.lock().chunks.as_ref().map_or(0, BTreeMap::len)
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_failure(state: &State) -> Result<(), KnowledgeError> {
        match &state.failure {
            Some(message) => Err(KnowledgeError::database(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl KnowledgeBase for InMemoryKnowledgeBase {
    async fn table_exists(&self) -> Result<bool, KnowledgeError> {
        let state = self.lock();
        Self::check_failure(&state)?;
        Ok(state.chunks.is_some())
    }

    async fn load(&self, recreate: bool) -> Result<LoadSummary, KnowledgeError> {
        let mut state = self.lock();
        state.loads.push(recreate);
        Self::check_failure(&state)?;

        let chunks: Vec<DocumentChunk> = self
            .sources
            .iter()
            .flat_map(|document| document.chunks(self.chunk_size))
            .collect();

        let stored = state.chunks.get_or_insert_with(BTreeMap::new);
        let mut summary = LoadSummary {
            documents: self.sources.len(),
            chunks: chunks.len(),
            ..LoadSummary::default()
        };
        for chunk in chunks {
            if !recreate && stored.contains_key(&chunk.id) {
                summary.skipped += 1;
                continue;
            }
            stored.insert(chunk.id.clone(), chunk);
            summary.written += 1;
        }

        Ok(summary)
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<RetrievedChunk>, KnowledgeError> {
        let state = self.lock();
        Self::check_failure(&state)?;

        let terms: Vec<String> = query
            .split_whitespace()
            .map(|term| term.to_lowercase())
            .collect();
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let mut hits: Vec<RetrievedChunk> = state
            .chunks
            .iter()
            .flat_map(BTreeMap::values)
            .filter_map(|chunk| {
                let content = chunk.content.to_lowercase();
                let matched = terms.iter().filter(|term| content.contains(term.as_str())).count();
                (matched > 0).then(|| RetrievedChunk {
                    name: chunk.name.clone(),
                    chunk_index: chunk.chunk_index,
                    content: chunk.content.clone(),
                    score: matched as f64 / terms.len() as f64,
                })
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.chunk_index.cmp(&b.chunk_index))
        });
        hits.truncate(limit);

        Ok(hits)
    }
}
