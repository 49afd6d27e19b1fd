//! PostgreSQL + pgvector implementation of KnowledgeBase.
//!
//! Chunks live in one table, `"<schema>"."<table>"`:
//!
//! | column | type |
//! |---|---|
//! | `id` | `TEXT PRIMARY KEY` |
//! | `name` | `TEXT` |
//! | `meta_data` | `JSONB` (`{"chunk": <index>}`) |
//! | `content` | `TEXT` |
//! | `content_hash` | `TEXT` |
//! | `embedding` | `vector(<dimensions>)` |
//! | `created_at` | `TIMESTAMPTZ` |
//!
//! Search ranks rows by `0.7 * cosine similarity + 0.3 * full-text rank`.
//! Vectors cross the wire as pgvector text literals cast with `::vector`.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::config::KnowledgeConfig;
use crate::domain::knowledge::{DocumentChunk, RetrievedChunk, DEFAULT_CHUNK_SIZE};
use crate::ports::{EmbeddingProvider, KnowledgeBase, KnowledgeError, LoadSummary};

use super::document_reader::DocumentReader;

/// Weight of vector similarity in the hybrid score.
const VECTOR_WEIGHT: f64 = 0.7;
/// Weight of full-text rank in the hybrid score.
const TEXT_WEIGHT: f64 = 0.3;

impl From<sqlx::Error> for KnowledgeError {
    fn from(err: sqlx::Error) -> Self {
        KnowledgeError::Database(err.to_string())
    }
}

/// Knowledge base stored in Postgres with the pgvector extension.
pub struct PgVectorKnowledgeBase {
    pool: PgPool,
    embedder: Arc<dyn EmbeddingProvider>,
    reader: DocumentReader,
    schema: String,
    table: String,
    dimensions: usize,
    chunk_size: usize,
}

impl PgVectorKnowledgeBase {
    /// Creates the store with a lazily connecting pool.
    ///
    /// No connection is opened here; the first query does that. Fails only
    /// when the database URL cannot be parsed.
    pub fn connect_lazy(
        config: &KnowledgeConfig,
        embedder: Arc<dyn EmbeddingProvider>,
    ) -> Result<Self, KnowledgeError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .connect_lazy(&config.database_url)?;

        Ok(Self::new(pool, config, embedder))
    }

    pub fn new(pool: PgPool, config: &KnowledgeConfig, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            pool,
            embedder,
            reader: DocumentReader::new(config.docs_path.clone()),
            schema: config.schema.clone(),
            table: config.table_name.clone(),
            dimensions: config.embedding_dimensions,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Quoted `"schema"."table"` reference.
    fn qualified_table(&self) -> String {
        format!("{}.{}", quote_ident(&self.schema), quote_ident(&self.table))
    }

    async fn ensure_table(&self) -> Result<(), KnowledgeError> {
        let table = self.qualified_table();

        sqlx::query("CREATE EXTENSION IF NOT EXISTS vector")
            .execute(&self.pool)
            .await?;
        sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quote_ident(&self.schema)))
            .execute(&self.pool)
            .await?;
        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {table} (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                meta_data JSONB NOT NULL DEFAULT '{{}}'::jsonb,
                content TEXT NOT NULL,
                content_hash TEXT NOT NULL,
                embedding vector({dimensions}) NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
            dimensions = self.dimensions,
        ))
        .execute(&self.pool)
        .await?;
        sqlx::query(&format!(
            "CREATE INDEX IF NOT EXISTS {} ON {table} USING GIN (to_tsvector('english', content))",
            quote_ident(&format!("{}_content_fts", self.table)),
        ))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn existing_ids(&self, ids: &[String]) -> Result<HashSet<String>, KnowledgeError> {
        if ids.is_empty() {
            return Ok(HashSet::new());
        }

        let rows = sqlx::query(&format!(
            "SELECT id FROM {} WHERE id = ANY($1)",
            self.qualified_table()
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| row.try_get::<String, _>("id").map_err(KnowledgeError::from))
            .collect()
    }

    fn check_dimensions(&self, vector: &[f32]) -> Result<(), KnowledgeError> {
        if vector.len() != self.dimensions {
            return Err(KnowledgeError::DimensionMismatch {
                expected: self.dimensions,
                actual: vector.len(),
            });
        }
        Ok(())
    }

    async fn write_chunks(
        &self,
        chunks: &[DocumentChunk],
        vectors: &[Vec<f32>],
        overwrite: bool,
    ) -> Result<(), KnowledgeError> {
        let conflict = if overwrite {
            r#"DO UPDATE SET
                name = EXCLUDED.name,
                meta_data = EXCLUDED.meta_data,
                content = EXCLUDED.content,
                content_hash = EXCLUDED.content_hash,
                embedding = EXCLUDED.embedding,
                created_at = now()"#
        } else {
            "DO NOTHING"
        };
        let statement = format!(
            r#"
            INSERT INTO {} (id, name, meta_data, content, content_hash, embedding)
            VALUES ($1, $2, $3::jsonb, $4, $5, $6::vector)
            ON CONFLICT (id) {conflict}
            "#,
            self.qualified_table()
        );

        let mut tx = self.pool.begin().await?;
        for (chunk, vector) in chunks.iter().zip(vectors) {
            sqlx::query(&statement)
                .bind(&chunk.id)
                .bind(&chunk.name)
                .bind(serde_json::json!({ "chunk": chunk.chunk_index }).to_string())
                .bind(&chunk.content)
                .bind(&chunk.content_hash)
                .bind(vector_literal(vector))
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        Ok(())
    }
}

#[async_trait]
impl KnowledgeBase for PgVectorKnowledgeBase {
    async fn table_exists(&self) -> Result<bool, KnowledgeError> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM information_schema.tables
                WHERE table_schema = $1 AND table_name = $2
            )
            "#,
        )
        .bind(&self.schema)
        .bind(&self.table)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn load(&self, recreate: bool) -> Result<LoadSummary, KnowledgeError> {
        self.ensure_table().await?;

        let documents = self.reader.read_all().await?;
        let chunks: Vec<DocumentChunk> = documents
            .iter()
            .flat_map(|document| document.chunks(self.chunk_size))
            .collect();

        let pending: Vec<DocumentChunk> = if recreate {
            chunks.clone()
        } else {
            let ids: Vec<String> = chunks.iter().map(|c| c.id.clone()).collect();
            let existing = self.existing_ids(&ids).await?;
            chunks
                .iter()
                .filter(|c| !existing.contains(&c.id))
                .cloned()
                .collect()
        };

        let summary = LoadSummary {
            documents: documents.len(),
            chunks: chunks.len(),
            written: pending.len(),
            skipped: chunks.len() - pending.len(),
        };

        if !pending.is_empty() {
            let texts: Vec<String> = pending.iter().map(|c| c.content.clone()).collect();
            let vectors = self.embedder.embed_batch(&texts).await?;
            for vector in &vectors {
                self.check_dimensions(vector)?;
            }
            self.write_chunks(&pending, &vectors, recreate).await?;
        }

        tracing::info!(
            table = %self.qualified_table(),
            documents = summary.documents,
            chunks = summary.chunks,
            written = summary.written,
            skipped = summary.skipped,
            recreate,
            "knowledge base loaded"
        );

        Ok(summary)
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<RetrievedChunk>, KnowledgeError> {
        let embedding = self.embedder.embed(query).await?;
        self.check_dimensions(&embedding)?;

        let rows = sqlx::query(&format!(
            r#"
            SELECT
                name,
                COALESCE((meta_data->>'chunk')::BIGINT, 0) AS chunk_index,
                content,
                ({VECTOR_WEIGHT} * (1 - (embedding <=> $1::vector))
                    + {TEXT_WEIGHT} * ts_rank_cd(to_tsvector('english', content), plainto_tsquery('english', $2))
                )::FLOAT8 AS score
            FROM {}
            ORDER BY score DESC
            LIMIT $3
            "#,
            self.qualified_table()
        ))
        .bind(vector_literal(&embedding))
        .bind(query)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                Ok(RetrievedChunk {
                    name: row.try_get("name")?,
                    chunk_index: row.try_get::<i64, _>("chunk_index")?.max(0) as usize,
                    content: row.try_get("content")?,
                    score: row.try_get("score")?,
                })
            })
            .collect()
    }
}

/// Double-quotes an identifier, escaping embedded quotes.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// pgvector text form, e.g. `[0.1,0.2]`.
fn vector_literal(vector: &[f32]) -> String {
    let values: Vec<String> = vector.iter().map(|v| v.to_string()).collect();
    format!("[{}]", values.join(","))
}
