//! HTTP adapter for the knowledge base.
//!
//! # Endpoints
//!
//! - `GET /knowledge-status` - Readiness of the vector store
//! - `POST /load-knowledge` - Load the docs folder into the store

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::knowledge_router;
