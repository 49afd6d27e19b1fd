//! HTTP adapters - REST API implementations.
//!
//! Each module has its own HTTP adapter for endpoint exposure:
//! - `service` - `GET /`, `GET /health`
//! - `evaluation` - `POST /evaluate`
//! - `knowledge` - `GET /knowledge-status`, `POST /load-knowledge`

pub mod error;
pub mod evaluation;
pub mod knowledge;
pub mod router;
pub mod service;
pub mod state;

// Re-export key types for convenience
pub use error::ApiError;
pub use evaluation::evaluation_router;
pub use knowledge::knowledge_router;
pub use router::{api_router, cors_layer};
pub use service::service_router;
pub use state::ApiState;
