//! HTTP adapter for model response evaluation.
//!
//! # Endpoints
//!
//! - `POST /evaluate` - Compare Model 1 against Models 2 and 3

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::evaluation_router;
