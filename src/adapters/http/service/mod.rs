//! HTTP adapter for service discovery and liveness.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::service_router;
