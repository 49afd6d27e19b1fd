//! Hustle Buddy - AI Model Response Evaluation API
//!
//! This crate compares three AI model responses to one prompt through an
//! evaluator agent, optionally grounded in a PDF knowledge base stored in
//! Postgres with pgvector.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
