//! # qnahub-api
//!
//! HTTP API layer for QnAHub built on Axum.
//!
//! Provides the REST endpoints, the bearer-token extractor, DTOs, and the
//! mapping from domain errors to HTTP responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
