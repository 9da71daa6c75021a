//! # qnahub-service
//!
//! Business logic layer for QnAHub. `QnaService` orchestrates the stores
//! into the five question/answer operations; `AcceptGuard` evaluates the
//! acceptance authorization rule.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references to the store traits.

pub mod context;
pub mod qna;

pub use context::RequestContext;
pub use qna::{AcceptGuard, QnaService};
