//! # qnahub-entity
//!
//! Entity models for QnAHub: questions, answers, users, and the read-side
//! view models produced by relational expansion.

pub mod answer;
pub mod question;
pub mod user;
