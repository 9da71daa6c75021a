//! HTTP-level integration tests for the QnAHub API.

mod helpers;
mod qna_api;
