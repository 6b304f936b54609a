//! Networking for the question-answering backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the single `POST /ask` call and `types` defines its request
//! and response schema.

pub mod api;
pub mod types;
