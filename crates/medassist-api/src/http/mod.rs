//! HTTP/REST API layer for MedAssist.
//!
//! Axum-based JSON API under `/api/` with CORS and request tracing.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
