//! Infrastructure layer for MedAssist.
//!
//! Contains implementations of the traits defined in `medassist-core`:
//! the in-memory `Storage`, the OpenAI-compatible `LlmProvider`, and
//! configuration loading from disk and environment.

pub mod config;
pub mod llm;
pub mod memory;
