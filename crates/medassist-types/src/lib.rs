//! Shared domain types for MedAssist.
//!
//! This crate contains the types used across the MedAssist workspace:
//! users, conversations, messages, LLM request/response shapes,
//! configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod user;
