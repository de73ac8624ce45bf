//! Business logic and repository trait definitions for MedAssist.
//!
//! This crate defines the "ports" (storage and LLM provider traits) that the
//! infrastructure layer implements, plus the services built on them. It
//! depends only on `medassist-types` -- never on `medassist-infra`.

pub mod assistant;
pub mod chat;
pub mod llm;
pub mod repository;
