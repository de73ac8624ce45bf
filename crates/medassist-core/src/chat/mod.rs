//! Chat orchestration for MedAssist.
//!
//! `ChatService` ties the `Storage` trait to the `AssistantGateway`.

pub mod service;
