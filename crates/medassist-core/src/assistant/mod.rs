//! Assistant gateway: turns chat history into completion requests.
//!
//! - `gateway`: `AssistantGateway`, the single entry point to the provider
//! - `prompts`: fixed system instructions, quick-action prompts, fallbacks

pub mod gateway;
pub mod prompts;
