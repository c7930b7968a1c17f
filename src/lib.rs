//! Chatrelay - a minimal HTTP relay that forwards chat conversations to LLM
//! providers and returns the generated text.

pub mod config;
pub mod handlers;
pub mod llm;
pub mod response;
pub mod server;
