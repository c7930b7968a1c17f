//! Provider adapter seam.

use std::fmt;

use async_trait::async_trait;

use super::error::ProviderError;
use super::types::Message;

/// Trait for LLM providers with different API formats.
///
/// `history` is the conversation minus its most recent turn; `current` is that
/// turn. Adapters that take a flat message list reassemble the two; adapters
/// with chat-session semantics seed a context from `history` and submit
/// `current` as the new input.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Generate a reply to `current` given the preceding conversation.
    async fn generate(
        &self,
        history: &[Message],
        current: &Message,
    ) -> Result<String, ProviderError>;
}

/// Identifies which upstream provider an endpoint relays to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    OpenAi,
    Gemini,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::OpenAi => write!(f, "openai"),
            ProviderKind::Gemini => write!(f, "gemini"),
        }
    }
}
