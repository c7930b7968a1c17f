//! Provider registry for managing LLM provider instances.

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Client;
use tracing::{info, warn};

use super::gemini::GeminiProvider;
use super::openai::OpenAiProvider;
use super::provider::{ChatProvider, ProviderKind};

/// Registry of LLM providers, keyed by provider kind.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<ProviderKind, Arc<dyn ChatProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize providers from environment variables.
    ///
    /// Credentials are read once here, at startup; each provider shares one
    /// HTTP client that is reused across requests.
    pub fn from_env() -> Self {
        let mut registry = Self::new();
        let client = Client::new();

        // OpenAI (an AI gateway may inject an alternate base URL)
        if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
            let base_url = std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| OpenAiProvider::DEFAULT_BASE_URL.to_string());
            let provider = OpenAiProvider::new(client.clone(), api_key, base_url);
            registry.register(ProviderKind::OpenAi, Arc::new(provider));
            info!("Registered OpenAI provider");
        }

        // Gemini
        if let Ok(api_key) = std::env::var("GOOGLE_GENERATIVE_AI_API_KEY")
            .or_else(|_| std::env::var("GEMINI_API_KEY"))
        {
            let provider = GeminiProvider::new(client, api_key);
            registry.register(ProviderKind::Gemini, Arc::new(provider));
            info!("Registered Gemini provider");
        }

        if registry.is_empty() {
            warn!(
                "No LLM providers configured. \
                Set OPENAI_API_KEY or GOOGLE_GENERATIVE_AI_API_KEY."
            );
        }

        registry
    }

    /// Register a provider implementation.
    pub fn register(&mut self, kind: ProviderKind, implementation: Arc<dyn ChatProvider>) {
        self.providers.insert(kind, implementation);
    }

    /// Get a provider by kind.
    pub fn get(&self, kind: ProviderKind) -> Option<Arc<dyn ChatProvider>> {
        self.providers.get(&kind).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
