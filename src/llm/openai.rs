//! OpenAI provider speaking the Responses API.

use async_trait::async_trait;
use reqwest::Client;

use super::error::ProviderError;
use super::provider::ChatProvider;
use super::types::{Message, Role};

/// Relays a conversation to the OpenAI Responses API in a single shot.
pub struct OpenAiProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenAiProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";
    const MODEL: &'static str = "gpt-5.2-pro";

    pub fn new(client: Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl ChatProvider for OpenAiProvider {
    async fn generate(
        &self,
        history: &[Message],
        current: &Message,
    ) -> Result<String, ProviderError> {
        let url = format!("{}/responses", self.base_url);
        let request = to_request(history, current);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, message });
        }

        let body: Response = response.json().await?;
        Ok(output_text(body))
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(serde::Serialize)]
struct Request {
    model: String,
    input: Vec<InputMessage>,
}

#[derive(serde::Serialize)]
struct InputMessage {
    role: Role,
    content: String,
}

#[derive(serde::Deserialize)]
struct Response {
    output: Vec<OutputItem>,
}

/// Output items also cover non-message kinds (e.g. reasoning), which carry no
/// content parts.
#[derive(serde::Deserialize)]
struct OutputItem {
    #[serde(rename = "type")]
    item_type: String,
    #[serde(default)]
    content: Vec<OutputContent>,
}

#[derive(serde::Deserialize)]
struct OutputContent {
    #[serde(rename = "type")]
    content_type: String,
    #[serde(default)]
    text: String,
}

/// The full conversation goes out verbatim, original roles preserved.
fn to_request(history: &[Message], current: &Message) -> Request {
    let input = history
        .iter()
        .chain(std::iter::once(current))
        .map(|msg| InputMessage {
            role: msg.role,
            content: msg.content.clone(),
        })
        .collect();

    Request {
        model: OpenAiProvider::MODEL.to_string(),
        input,
    }
}

/// Mirrors the SDK's `output_text` convenience: every `output_text` part of
/// every `message` output item, concatenated.
fn output_text(response: Response) -> String {
    response
        .output
        .into_iter()
        .filter(|item| item.item_type == "message")
        .flat_map(|item| item.content)
        .filter(|part| part.content_type == "output_text")
        .map(|part| part.text)
        .collect::<Vec<_>>()
        .join("")
}

// ============================================================================
// Tests
// ============================================================================
