//! Gemini provider with chat-session semantics over `generateContent`.

use async_trait::async_trait;
use reqwest::Client;

use super::error::ProviderError;
use super::provider::ChatProvider;
use super::types::{Message, Role};

/// Relays a conversation to the Gemini API as a history-seeded chat turn.
pub struct GeminiProvider {
    client: Client,
    api_key: String,
}

impl GeminiProvider {
    const BASE_URL: &'static str = "https://generativelanguage.googleapis.com/v1beta";
    const MODEL: &'static str = "gemini-3-pro-preview";

    pub fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }
}

#[async_trait]
impl ChatProvider for GeminiProvider {
    async fn generate(
        &self,
        history: &[Message],
        current: &Message,
    ) -> Result<String, ProviderError> {
        let url = format!("{}/models/{}:generateContent", Self::BASE_URL, Self::MODEL);
        let request = to_request(history, current);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, message });
        }

        let body: Response = response.json().await?;
        Ok(candidate_text(body))
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(serde::Serialize)]
struct Request {
    contents: Vec<Content>,
}

#[derive(serde::Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(serde::Serialize)]
struct Part {
    text: String,
}

#[derive(serde::Deserialize)]
struct Response {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(serde::Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(serde::Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(serde::Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Gemini only knows two parties: `assistant` turns become `model`, everything
/// else (`user`, `system`) collapses to `user`.
fn map_role(role: Role) -> &'static str {
    match role {
        Role::Assistant => "model",
        Role::User | Role::System => "user",
    }
}

/// History keeps its mapped roles; the current turn is always submitted as a
/// fresh `user` turn carrying the original text, matching chat-session send
/// semantics.
fn to_request(history: &[Message], current: &Message) -> Request {
    let mut contents: Vec<Content> = history.iter().map(to_content).collect();
    contents.push(Content {
        role: "user",
        parts: vec![Part {
            text: current.content.clone(),
        }],
    });

    Request { contents }
}

fn to_content(msg: &Message) -> Content {
    Content {
        role: map_role(msg.role),
        parts: vec![Part {
            text: msg.content.clone(),
        }],
    }
}

/// Text of the first candidate, parts joined.
fn candidate_text(response: Response) -> String {
    response
        .candidates
        .into_iter()
        .next()
        .map(|candidate| {
            candidate
                .content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(role: Role, content: &str) -> Message {
        Message {
            role,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_role_mapping_collapses_to_two_parties() {
        assert_eq!(map_role(Role::Assistant), "model");
        assert_eq!(map_role(Role::User), "user");
        assert_eq!(map_role(Role::System), "user");
        // Pure function: same input, same output.
        assert_eq!(map_role(Role::Assistant), map_role(Role::Assistant));
    }

    #[test]
    fn test_request_seeds_history_and_appends_current_turn() {
        let history = vec![msg(Role::User, "Hi"), msg(Role::Assistant, "Hello")];
        let current = msg(Role::User, "How are you?");

        let request = to_request(&history, &current);
        let json = serde_json::to_value(&request).unwrap();

        let contents = json["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[1]["parts"][0]["text"], "Hello");
        assert_eq!(contents[2]["role"], "user");
        assert_eq!(contents[2]["parts"][0]["text"], "How are you?");
    }

    #[test]
    fn test_single_message_yields_only_the_current_turn() {
        let current = msg(Role::User, "Hi");

        let request = to_request(&[], &current);
        let json = serde_json::to_value(&request).unwrap();

        let contents = json["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[0]["parts"][0]["text"], "Hi");
    }

    #[test]
    fn test_current_turn_is_sent_as_user_even_for_other_roles() {
        // A trailing system message is still submitted as a user turn; only
        // its text survives.
        let current = msg(Role::System, "Summarize the above.");

        let request = to_request(&[], &current);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Summarize the above.");
    }

    #[test]
    fn test_candidate_text_joins_parts_of_first_candidate() {
        let json = r#"{
            "candidates": [
                {
                    "content": {
                        "role": "model",
                        "parts": [{"text": "Hello"}, {"text": ", world"}]
                    },
                    "finishReason": "STOP"
                },
                {
                    "content": {"role": "model", "parts": [{"text": "ignored"}]}
                }
            ]
        }"#;

        let response: Response = serde_json::from_str(json).unwrap();
        assert_eq!(candidate_text(response), "Hello, world");
    }

    #[test]
    fn test_candidate_text_empty_without_candidates() {
        let response: Response = serde_json::from_str("{}").unwrap();
        assert_eq!(candidate_text(response), "");
    }
}
