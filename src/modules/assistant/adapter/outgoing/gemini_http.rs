use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assistant::application::ports::outgoing::{ChatModel, ChatModelError};

const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const CHAT_TEMPERATURE: f32 = 0.7;

/// Thin client for the generative-language HTTP endpoint. No retry, no
/// backoff, no timeout beyond reqwest's defaults; failures become one of
/// the two canned replies upstream.
pub struct GeminiHttpClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiHttpClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Reads `GEMINI_API_KEY`; an absent key still builds a client, and every
    /// call then fails into the credentials bucket, as the source did.
    pub fn from_env() -> Self {
        Self::new(std::env::var("GEMINI_API_KEY").unwrap_or_default())
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

//
// ──────────────────────────────────────────────────────────
// Wire types
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

fn text_of(content: Content) -> Option<String> {
    content
        .parts
        .into_iter()
        .filter_map(|p| p.text)
        .find(|t| !t.is_empty())
}

fn first_text(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates?
        .into_iter()
        .filter_map(|c| c.content)
        .find_map(text_of)
}

impl GeminiHttpClient {
    fn endpoint(&self) -> String {
        format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key
        )
    }
}

#[async_trait]
impl ChatModel for GeminiHttpClient {
    async fn generate(
        &self,
        prompt: &str,
        system_instruction: &str,
    ) -> Result<String, ChatModelError> {
        if self.api_key.is_empty() {
            return Err(ChatModelError::RequestFailed(
                "API_KEY is not configured".to_string(),
            ));
        }

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            system_instruction: Content {
                parts: vec![Part {
                    text: Some(system_instruction.to_string()),
                }],
            },
            generation_config: GenerationConfig {
                temperature: CHAT_TEMPERATURE,
            },
        };

        debug!("Forwarding chat prompt to {}", self.model);

        let response = self
            .client
            .post(self.endpoint())
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatModelError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ChatModelError::RequestFailed(format!(
                "model endpoint returned {}: {}",
                status, detail
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ChatModelError::RequestFailed(e.to_string()))?;

        first_text(parsed).ok_or(ChatModelError::EmptyReply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_text_picks_the_first_non_empty_part() {
        let parsed: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    { "content": { "parts": [ { "text": "" }, { "text": "hello there" } ] } }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(first_text(parsed).as_deref(), Some("hello there"));
    }

    #[test]
    fn test_missing_candidates_mean_no_reply() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();

        assert_eq!(first_text(parsed), None);
    }

    #[test]
    fn test_candidates_without_text_mean_no_reply() {
        let parsed: GenerateContentResponse = serde_json::from_str(
            r#"{ "candidates": [ { "content": { "parts": [ {} ] } } ] }"#,
        )
        .unwrap();

        assert_eq!(first_text(parsed), None);
    }

    #[tokio::test]
    async fn test_a_missing_key_fails_into_the_credentials_bucket() {
        let client = GeminiHttpClient::new(String::new());

        let res = client.generate("hi", "be nice").await;

        match res {
            Err(ChatModelError::RequestFailed(msg)) => assert!(msg.contains("API_KEY")),
            other => panic!("expected RequestFailed, got {:?}", other.map(|_| ())),
        }
    }
}
