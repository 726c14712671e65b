// src/client.rs
// Thin adapter over the chat-completions endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::prompt::SYSTEM_INSTRUCTION;

const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";
const MODEL: &str = "gpt-4o-2024-08-06";
// Low temperature favors consistent structural decisions over rewriting.
const TEMPERATURE: f32 = 0.2;
const MAX_TOKENS: u32 = 2500;

/// Completion backend seam. Implement this to swap in another provider
/// (or a mock in tests).
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
    fn model_name(&self) -> &str;
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    ConnectionFailed(String),

    #[error("completion service returned HTTP {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("invalid completion response: {0}")]
    InvalidResponse(String),

    #[error("completion response contained no choices")]
    EmptyResponse,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: &'static str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// OpenAI-backed completion client. One fixed model, no retries, no
/// client-side timeout beyond the transport default, so callers must
/// tolerate a call that takes seconds.
pub struct OpenAiClient {
    api_key: String,
    client: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CompletionBackend for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        debug!(model = MODEL, prompt_len = prompt.len(), "Sending completion request");

        let req = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_INSTRUCTION.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt.to_string(),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(OPENAI_CHAT_URL)
            .bearer_auth(&self.api_key)
            .json(&req)
            .send()
            .await
            .map_err(|e| CompletionError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::InvalidResponse(e.to_string()))?;

        let first = parsed.choices.first().ok_or(CompletionError::EmptyResponse)?;
        Ok(first.message.content.trim().to_string())
    }

    fn model_name(&self) -> &str {
        MODEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parsing_takes_first_choice() {
        let raw = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "  A\n\nB  "}, "finish_reason": "stop"},
                {"index": 1, "message": {"role": "assistant", "content": "ignored"}, "finish_reason": "stop"}
            ],
            "usage": {"total_tokens": 42}
        }"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content.trim(), "A\n\nB");
    }

    #[test]
    fn test_request_serializes_two_messages() {
        let req = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage { role: "system", content: "sys".into() },
                ChatMessage { role: "user", content: "usr".into() },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["messages"].as_array().unwrap().len(), 2);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["max_tokens"], 2500);
    }

    #[test]
    fn test_error_display_carries_message() {
        let err = CompletionError::ConnectionFailed("rate limited".into());
        assert!(err.to_string().contains("rate limited"));
    }
}
