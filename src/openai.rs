//! Chat-completion adapter for the hosted OpenAI-compatible API.
//!
//! This is the only place the process talks to the network. Everything
//! above it depends on the [`ChatCompletion`] trait instead.

use crate::config::Config;
use crate::translator::{ChatCompletion, Message, TranslateError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

/// Client for the hosted chat-completion endpoint.
///
/// Endpoint URL, credential and model are injected through [`Config`];
/// nothing is read from ambient process state at call time.
pub struct OpenAiClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            api_url: config.openai_api_url.clone(),
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
        }
    }
}

#[async_trait]
impl ChatCompletion for OpenAiClient {
    async fn complete(&self, messages: &[Message]) -> Result<String, TranslateError> {
        let request = ChatRequest {
            model: &self.model,
            messages,
            max_tokens: 1000,
            temperature: 0.3,
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::Api { status, body });
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| TranslateError::Malformed(e.to_string()))?;

        // No choices means no content; callers receive an empty string
        // rather than an error.
        Ok(chat_response
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .unwrap_or_default())
    }
}
