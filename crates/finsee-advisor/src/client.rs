//! Chat-completion client for the hosted advisor model.

use std::time::Duration;

use async_trait::async_trait;
use finsee_core::config::{AdvisorConfig, API_KEY_ENV};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;
use crate::persona;

/// Anything that can answer a financial question with prose.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, query: &str) -> Result<String, AdvisorError>;
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
    top_p: f64,
    stream: bool,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

/// Client for Groq's OpenAI-compatible chat completions endpoint.
#[derive(Debug)]
pub struct GroqClient {
    http: Client,
    api_key: String,
    config: AdvisorConfig,
}

impl GroqClient {
    /// Build a client with an explicit key. An empty key is rejected here
    /// so a misconfigured deployment fails before the first request.
    pub fn new(api_key: impl Into<String>, config: AdvisorConfig) -> Result<Self, AdvisorError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AdvisorError::MissingApiKey);
        }
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_key,
            config,
        })
    }

    /// Build a client from the `GROQ_API_KEY` environment variable.
    pub fn from_env(config: AdvisorConfig) -> Result<Self, AdvisorError> {
        let api_key = std::env::var(API_KEY_ENV).unwrap_or_default();
        Self::new(api_key, config)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/openai/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, query: &str) -> Result<String, AdvisorError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: persona::SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: query,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            top_p: 1.0,
            stream: false,
        };

        tracing::debug!(model = %self.config.model, "Requesting completion");
        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdvisorError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let payload: ChatResponse = response.json().await?;
        payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(AdvisorError::MalformedResponse)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_rejected() {
        let err = GroqClient::new("", AdvisorConfig::default()).unwrap_err();
        assert!(matches!(err, AdvisorError::MissingApiKey));

        let err = GroqClient::new("   ", AdvisorConfig::default()).unwrap_err();
        assert!(matches!(err, AdvisorError::MissingApiKey));
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = GroqClient::new("key", AdvisorConfig::default()).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://api.groq.com/openai/v1/chat/completions"
        );

        let config = AdvisorConfig {
            base_url: "http://localhost:9999/".into(),
            ..AdvisorConfig::default()
        };
        let client = GroqClient::new("key", config).unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:9999/openai/v1/chat/completions"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let request = ChatRequest {
            model: "mixtral-8x7b-32768",
            messages: vec![ChatMessage {
                role: "user",
                content: "How do FDs work?",
            }],
            temperature: 0.7,
            max_tokens: 1024,
            top_p: 1.0,
            stream: false,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "mixtral-8x7b-32768");
        assert_eq!(value["stream"], false);
        assert_eq!(value["max_tokens"], 1024);
        assert_eq!(value["messages"][0]["role"], "user");
    }

    #[test]
    fn test_response_parsing() {
        let payload: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"Diversify."}}]}"#,
        )
        .unwrap();
        let content = payload
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content);
        assert_eq!(content.as_deref(), Some("Diversify."));
    }

    #[test]
    fn test_empty_choices_is_malformed() {
        let payload: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(payload.choices.is_empty());
    }
}
