use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

use super::base::{Provider, Usage};
use super::configs::OpenAiProviderConfig;
use super::utils::{backend_error_message, messages_to_openai_spec, ChatCompletion};
use crate::errors::{QueryError, QueryResult};
use crate::models::message::Message;

pub const TEMPERATURE: f64 = 0.7;
pub const MAX_TOKENS: i32 = 500;

/// Returned in place of an answer when the backend produced no content
pub const FALLBACK_ANSWER: &str = "I couldn't generate a response.";

pub struct OpenAiProvider {
    client: Client,
    config: OpenAiProviderConfig,
}

impl OpenAiProvider {
    pub fn new(config: OpenAiProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(600)) // 10 minutes timeout
            .build()?;

        Ok(Self { client, config })
    }

    async fn post(&self, payload: Value) -> QueryResult<Value> {
        let url = format!(
            "{}/v1/chat/completions",
            self.config.host.trim_end_matches('/')
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| QueryError::BackendUnavailable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| QueryError::BackendUnavailable(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(backend_error_message))
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unexpected status")
                        .to_string()
                });
            return Err(QueryError::BackendRejected {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| QueryError::BackendRejected {
            status: status.as_u16(),
            message: format!("malformed response body: {}", e),
        })
    }

    async fn complete_inner(
        &self,
        system: &str,
        messages: &[Message],
    ) -> QueryResult<(Message, Usage)> {
        let payload = json!({
            "model": self.config.model,
            "messages": messages_to_openai_spec(system, messages),
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
        });

        let response = self.post(payload).await?;

        if let Some(error) = response.get("error") {
            return Err(QueryError::BackendRejected {
                status: 200,
                message: backend_error_message(error)
                    .unwrap_or_else(|| "error object in response body".to_string()),
            });
        }

        let completion: ChatCompletion =
            serde_json::from_value(response).map_err(|e| QueryError::BackendRejected {
                status: 200,
                message: format!("malformed response body: {}", e),
            })?;

        let usage = completion.usage();
        let answer = match completion.answer() {
            Some(text) => text.to_string(),
            None => {
                tracing::warn!("completion contained no content, using fallback answer");
                FALLBACK_ANSWER.to_string()
            }
        };

        Ok((Message::assistant(answer), usage))
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    async fn complete(&self, system: &str, messages: &[Message]) -> QueryResult<(Message, Usage)> {
        self.complete_inner(system, messages)
            .await
            .map_err(|e| e.redact(&self.config.api_key))
    }
}
