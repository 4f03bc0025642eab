//! Client for a locally hosted model server.
//!
//! One blocking (non-streaming) POST per question. Failures never reach the
//! caller as errors: they are logged and reported as a failed
//! [`InferenceResult`].

mod payload;

pub use payload::{InferencePayload, InferenceResult, InferenceTarget, SamplingOptions};

use std::time::Instant;

use reqwest::{Client, StatusCode};

use crate::core::util;
use payload::{CompletionResponse, OllamaResponse};

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Inference request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Inference endpoint returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("Failed to deserialize inference response: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("Inference response contained no choices")]
    NoChoices,
}

#[derive(Debug, Clone)]
pub struct InferenceClient {
    http: Client,
    base_url: String,
}

impl InferenceClient {
    pub fn new(base_url: &str) -> Result<Self, InferenceError> {
        let http = Client::builder().build().map_err(InferenceError::Client)?;
        Ok(InferenceClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Run one generation and time it. Blank output counts as failure.
    pub async fn generate(&self, payload: &InferencePayload) -> InferenceResult {
        let started = Instant::now();
        match self.request(payload).await {
            Ok(text) if !text.trim().is_empty() => {
                let elapsed = started.elapsed();
                log::debug!(
                    "inference: {} answered in {:.2}s ({} chars)",
                    payload.model,
                    elapsed.as_secs_f64(),
                    text.chars().count()
                );
                InferenceResult::success(elapsed, text)
            }
            Ok(_) => {
                log::warn!("inference: {} returned an empty response", payload.model);
                InferenceResult::failed()
            }
            Err(e) => {
                log::warn!("inference: {} failed: {}", payload.model, e);
                InferenceResult::failed()
            }
        }
    }

    async fn request(&self, payload: &InferencePayload) -> Result<String, InferenceError> {
        let url = format!("{}{}", self.base_url, payload.target.path());
        let response = self
            .http
            .post(&url)
            .json(&payload.request_body())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Status {
                status,
                body: util::preview(&body, 200),
            });
        }

        match payload.target {
            InferenceTarget::Ollama => {
                let body: OllamaResponse = response.json().await.map_err(InferenceError::Decode)?;
                Ok(body.response)
            }
            InferenceTarget::OpenAiCompatible => {
                let body: CompletionResponse =
                    response.json().await.map_err(InferenceError::Decode)?;
                body.choices
                    .into_iter()
                    .next()
                    .map(|c| c.text)
                    .ok_or(InferenceError::NoChoices)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};
    use serde_json::json;

    use super::*;

    fn payload(target: InferenceTarget) -> InferencePayload {
        InferencePayload::new(
            target,
            "llama3.2:latest",
            "What does map() do?",
            SamplingOptions {
                temperature: 0.3,
                num_ctx: 500,
                max_tokens: 800,
            },
        )
    }

    #[tokio::test]
    async fn ollama_generate_returns_text_and_time() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/generate")
            .match_body(Matcher::PartialJson(json!({
                "model": "llama3.2:latest",
                "prompt": "What does map() do?",
                "stream": false,
                "options": { "num_ctx": 500, "num_predict": 800 }
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "model": "llama3.2:latest", "response": "It maps.", "done": true }).to_string())
            .create_async()
            .await;

        let client = InferenceClient::new(&server.url()).unwrap();
        let result = client.generate(&payload(InferenceTarget::Ollama)).await;

        mock.assert_async().await;
        assert!(result.is_success());
        assert_eq!(result.text.as_deref(), Some("It maps."));
        assert!(result.elapsed_secs() >= 0.0);
    }

    #[tokio::test]
    async fn openai_compatible_reads_first_choice() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1/completions")
            .match_body(Matcher::PartialJson(json!({ "max_tokens": 800 })))
            .with_status(200)
            .with_body(json!({ "choices": [{ "text": "first" }, { "text": "second" }] }).to_string())
            .create_async()
            .await;

        let client = InferenceClient::new(&server.url()).unwrap();
        let result = client.generate(&payload(InferenceTarget::OpenAiCompatible)).await;
        assert_eq!(result.text.as_deref(), Some("first"));
    }

    #[tokio::test]
    async fn server_error_is_failed_result() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/generate")
            .with_status(500)
            .with_body("model not loaded")
            .create_async()
            .await;

        let client = InferenceClient::new(&server.url()).unwrap();
        let result = client.generate(&payload(InferenceTarget::Ollama)).await;
        assert_eq!(result, InferenceResult::failed());
        assert_eq!(result.elapsed_secs(), -1.0);
    }

    #[tokio::test]
    async fn empty_response_is_failed_result() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/generate")
            .with_status(200)
            .with_body(json!({ "response": "" }).to_string())
            .create_async()
            .await;

        let client = InferenceClient::new(&server.url()).unwrap();
        assert!(!client.generate(&payload(InferenceTarget::Ollama)).await.is_success());
    }

    #[tokio::test]
    async fn unreachable_server_is_failed_result() {
        let client = InferenceClient::new("http://127.0.0.1:1").unwrap();
        let result = client.generate(&payload(InferenceTarget::Ollama)).await;
        assert!(result.text.is_none());
        assert!(result.elapsed.is_none());
    }
}
