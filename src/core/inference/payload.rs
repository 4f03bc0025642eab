//! Request and result types for the local model server.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use serde_json::{Value, json};

/// Which model-server API the payload is shaped for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InferenceTarget {
    /// Ollama `/api/generate`.
    #[default]
    Ollama,
    /// OpenAI-compatible `/v1/completions` (llama.cpp server, vLLM, LM Studio).
    OpenAiCompatible,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown inference target '{0}' (expected 'ollama' or 'openai')")]
pub struct UnknownTarget(String);

impl FromStr for InferenceTarget {
    type Err = UnknownTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ollama" => Ok(InferenceTarget::Ollama),
            "openai" | "openai-compatible" => Ok(InferenceTarget::OpenAiCompatible),
            _ => Err(UnknownTarget(s.to_string())),
        }
    }
}

impl fmt::Display for InferenceTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferenceTarget::Ollama => write!(f, "ollama"),
            InferenceTarget::OpenAiCompatible => write!(f, "openai"),
        }
    }
}

impl InferenceTarget {
    /// Endpoint path appended to the configured base URL.
    pub fn path(self) -> &'static str {
        match self {
            InferenceTarget::Ollama => "/api/generate",
            InferenceTarget::OpenAiCompatible => "/v1/completions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingOptions {
    pub temperature: f32,
    /// Context window in tokens. Ignored by OpenAI-compatible servers.
    pub num_ctx: u32,
    /// Generation budget in tokens.
    pub max_tokens: u32,
}

/// Everything needed for one generation call.
#[derive(Debug, Clone)]
pub struct InferencePayload {
    pub target: InferenceTarget,
    pub model: String,
    pub prompt: String,
    pub options: SamplingOptions,
}

impl InferencePayload {
    pub fn new(
        target: InferenceTarget,
        model: impl Into<String>,
        prompt: impl Into<String>,
        options: SamplingOptions,
    ) -> Self {
        InferencePayload {
            target,
            model: model.into(),
            prompt: prompt.into(),
            options,
        }
    }

    /// JSON body in the shape the target expects. Always non-streaming.
    pub fn request_body(&self) -> Value {
        match self.target {
            InferenceTarget::Ollama => json!({
                "model": self.model,
                "prompt": self.prompt,
                "stream": false,
                "options": {
                    "temperature": self.options.temperature,
                    "num_ctx": self.options.num_ctx,
                    "num_predict": self.options.max_tokens,
                },
            }),
            InferenceTarget::OpenAiCompatible => json!({
                "model": self.model,
                "prompt": self.prompt,
                "temperature": self.options.temperature,
                "max_tokens": self.options.max_tokens,
                "stream": false,
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct OllamaResponse {
    pub response: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CompletionChoice {
    pub text: String,
}

/// Outcome of a generation call. `text: None` means the call failed.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceResult {
    pub elapsed: Option<Duration>,
    pub text: Option<String>,
}

impl InferenceResult {
    /// Reported by [`elapsed_secs`](Self::elapsed_secs) when no time was measured.
    pub const NOT_MEASURED: f64 = -1.0;

    pub fn success(elapsed: Duration, text: String) -> Self {
        InferenceResult {
            elapsed: Some(elapsed),
            text: Some(text),
        }
    }

    pub fn failed() -> Self {
        InferenceResult {
            elapsed: None,
            text: None,
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed
            .map(|d| d.as_secs_f64())
            .unwrap_or(Self::NOT_MEASURED)
    }

    pub fn is_success(&self) -> bool {
        self.text.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}
