use std::env;
use std::str::FromStr;

use crate::core::inference::InferenceTarget;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_INFERENCE_URL: &str = "http://localhost:11434";
pub const DEFAULT_INFERENCE_MODEL: &str = "llama3.2:latest";
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_NUM_CTX: u32 = 500;
pub const DEFAULT_GITSEARCH_MAX_RESULTS: u32 = 3;

#[derive(Debug, Clone)]
pub struct Config {
    /// Only required when connecting to Discord; console mode runs without it.
    pub discord_token: Option<String>,
    pub github_token: Option<String>,
    /// Channel that receives the startup greeting. `CHANNEL_ID=0` disables it.
    pub greeting_channel: Option<u64>,
    pub github_api_url: String,
    pub gitsearch_max_results: u32,
    pub inference: InferenceConfig,
}

#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub url: String,
    pub target: InferenceTarget,
    pub model: String,
    pub temperature: f32,
    pub num_ctx: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("DISCORD_TOKEN is not set")]
    MissingDiscordToken,
    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Load configuration from the process environment.
pub fn load() -> Result<Config, ConfigError> {
    Config::from_lookup(|key| env::var(key).ok())
}

impl Config {
    /// Build configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let greeting_channel = match parse_var::<u64>("CHANNEL_ID", get("CHANNEL_ID"), 0)? {
            0 => None,
            id => Some(id),
        };

        let inference = InferenceConfig {
            url: get("INFERENCE_URL").unwrap_or_else(|| DEFAULT_INFERENCE_URL.to_string()),
            target: parse_var(
                "INFERENCE_TARGET",
                get("INFERENCE_TARGET"),
                InferenceTarget::default(),
            )?,
            model: get("INFERENCE_MODEL").unwrap_or_else(|| DEFAULT_INFERENCE_MODEL.to_string()),
            temperature: parse_var(
                "INFERENCE_TEMPERATURE",
                get("INFERENCE_TEMPERATURE"),
                DEFAULT_TEMPERATURE,
            )?,
            num_ctx: parse_var("INFERENCE_NUM_CTX", get("INFERENCE_NUM_CTX"), DEFAULT_NUM_CTX)?,
        };

        Ok(Config {
            discord_token: get("DISCORD_TOKEN"),
            github_token: get("GITHUB_TOKEN"),
            greeting_channel,
            github_api_url: get("GITHUB_API_URL")
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
            gitsearch_max_results: parse_var(
                "GITSEARCH_MAX_RESULTS",
                get("GITSEARCH_MAX_RESULTS"),
                DEFAULT_GITSEARCH_MAX_RESULTS,
            )?,
            inference,
        })
    }

    /// The Discord token, or an error when the bot cannot start without it.
    pub fn discord_token(&self) -> Result<&str, ConfigError> {
        self.discord_token
            .as_deref()
            .ok_or(ConfigError::MissingDiscordToken)
    }
}

fn parse_var<T: FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
