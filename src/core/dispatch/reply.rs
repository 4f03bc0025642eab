//! Platform-neutral replies and the sink they are delivered through.

use async_trait::async_trait;

use crate::core::chunk::{MAX_MESSAGE_LEN, chunk_message};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Rich card reply. Adapters map it to their own embed type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub color: u32,
    pub thumbnail: Option<String>,
    pub fields: Vec<EmbedField>,
    pub footer: Option<String>,
}

impl Embed {
    pub fn new(title: impl Into<String>, color: u32) -> Self {
        Embed {
            title: title.into(),
            description: None,
            url: None,
            color,
            thumbnail: None,
            fields: Vec::new(),
            footer: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(url.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(text.into());
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SendError {
    /// Rejected or failed by the chat platform client.
    #[error("Reply delivery failed: {0}")]
    Platform(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("Failed to write reply: {0}")]
    Io(#[from] std::io::Error),
}

impl SendError {
    pub fn platform(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        SendError::Platform(Box::new(err))
    }
}

/// Where replies for one inbound message go (a channel, stdout, a test recorder).
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn send_text(&self, text: &str) -> Result<(), SendError>;

    async fn send_embed(&self, embed: &Embed) -> Result<(), SendError>;

    /// Show a "typing" indicator while slow work runs. No-op by default.
    async fn typing(&self) -> Result<(), SendError> {
        Ok(())
    }
}

/// Send `text` as consecutive messages of at most [`MAX_MESSAGE_LEN`] chars.
/// Each send completes before the next one starts.
pub async fn deliver_chunked(sink: &dyn ReplySink, text: &str) -> Result<(), SendError> {
    let chunks = chunk_message(text, MAX_MESSAGE_LEN);
    if chunks.len() > 1 {
        log::debug!("reply split into {} messages", chunks.len());
    }
    for chunk in chunks {
        sink.send_text(chunk).await?;
    }
    Ok(())
}
