//! Discord channel as a reply sink.

use std::sync::Arc;

use async_trait::async_trait;
use serenity::all::{ChannelId, CreateEmbed, CreateEmbedFooter, CreateMessage, Http};

use crate::core::dispatch::{Embed, ReplySink, SendError};

pub struct DiscordSink {
    http: Arc<Http>,
    channel: ChannelId,
}

impl DiscordSink {
    pub fn new(http: Arc<Http>, channel: ChannelId) -> Self {
        DiscordSink { http, channel }
    }
}

/// Map a platform-neutral embed onto serenity's builder.
pub fn to_discord_embed(embed: &Embed) -> CreateEmbed {
    let mut out = CreateEmbed::new()
        .title(&embed.title)
        .colour(embed.color);
    if let Some(description) = &embed.description {
        out = out.description(description);
    }
    if let Some(url) = &embed.url {
        out = out.url(url);
    }
    if let Some(thumbnail) = &embed.thumbnail {
        out = out.thumbnail(thumbnail);
    }
    for field in &embed.fields {
        out = out.field(&field.name, &field.value, field.inline);
    }
    if let Some(footer) = &embed.footer {
        out = out.footer(CreateEmbedFooter::new(footer));
    }
    out
}

#[async_trait]
impl ReplySink for DiscordSink {
    async fn send_text(&self, text: &str) -> Result<(), SendError> {
        // Discord rejects empty messages.
        if text.is_empty() {
            log::debug!("skipping empty message to {}", self.channel);
            return Ok(());
        }
        self.channel
            .say(&*self.http, text)
            .await
            .map_err(SendError::platform)?;
        Ok(())
    }

    async fn send_embed(&self, embed: &Embed) -> Result<(), SendError> {
        let message = CreateMessage::new().embed(to_discord_embed(embed));
        self.channel
            .send_message(&*self.http, message)
            .await
            .map_err(SendError::platform)?;
        Ok(())
    }

    async fn typing(&self) -> Result<(), SendError> {
        self.channel
            .broadcast_typing(&*self.http)
            .await
            .map_err(SendError::platform)?;
        Ok(())
    }
}
