//! Discord gateway wiring.
//!
//! serenity delivers each gateway event on its own task; handlers share only
//! the immutable [`Dispatcher`].

mod sink;

use std::sync::Arc;

use async_trait::async_trait;
use serenity::Client;
use serenity::all::{ChannelId, Context, EventHandler, GatewayIntents, Message, Ready};

use crate::core::app::BOT_NAME;
use crate::core::config::{Config, ConfigError};
use crate::core::dispatch::{Dispatcher, InitError, ReplySink, SendError, format};

use sink::DiscordSink;

#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to set up service clients: {0}")]
    Init(#[from] InitError),
    #[error("Discord client error: {0}")]
    Discord(#[from] serenity::Error),
}

struct Handler {
    dispatcher: Arc<Dispatcher>,
    greeting_channel: Option<ChannelId>,
}

impl Handler {
    fn new(config: &Config, dispatcher: Arc<Dispatcher>) -> Self {
        Handler {
            dispatcher,
            greeting_channel: greeting_channel(config),
        }
    }
}

/// Channel for the startup greeting. Zero was already mapped to `None` by the config.
fn greeting_channel(config: &Config) -> Option<ChannelId> {
    config.greeting_channel.map(ChannelId::new)
}

/// Never answer bots, ourselves included.
fn should_dispatch(author_is_bot: bool) -> bool {
    !author_is_bot
}

async fn send_greeting(sink: &dyn ReplySink) -> Result<(), SendError> {
    sink.send_text(&format::greeting()).await
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        log::info!(
            "{} is online! Logged in as {} (ID: {})",
            BOT_NAME,
            ready.user.name,
            ready.user.id
        );

        if let Some(channel) = self.greeting_channel {
            let sink = DiscordSink::new(ctx.http.clone(), channel);
            if let Err(e) = send_greeting(&sink).await {
                log::warn!("greeting to channel {} failed: {}", channel, e);
            }
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if !should_dispatch(msg.author.bot) {
            return;
        }

        let sink = DiscordSink::new(ctx.http.clone(), msg.channel_id);
        if let Err(e) = self.dispatcher.handle(&msg.content, &sink).await {
            log::error!(
                "message {} in channel {} dropped: {}",
                msg.id,
                msg.channel_id,
                e
            );
        }
    }
}

/// Connect to Discord and serve messages until the gateway connection ends.
pub async fn run(config: &Config) -> Result<(), BotError> {
    let token = config.discord_token()?;
    let dispatcher = Arc::new(Dispatcher::new(config)?);

    let handler = Handler::new(config, dispatcher);

    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(token, intents)
        .event_handler(handler)
        .await?;

    log::info!("connecting to Discord");
    client.start().await?;
    Ok(())
}
