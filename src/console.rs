//! Stdout reply sink for single-message mode.

use std::io::{self, Write};

use async_trait::async_trait;

use crate::core::dispatch::{Embed, ReplySink, SendError};

/// Prints every reply to stdout, one message per block.
pub struct ConsoleSink;

fn write_out(text: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", text)?;
    out.flush()
}

/// Plain-text rendering of an embed: title, link, description, fields, footer.
pub fn render_embed(embed: &Embed) -> String {
    let mut lines = vec![format!("== {} ==", embed.title)];
    if let Some(url) = &embed.url {
        lines.push(url.clone());
    }
    if let Some(description) = &embed.description {
        lines.push(description.clone());
    }
    for field in &embed.fields {
        lines.push(format!("{}: {}", field.name, field.value));
    }
    if let Some(footer) = &embed.footer {
        lines.push(format!("-- {}", footer));
    }
    lines.join("\n")
}

#[async_trait]
impl ReplySink for ConsoleSink {
    async fn send_text(&self, text: &str) -> Result<(), SendError> {
        Ok(write_out(text)?)
    }

    async fn send_embed(&self, embed: &Embed) -> Result<(), SendError> {
        Ok(write_out(&render_embed(embed))?)
    }
}
