//! Reply text and embeds for each command.

use crate::core::app::BOT_NAME;
use crate::core::commands;
use crate::core::github::{RepoResult, UserProfile};
use crate::core::inference::InferenceResult;
use crate::core::prompts::PromptKind;
use crate::core::util;

use super::reply::Embed;

pub const NO_REPOS_MESSAGE: &str = "❌ No repositories found or GitHub API error.";
pub const USER_NOT_FOUND_MESSAGE: &str = "❌ GitHub user not found.";
pub const ASK_FAILED_MESSAGE: &str = "❌ I couldn’t get a response from the model.";
pub const FREEFORM_FAILED_MESSAGE: &str = "I couldn’t get a response from the model.";
pub const THINKING_MESSAGE: &str = "🤖 Thinking...";
pub const EASTER_EGG_REPLY: &str =
    "I love my country. 🇮🇳\nThis code was created by Maahir alone.\nIron Man is the best!";

/// Discord rejects embeds whose title is longer than this (in chars).
pub const EMBED_TITLE_MAX: usize = 256;

const DOCS_COLOR: u32 = 0x3498db;
const GITHUB_COLOR: u32 = 0x24292e;
const HELP_COLOR: u32 = 0x00b0f4;
const ABOUT_COLOR: u32 = 0x7289da;

pub fn docs_status(lang: &str, query: &str) -> String {
    format!("🔍 Searching **{}** docs for: `{}`...", lang, query)
}

pub fn gitsearch_status(query: &str) -> String {
    format!("🔍 Searching GitHub for: `{}`...", query)
}

pub fn gituser_status(username: &str) -> String {
    format!("🔍 Fetching GitHub user `{}`...", username)
}

pub fn usage_hint(usage: &str) -> String {
    format!("Usage: `{}`", usage)
}

/// First letter upper-cased, the rest lower-cased.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Docs link card. A long query is shortened in the title only; the URL keeps all of it.
pub fn docs_embed(lang: &str, query: &str, url: &str) -> Embed {
    let prefix = format!("{} Docs: ", capitalize(lang));
    let room = EMBED_TITLE_MAX.saturating_sub(prefix.chars().count());
    Embed::new(format!("{}{}", prefix, util::preview(query, room)), DOCS_COLOR)
        .description("📖 Click the link below to view the official documentation.")
        .url(url)
}

/// Markdown list of repositories, one block per repo separated by blank lines.
pub fn repo_list(repos: &[RepoResult]) -> String {
    let mut blocks = Vec::with_capacity(repos.len() + 1);
    blocks.push("**Top GitHub Repositories:**\n".to_string());
    for repo in repos {
        blocks.push(format!(
            "🔗 [{}]({}) — ⭐ {}\n{}",
            repo.name, repo.url, repo.stars, repo.description
        ));
    }
    blocks.join("\n\n")
}

pub fn user_embed(user: &UserProfile) -> Embed {
    Embed::new(format!("{} (@{})", user.name, user.login), GITHUB_COLOR)
        .url(&user.url)
        .description(&user.bio)
        .thumbnail(&user.avatar)
        .field("🗂️ Public Repos", user.repos.to_string(), true)
        .field("👥 Followers", user.followers.to_string(), true)
        .field("🧑 Following", user.following.to_string(), true)
}

/// Model answer with response time, or the canned failure message for the path.
pub fn inference_reply(result: &InferenceResult, kind: PromptKind) -> String {
    match result.text.as_deref().filter(|_| result.is_success()) {
        Some(text) => {
            let mut reply = format!("**{} says:**\n{}", BOT_NAME, text);
            if result.elapsed_secs() != InferenceResult::NOT_MEASURED {
                reply.push_str(&format!("\n*Response time: {:.2}s*", result.elapsed_secs()));
            }
            reply
        }
        None => match kind {
            PromptKind::Ask => ASK_FAILED_MESSAGE.to_string(),
            PromptKind::FreeForm => FREEFORM_FAILED_MESSAGE.to_string(),
        },
    }
}

pub fn help_embed() -> Embed {
    let mut embed = Embed::new(format!("📚 {} Bot Help", BOT_NAME), HELP_COLOR)
        .description("Here's what I can help you with:");
    for entry in commands::catalog() {
        embed = embed.field(&entry.usage, &entry.description, false);
    }
    embed.footer(format!(
        "I'm {}, here to help you code smarter, faster, and better!",
        BOT_NAME
    ))
}

pub fn about_embed() -> Embed {
    Embed::new(format!("🤖 About {}", BOT_NAME), ABOUT_COLOR)
        .description(format!(
            "I'm {}, your AI documentation and coding assistant.",
            BOT_NAME
        ))
        .field(
            "What I do",
            "- Find official docs for languages & frameworks\n\
             - Help with GitHub repo & user info\n\
             - Answer technical questions using a local LLM\n\
             - Make coding smoother right from Discord",
            false,
        )
        .field(
            "Created by",
            "✨ **Maahir** with a little help from GPT 🚀",
            false,
        )
        .footer("Built with Rust, serenity, and a locally hosted language model.")
}

/// Startup message for the greeting channel.
pub fn greeting() -> String {
    let usages: Vec<&str> = commands::catalog()
        .iter()
        .filter(|c| c.slash)
        .map(|c| c.usage.as_str())
        .collect();
    format!(
        "👋 Hello! I'm **{}**, your documentation assistant.\n\nTry {} to get started.",
        BOT_NAME,
        usages
            .iter()
            .map(|u| format!("`{}`", u))
            .collect::<Vec<_>>()
            .join(", ")
    )
}
