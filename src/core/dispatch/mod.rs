//! Inbound message routing.
//!
//! Every message lands in exactly one [`Route`]. The keyword gate only applies
//! to messages without the command prefix; explicit commands bypass it.

pub mod format;
mod handler;
mod parse;
pub mod reply;

pub use handler::{Dispatcher, InitError};
pub use parse::{Command, Parsed, parse_command};
pub use reply::{Embed, ReplySink, SendError};

use crate::core::util;

/// Marks a message as an explicit command.
pub const COMMAND_PREFIX: &str = "/";

/// Messages starting with this word (any case) get the canned easter-egg reply.
pub const EASTER_EGG_PREFIX: &str = "india";

/// Shortest free-form message (in chars) considered a question.
pub const MIN_FREEFORM_LEN: usize = 10;

/// A free-form message must contain one of these (case-insensitive substring).
pub const FREEFORM_KEYWORDS: &[&str] = &[
    "how",
    "what",
    "why",
    "explain",
    "error",
    "bug",
    "code",
    "function",
    "debug",
    "difference",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Command(Command),
    /// Known command with missing arguments; holds the command name.
    Usage(&'static str),
    EasterEgg,
    FreeForm(String),
    Ignore,
}

/// Classify one inbound message.
pub fn classify(text: &str, prefix: &str) -> Route {
    let text = text.trim();

    if starts_with_ignore_case(text, EASTER_EGG_PREFIX) {
        return Route::EasterEgg;
    }

    if let Some(body) = text.strip_prefix(prefix) {
        return match parse_command(body) {
            Parsed::Command(cmd) => Route::Command(cmd),
            Parsed::MissingArgs(name) => Route::Usage(name),
            Parsed::Unknown => Route::Ignore,
        };
    }

    if looks_like_question(text) {
        Route::FreeForm(text.to_string())
    } else {
        Route::Ignore
    }
}

/// Free-form gate: long enough and mentions a keyword.
pub fn looks_like_question(text: &str) -> bool {
    text.chars().count() >= MIN_FREEFORM_LEN
        && util::contains_any_ignore_case(text, FREEFORM_KEYWORDS)
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
