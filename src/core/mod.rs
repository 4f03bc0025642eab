pub mod app;
pub mod chunk;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod docs;
pub mod github;
pub mod inference;
pub mod prompts;
pub mod util;
