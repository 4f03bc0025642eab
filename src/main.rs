//! # Curiosity - Discord coding assistant
//!
//! Entry point for the Curiosity bot, which answers chat commands with
//! documentation links, GitHub search results, and answers from a locally
//! hosted language model.
//!
//! ## Modes
//! - Discord bot (default), requires `DISCORD_TOKEN`
//! - Single message with `-p`: handles one message locally and prints the replies
//! - `config` and `completions` helper subcommands

mod bot;
mod cli;
mod console;
mod core;
mod run;

use std::io;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    if let Some(Commands::Completions { shell }) = &args.command {
        let mut cmd = Args::command();
        cli::generate(*shell, &mut cmd, core::app::NAME, &mut io::stdout());
        return Ok(());
    }

    // Print user-friendly message; exit uses Display not Debug
    let config = core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if let Some(Commands::Config) = &args.command {
        core::cli::run_config(&config);
        return Ok(());
    }

    if let Some(message) = &args.prompt {
        return run::run_single_message(message, &config).await;
    }

    run::launch_bot(&config).await
}
