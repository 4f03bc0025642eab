//! Application run modes: logger init, single message, Discord bot.

use std::io;

use crate::bot;
use crate::cli::Args;
use crate::console::ConsoleSink;
use crate::core;
use crate::core::config::Config;
use crate::core::dispatch::Dispatcher;

/// Initialize env_logger. Flags set this crate's level; dependencies stay at warn.
/// `RUST_LOG` overrides both.
pub fn init_logger(args: &Args) {
    let filter = format!("warn,{}={}", env!("CARGO_CRATE_NAME"), args.log_level());
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .try_init();
}

/// Run one chat message through the dispatcher and print the replies to stdout.
/// `-` reads the message from stdin.
pub async fn run_single_message(
    message: &str,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let message = if message == "-" {
        io::read_to_string(io::stdin())?
    } else {
        message.to_string()
    };
    let message = message.trim();
    if message.is_empty() {
        eprintln!("Error: empty message");
        std::process::exit(1);
    }

    let dispatcher = Dispatcher::new(config)?;
    if let Err(e) = dispatcher.handle(message, &ConsoleSink).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}

/// Connect to Discord. Exits with a readable message if startup fails.
pub async fn launch_bot(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("starting {} v{}", core::app::NAME, core::app::VERSION);
    if let Err(e) = bot::run(config).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
