//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  curiosity                                  Connect to Discord and serve commands
  curiosity -p \"/search python zip\"          Handle one message, print replies to stdout
  curiosity -p -                             Read the message from stdin
  curiosity config                           Show configuration status
  curiosity completions bash                 Generate bash completions

ENVIRONMENT:
  DISCORD_TOKEN      Bot token (required to connect)
  GITHUB_TOKEN       GitHub API token (optional, raises rate limits)
  CHANNEL_ID         Channel for the startup greeting (optional)
  INFERENCE_URL      Model server base URL (default http://localhost:11434)
  INFERENCE_MODEL    Model name (default llama3.2:latest)
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Curiosity: a Discord bot for docs, GitHub, and local-LLM coding answers",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Handle a single chat message locally, then exit (without connecting to Discord)
    #[arg(
        short = 'p',
        long,
        help = "Run one chat message through the bot and print the replies (use '-' to read from stdin)"
    )]
    pub prompt: Option<String>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show configuration status (tokens, endpoints, model)
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
