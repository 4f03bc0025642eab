//! CLI-only commands: configuration status.
//!
//! These run without connecting to Discord and produce plain text output.

use crate::core::config::Config;

fn status(value: Option<&str>) -> &'static str {
    if value.is_some() { "set ✓" } else { "not set" }
}

/// Lines printed by the `config` command. Secrets are never shown.
pub fn config_report(config: &Config) -> Vec<String> {
    let channel = config
        .greeting_channel
        .map(|id| id.to_string())
        .unwrap_or_else(|| "—".to_string());
    vec![
        format!("Discord token:  {}", status(config.discord_token.as_deref())),
        format!("GitHub token:   {}", status(config.github_token.as_deref())),
        format!("Greeting:       {}", channel),
        format!("GitHub API:     {}", config.github_api_url),
        format!("Max results:    {}", config.gitsearch_max_results),
        format!(
            "Inference:      {} ({})",
            config.inference.url, config.inference.target
        ),
        format!(
            "Model:          {} (temperature {}, num_ctx {})",
            config.inference.model, config.inference.temperature, config.inference.num_ctx
        ),
    ]
}

/// Run the `config` command: display configuration status.
pub fn run_config(config: &Config) {
    for line in config_report(config) {
        println!("{}", line);
    }
}
