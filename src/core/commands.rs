//! Command catalog shown by `/help`.
//!
//! Entries are loaded from `config/commands.json` (embedded at compile time and
//! validated by the build script).

use std::sync::OnceLock;

use serde::Deserialize;

/// One line of the help listing.
#[derive(Clone, Debug, Deserialize)]
pub struct CommandInfo {
    pub name: String,
    pub usage: String,
    pub description: String,
    /// False for entries that are not prefix commands (free-form questions, easter egg).
    pub slash: bool,
}

fn load_catalog() -> Vec<CommandInfo> {
    let json = include_str!("../../config/commands.json");
    serde_json::from_str(json).expect("commands.json must be valid")
}

static CATALOG: OnceLock<Vec<CommandInfo>> = OnceLock::new();

/// All catalog entries in file order, loaded on first access.
pub fn catalog() -> &'static [CommandInfo] {
    CATALOG.get_or_init(load_catalog)
}

/// Look up a prefix command by name (exact match).
pub fn find(name: &str) -> Option<&'static CommandInfo> {
    catalog().iter().find(|c| c.slash && c.name == name)
}

/// Usage line for a prefix command, e.g. "/gituser <username>".
pub fn usage(name: &str) -> Option<&'static str> {
    find(name).map(|c| c.usage.as_str())
}
