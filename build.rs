//! Build script: validates commands.json at compile time.

use std::path::PathBuf;

fn main() {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR set by Cargo");
    let config_path: PathBuf = [&manifest_dir, "config", "commands.json"]
        .iter()
        .collect();
    println!("cargo:rerun-if-changed={}", config_path.display());
    let json = std::fs::read_to_string(&config_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read {}: {}. commands.json must exist and be valid.",
            config_path.display(),
            e
        )
    });
    #[derive(serde::Deserialize)]
    #[allow(dead_code)]
    struct CommandEntry {
        name: String,
        usage: String,
        description: String,
        slash: bool,
    }
    let entries: Vec<CommandEntry> = serde_json::from_str(&json).unwrap_or_else(|e| {
        panic!(
            "commands.json is invalid JSON: {}. Fix the file and rebuild.",
            e
        )
    });
    for entry in &entries {
        if entry.slash && !entry.usage.starts_with('/') {
            panic!(
                "commands.json: slash command '{}' must have a usage starting with '/'",
                entry.name
            );
        }
    }
}
