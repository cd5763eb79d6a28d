//! `validators config`: show the effective configuration.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use validators::config::{global_config_path, Config, PROJECT_CONFIG_FILE};

use crate::ui;

pub fn cmd_config(show_path: bool) -> Result<()> {
    if show_path {
        show_paths();
        return Ok(());
    }

    let config = Config::load()?;
    let yaml = serde_yaml::to_string(&config).context("Failed to serialize config")?;
    print!("{}", yaml);
    Ok(())
}

fn show_paths() {
    println!(
        "{}",
        ui::colors::heading("Config files (later overrides earlier):")
    );
    match global_config_path() {
        Some(path) => print_path("global", &path),
        None => println!(
            "  {:<8} {}",
            "global",
            ui::colors::secondary("(no config directory on this platform)")
        ),
    }
    print_path("project", Path::new(PROJECT_CONFIG_FILE));
}

fn print_path(label: &str, path: &Path) {
    let status = if path.exists() {
        "✓".green()
    } else {
        ui::colors::secondary("not found")
    };
    println!("  {:<8} {} {}", label, path.display(), status);
}
