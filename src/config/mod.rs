//! Configuration for the `validators` binary.
//!
//! Settings come from YAML files and the environment. Merge order (later
//! overrides earlier):
//! 1. Global config (`<config dir>/validators/config.yaml`)
//! 2. Project config (`.validators.yaml` in the working directory)
//! 3. Environment (`VALIDATORS_CACHE_TLD`, `VALIDATORS_QUIET`)
//!
//! Command-line flags are applied on top by the binary.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::registry::CheckOptions;
use crate::tld;

pub mod defaults;
pub mod validation;

pub use defaults::*;

/// Project configuration file, relative to the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".validators.yaml";

/// Environment variable that suppresses passing lines in text output.
pub const QUIET_ENV: &str = "VALIDATORS_QUIET";

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Config {
    /// Load the TLD list into memory once instead of scanning it per lookup
    #[serde(default)]
    pub cache_tld: bool,
    /// Only report failures
    #[serde(default)]
    pub quiet: bool,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub defaults: CheckDefaults,
    /// Replacement TLD list (header line, then one TLD per line); `~` is expanded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tld_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration with full merge semantics.
    pub fn load() -> Result<Self> {
        Self::load_merged_from(
            global_config_path().as_deref(),
            Path::new(PROJECT_CONFIG_FILE),
        )
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load merged configuration from the given global and project files,
    /// then apply environment overrides. Missing files are skipped.
    pub fn load_merged_from(global_path: Option<&Path>, project_path: &Path) -> Result<Self> {
        let global_config = global_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let project_config = Some(project_path)
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let mut config = global_config.merge_with(project_config);
        config.apply_env();
        config.validate()?;

        tracing::debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Override settings from `VALIDATORS_CACHE_TLD` and `VALIDATORS_QUIET`.
    pub fn apply_env(&mut self) {
        if let Some(cache) = env_flag(tld::CACHE_ENV) {
            self.cache_tld = cache;
        }
        if let Some(quiet) = env_flag(QUIET_ENV) {
            self.quiet = quiet;
        }
    }

    /// Install process-wide settings: the TLD cache and a replacement TLD list.
    pub fn install(&self) -> Result<()> {
        if self.cache_tld {
            tld::enable_cache();
        }

        if let Some(path) = self.tld_file_path() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read TLD list from {}", path.display()))?;
            if tld::install_list(contents) {
                tracing::debug!(path = %path.display(), "Installed TLD list");
            } else {
                tracing::warn!(path = %path.display(), "TLD list already installed, ignoring");
            }
        }

        Ok(())
    }

    /// `tld_file` with `~` and environment variables expanded.
    pub fn tld_file_path(&self) -> Option<PathBuf> {
        self.tld_file.as_ref().map(|path| {
            let raw = path.to_string_lossy();
            match shellexpand::full(&raw) {
                Ok(expanded) => PathBuf::from(expanded.as_ref()),
                Err(_) => PathBuf::from(shellexpand::tilde(&raw).as_ref()),
            }
        })
    }

    /// Validator flags to start a check run from.
    pub fn check_options(&self) -> CheckOptions {
        self.defaults.check_options()
    }
}

/// Returns the path to the global config file, e.g. `~/.config/validators/config.yaml`
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("validators").join("config.yaml"))
}

/// Parse a boolean environment variable; unset or unrecognised values are `None`.
pub(crate) fn env_flag(name: &str) -> Option<bool> {
    let value = std::env::var(name).ok()?;
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => {
            tracing::warn!(name, value = %value, "Ignoring unrecognised boolean");
            None
        }
    }
}

/// Partial config for merging - all fields optional
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub cache_tld: Option<bool>,
    pub quiet: Option<bool>,
    pub format: Option<OutputFormat>,
    pub defaults: Option<PartialCheckDefaults>,
    pub tld_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialCheckDefaults {
    pub consider_tld: Option<bool>,
    pub rfc_1034: Option<bool>,
    pub rfc_2782: Option<bool>,
    pub simple_host: Option<bool>,
    pub strict_query: Option<bool>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        // An empty file is an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("Failed to parse config")
    }

    /// Merge this global config with a project config, returning the merged result.
    /// Values from the project config take precedence over global.
    fn merge_with(self, project: PartialConfig) -> Config {
        let global_defaults = self.defaults.unwrap_or_default();
        let project_defaults = project.defaults.unwrap_or_default();
        let fallback = CheckDefaults::default();

        Config {
            cache_tld: project.cache_tld.or(self.cache_tld).unwrap_or_default(),
            quiet: project.quiet.or(self.quiet).unwrap_or_default(),
            format: project.format.or(self.format).unwrap_or_default(),
            defaults: CheckDefaults {
                consider_tld: project_defaults
                    .consider_tld
                    .or(global_defaults.consider_tld)
                    .unwrap_or(fallback.consider_tld),
                rfc_1034: project_defaults
                    .rfc_1034
                    .or(global_defaults.rfc_1034)
                    .unwrap_or(fallback.rfc_1034),
                rfc_2782: project_defaults
                    .rfc_2782
                    .or(global_defaults.rfc_2782)
                    .unwrap_or(fallback.rfc_2782),
                simple_host: project_defaults
                    .simple_host
                    .or(global_defaults.simple_host)
                    .unwrap_or(fallback.simple_host),
                strict_query: project_defaults
                    .strict_query
                    .or(global_defaults.strict_query)
                    .unwrap_or(fallback.strict_query),
            },
            tld_file: project.tld_file.or(self.tld_file),
        }
    }
}
