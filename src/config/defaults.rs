//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::registry::CheckOptions;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

default_fn!(default_true, bool, true);

/// How `validators check` reports results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One coloured line per value
    #[default]
    Text,
    /// One JSON object per value
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("unknown output format '{}' (expected text or json)", other),
        }
    }
}

/// Validator flags applied to every `validators check` run unless overridden
/// on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct CheckDefaults {
    /// Restrict domains to known top-level domains (default: false)
    #[serde(default)]
    pub consider_tld: bool,
    /// Allow a trailing dot in domain names (default: false)
    #[serde(default)]
    pub rfc_1034: bool,
    /// Allow underscores in domain names (default: false)
    #[serde(default)]
    pub rfc_2782: bool,
    /// Accept single-label hosts in URLs and emails (default: false)
    #[serde(default)]
    pub simple_host: bool,
    /// Require `key=value` query fields in URLs (default: true)
    #[serde(default = "default_true")]
    pub strict_query: bool,
}

impl Default for CheckDefaults {
    fn default() -> Self {
        Self {
            consider_tld: false,
            rfc_1034: false,
            rfc_2782: false,
            simple_host: false,
            strict_query: default_true(),
        }
    }
}

impl CheckDefaults {
    /// Starting options for a check run.
    pub fn check_options(&self) -> CheckOptions {
        CheckOptions {
            consider_tld: self.consider_tld,
            rfc_1034: self.rfc_1034,
            rfc_2782: self.rfc_2782,
            simple_host: self.simple_host,
            strict_query: self.strict_query,
            ..Default::default()
        }
    }
}
