//! Validation logic for loaded configuration.

use anyhow::Result;

use super::Config;

impl Config {
    /// Validate configuration after parsing and merging.
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = self.tld_file_path() {
            if path.as_os_str().is_empty() {
                anyhow::bail!("tld_file must not be empty");
            }
            if path.is_dir() {
                anyhow::bail!("tld_file must be a file, got directory {}", path.display());
            }
        }

        if self.quiet && self.format == super::OutputFormat::Json {
            tracing::debug!("quiet has no effect on json output");
        }

        Ok(())
    }
}
