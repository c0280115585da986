//! Wiki inspection commands: `pages`, `dirs` and `check`.

use std::path::PathBuf;

use clap::Args;

use docflow_config::Config;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the pages command.
#[derive(Args)]
pub(crate) struct PagesArgs {
    /// Maximum number of pages to request.
    #[arg(short, long, default_value_t = 100)]
    limit: u32,

    /// Path to configuration file (default: auto-discover docflow.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl PagesArgs {
    /// Execute the pages command.
    ///
    /// # Errors
    ///
    /// Returns an error when the wiki is not configured or unreachable.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref())?;
        let client = super::wiki_client(&config)?;

        let pages = client.list_pages(self.limit)?;
        for page in &pages {
            output.info(&format!("{:>6}  /{}  ({})", page.id, page.path, page.title));
        }
        output.heading(&format!("\n{} Markdown page(s)", pages.len()));
        Ok(())
    }
}

/// Arguments for the dirs command.
#[derive(Args)]
pub(crate) struct DirsArgs {
    /// Path to configuration file (default: auto-discover docflow.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl DirsArgs {
    /// Execute the dirs command.
    ///
    /// # Errors
    ///
    /// Returns an error when the wiki is not configured or unreachable.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref())?;
        let client = super::wiki_client(&config)?;

        for directory in client.directories()? {
            if directory.is_empty() {
                output.info("/");
            } else {
                output.info(&format!("/{directory}"));
            }
        }
        Ok(())
    }
}

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover docflow.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error when the wiki is not configured, unreachable or
    /// rejects the token.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref())?;
        let client = super::wiki_client(&config)?;

        let count = client.check_connection()?;
        output.success(&format!("Connection OK: {count} page(s) found"));
        Ok(())
    }
}
