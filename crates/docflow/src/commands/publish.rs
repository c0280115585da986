//! `docflow publish` command implementation.

use std::path::PathBuf;

use clap::Args;

use docflow_config::Config;
use docflow_convert::Pandoc;
use docflow_wiki::{PagePublisher, PublishDefaults, PublishRequest, PublishedPage};

use super::convert::convert_files;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the publish command.
#[derive(Args)]
pub(crate) struct PublishArgs {
    /// Documents to convert and publish.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Target wiki path; the page title is appended unless the path
    /// already ends with it.
    #[arg(short, long)]
    path: Option<String>,

    /// Page title; only valid when publishing a single file.
    #[arg(short, long)]
    title: Option<String>,

    /// Username recorded in generated default paths.
    #[arg(short, long)]
    user: Option<String>,

    /// Wiki folder to publish into directly (skips the generated
    /// username/timestamp path).
    #[arg(short = 'F', long)]
    folder: Option<String>,

    /// Keep the intermediate Markdown files in this directory.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover docflow.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl PublishArgs {
    /// Execute the publish command.
    ///
    /// Each file is converted and published independently; one failure
    /// never aborts the rest of the batch.
    ///
    /// # Errors
    ///
    /// Returns an error when the wiki is not configured or no file could
    /// be converted at all.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        if self.title.is_some() && self.files.len() > 1 {
            return Err(CliError::Validation(
                "--title can only be used with a single file".to_owned(),
            ));
        }

        let config = Config::load(self.config.as_deref())?;
        // Fail on a missing [wiki] section before converting anything.
        let client = super::wiki_client(&config)?;
        let publisher = PagePublisher::new(
            &client,
            PublishDefaults {
                username: self.user.clone(),
                default_folder: self.folder.clone(),
            },
        );

        let pandoc = Pandoc::new(config.converter.pandoc.as_str());
        let result_dir = self
            .output_dir
            .clone()
            .unwrap_or_else(|| super::session_dir("results"));
        std::fs::create_dir_all(&result_dir)?;

        let (converted, mut failed) = convert_files(&pandoc, &self.files, &result_dir, &output);
        if converted.is_empty() {
            return Err(CliError::Validation("no valid files to publish".to_owned()));
        }

        let mut published = Vec::new();
        for file in &converted {
            let content = match std::fs::read_to_string(&file.path) {
                Ok(content) => content,
                Err(error) => {
                    output.error(&format!("Could not read {}: {error}", file.name));
                    failed.push(file.name.clone());
                    continue;
                }
            };

            let request = PublishRequest {
                content: &content,
                source_name: &file.name,
                custom_path: self.path.as_deref(),
                custom_title: self.title.as_deref(),
            };
            match publisher.publish(&request) {
                Ok(page) => {
                    output.success(&format!("Published {} -> {}", file.name, page.url));
                    published.push(page);
                }
                Err(error) => {
                    output.error(&format!("Publishing {} failed: {error}", file.name));
                    failed.push(file.name.clone());
                }
            }
        }

        print_summary(&output, &published, &failed);
        Ok(())
    }
}

fn print_summary(output: &Output, published: &[PublishedPage], failed: &[String]) {
    output.heading(&format!(
        "\n{} page(s) published, {} failure(s)",
        published.len(),
        failed.len()
    ));
    for page in published {
        output.info(&format!("  {} (ID: {})", page.url, page.id));
    }
    for name in failed {
        output.warning(&format!("  failed: {name}"));
    }
}
