//! `docflow convert` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;

use docflow_config::Config;
use docflow_convert::{Pandoc, is_allowed, zip_directory};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the convert command.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// Documents to convert.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Directory for the converted Markdown files (default: a fresh
    /// session directory under the system temp dir).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also write a ZIP archive of the results.
    #[arg(long)]
    zip: bool,

    /// Path to configuration file (default: auto-discover docflow.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// A document converted to Markdown.
pub(crate) struct ConvertedFile {
    /// Markdown filename (`{stem}.md`).
    pub(crate) name: String,
    /// Location of the Markdown file.
    pub(crate) path: PathBuf,
}

impl ConvertArgs {
    /// Execute the convert command.
    ///
    /// # Errors
    ///
    /// Returns an error when no file could be converted.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref())?;
        let pandoc = Pandoc::new(config.converter.pandoc.as_str());

        let result_dir = self
            .output_dir
            .clone()
            .unwrap_or_else(|| super::session_dir("results"));
        std::fs::create_dir_all(&result_dir)?;

        let (converted, failed) = convert_files(&pandoc, &self.files, &result_dir, &output);

        print_summary(&output, &converted, &failed, &result_dir);
        if converted.is_empty() {
            return Err(CliError::Validation("no valid files to convert".to_owned()));
        }

        if self.zip {
            let archive = zip_directory(&result_dir)?;
            let zip_path = result_dir.with_extension("zip");
            std::fs::write(&zip_path, archive)?;
            output.info(&format!("Archive: {}", zip_path.display()));
        }

        Ok(())
    }
}

/// Convert each file to Markdown, collecting successes and failures.
///
/// A failing file is reported and skipped; the rest of the batch keeps
/// going.
pub(crate) fn convert_files(
    pandoc: &Pandoc,
    files: &[PathBuf],
    result_dir: &Path,
    output: &Output,
) -> (Vec<ConvertedFile>, Vec<String>) {
    let mut converted = Vec::new();
    let mut failed = Vec::new();

    for file in files {
        let Some(name) = file.file_name().and_then(|name| name.to_str()) else {
            failed.push(file.display().to_string());
            continue;
        };

        if !is_allowed(name) {
            output.warning(&format!("Skipping {name}: unsupported file type"));
            failed.push(name.to_owned());
            continue;
        }

        let stem = file.file_stem().and_then(|stem| stem.to_str()).unwrap_or(name);
        let markdown_name = format!("{stem}.md");
        let markdown_path = result_dir.join(&markdown_name);

        match pandoc.to_markdown(file, &markdown_path) {
            Ok(()) => {
                output.success(&format!("Converted {name} -> {markdown_name}"));
                converted.push(ConvertedFile {
                    name: markdown_name,
                    path: markdown_path,
                });
            }
            Err(error) => {
                output.error(&format!("Conversion of {name} failed: {error}"));
                failed.push(name.to_owned());
            }
        }
    }

    (converted, failed)
}

fn print_summary(
    output: &Output,
    converted: &[ConvertedFile],
    failed: &[String],
    result_dir: &Path,
) {
    output.heading(&format!(
        "\n{} file(s) converted, {} failed",
        converted.len(),
        failed.len()
    ));
    if !converted.is_empty() {
        output.info(&format!("Results in {}", result_dir.display()));
    }
    for name in failed {
        output.warning(&format!("  failed: {name}"));
    }
}
