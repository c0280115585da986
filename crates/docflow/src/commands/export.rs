//! `docflow export` command implementation.

use std::path::PathBuf;

use clap::Args;

use docflow_config::Config;
use docflow_convert::{ExportReport, Exporter, Pandoc, zip_directory};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Wiki page paths to export.
    #[arg(required = true)]
    pages: Vec<String>,

    /// Target format (repeatable): docx, odt, rtf, pdf, html, tex, epub,
    /// pptx.
    #[arg(short, long = "format", required = true)]
    formats: Vec<String>,

    /// Directory for the exported files (default: a fresh session
    /// directory under the system temp dir).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also write a ZIP archive of the results.
    #[arg(long)]
    zip: bool,

    /// Path to configuration file (default: auto-discover docflow.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// # Errors
    ///
    /// Returns an error when the wiki is not configured or no page could
    /// be exported.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref())?;
        let client = super::wiki_client(&config)?;
        let pandoc = Pandoc::new(config.converter.pandoc.as_str());

        let export_dir = self
            .output_dir
            .clone()
            .unwrap_or_else(|| super::session_dir("exports"));

        let exporter = Exporter::new(&client, &pandoc, &export_dir);
        let report = exporter.export(&self.pages, &self.formats)?;

        print_summary(&output, &report, &export_dir);
        if report.converted.is_empty() {
            return Err(CliError::Validation("no pages could be exported".to_owned()));
        }

        if self.zip {
            let archive = zip_directory(&export_dir)?;
            let zip_path = export_dir.with_extension("zip");
            std::fs::write(&zip_path, archive)?;
            output.info(&format!("Archive: {}", zip_path.display()));
        }

        Ok(())
    }
}

fn print_summary(output: &Output, report: &ExportReport, export_dir: &std::path::Path) {
    output.heading(&format!(
        "\n{} file(s) exported, {} failure(s)",
        report.converted.len(),
        report.failed.len()
    ));
    if !report.converted.is_empty() {
        output.info(&format!("Results in {}", export_dir.display()));
    }
    for name in &report.converted {
        output.info(&format!("  {name}"));
    }
    for entry in &report.failed {
        output.warning(&format!("  failed: {entry}"));
    }
}
