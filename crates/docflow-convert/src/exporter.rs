//! Export pipeline: wiki pages → document formats.
//!
//! For each requested page: fetch the content, write it to a Markdown file
//! named after the sanitized title, then convert it to every requested
//! target format. Failures are recorded per page and per format; one bad
//! page never aborts the rest of the batch, and the report lists entries
//! in input order.

use std::path::PathBuf;

use tracing::{info, warn};

use docflow_wiki::{FetchOutcome, WikiClient, WikiError, sanitize_filename};

use crate::error::ConvertError;
use crate::pandoc::Pandoc;

/// Source of wiki page content.
///
/// Implemented by [`WikiClient`]; tests substitute their own.
pub trait PageSource {
    /// Fetch a page's content by path.
    ///
    /// # Errors
    ///
    /// Returns the [`WikiError`] that prevented the lookup.
    fn fetch_page(&self, path: &str) -> Result<FetchOutcome, WikiError>;
}

impl PageSource for WikiClient {
    fn fetch_page(&self, path: &str) -> Result<FetchOutcome, WikiError> {
        WikiClient::fetch_page(self, path)
    }
}

/// Outcome of an export run.
#[derive(Debug, Default)]
pub struct ExportReport {
    /// Filenames written to the export directory, in input order.
    pub converted: Vec<String>,
    /// Failed entries: `"{path} (no content)"` for unfetchable pages,
    /// `"{title} ({format})"` for conversion failures.
    pub failed: Vec<String>,
}

/// Drives the export of wiki pages into document formats.
pub struct Exporter<'a> {
    source: &'a dyn PageSource,
    pandoc: &'a Pandoc,
    export_dir: PathBuf,
}

impl<'a> Exporter<'a> {
    /// Create an exporter writing into `export_dir`.
    #[must_use]
    pub fn new(source: &'a dyn PageSource, pandoc: &'a Pandoc, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            pandoc,
            export_dir: export_dir.into(),
        }
    }

    /// Export the given pages to the given target formats.
    ///
    /// # Errors
    ///
    /// Only setup failures (creating the export directory) abort the run;
    /// everything per-page lands in the report instead.
    pub fn export(&self, page_paths: &[String], formats: &[String]) -> Result<ExportReport, ConvertError> {
        info!(
            pages = page_paths.len(),
            formats = formats.len(),
            dir = %self.export_dir.display(),
            "starting export"
        );
        std::fs::create_dir_all(&self.export_dir)?;

        let mut report = ExportReport::default();
        for path in page_paths {
            self.export_page(path, formats, &mut report);
        }

        info!(
            converted = report.converted.len(),
            failed = report.failed.len(),
            "export finished"
        );
        Ok(report)
    }

    fn export_page(&self, path: &str, formats: &[String], report: &mut ExportReport) {
        let (content, title) = match self.source.fetch_page(path) {
            Ok(FetchOutcome::Found { content, title }) => (content, title),
            Ok(FetchOutcome::Missing | FetchOutcome::Empty { .. }) => {
                warn!(path, "no content found for page");
                report.failed.push(format!("{path} (no content)"));
                return;
            }
            Err(error) => {
                warn!(path, %error, "could not fetch page");
                report.failed.push(format!("{path} (no content)"));
                return;
            }
        };

        // Fall back to the last path segment when the wiki has no title.
        let title = title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| path.rsplit('/').next().unwrap_or(path).to_owned());
        let safe_title = sanitize_filename(&title);
        info!(%title, %safe_title, "exporting page");

        let markdown_path = self.export_dir.join(format!("{safe_title}.md"));
        if let Err(error) = std::fs::write(&markdown_path, &content) {
            warn!(path, %error, "could not write markdown file");
            report.failed.push(path.to_owned());
            return;
        }

        for format in formats {
            let output_name = format!("{safe_title}.{format}");
            let output_path = self.export_dir.join(&output_name);
            match self.pandoc.from_markdown(&markdown_path, format, &output_path) {
                Ok(()) => {
                    info!(output = %output_name, "converted page");
                    report.converted.push(output_name);
                }
                Err(error) => {
                    warn!(%title, %format, %error, "conversion failed");
                    report.failed.push(format!("{title} ({format})"));
                }
            }
        }
    }
}
