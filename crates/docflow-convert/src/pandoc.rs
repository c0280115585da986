//! Pandoc subprocess invocation.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::ConvertError;
use crate::formats::{input_format, output_format};

/// Pandoc runner.
///
/// All invocations use the argument shape
/// `pandoc -f <source> -t <target> -o <output> <input>`.
pub struct Pandoc {
    binary: String,
}

impl Pandoc {
    /// Create a runner for the given pandoc binary (name or path).
    #[must_use]
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Convert a document to Markdown.
    ///
    /// The input token is derived from the input filename's extension.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Spawn`] when pandoc cannot be started and
    /// [`ConvertError::Failed`] when it exits unsuccessfully.
    pub fn to_markdown(&self, input: &Path, output: &Path) -> Result<(), ConvertError> {
        let source = input
            .file_name()
            .and_then(|name| name.to_str())
            .map_or("docx", input_format);

        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)?;
        }

        self.run(source, "markdown", input, output)
    }

    /// Convert a Markdown file to the given target format.
    ///
    /// PDF is passed through as-is; every other target is looked up in the
    /// output table.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnsupportedFormat`] for unknown targets, or
    /// the spawn/exit error of the pandoc run.
    pub fn from_markdown(&self, input: &Path, target: &str, output: &Path) -> Result<(), ConvertError> {
        let token = if target == "pdf" {
            "pdf"
        } else {
            output_format(target).ok_or_else(|| ConvertError::UnsupportedFormat(target.to_owned()))?
        };

        self.run("markdown", token, input, output)
    }

    fn run(
        &self,
        source: &str,
        target: &str,
        input: &Path,
        output: &Path,
    ) -> Result<(), ConvertError> {
        debug!(binary = %self.binary, source, target, input = %input.display(), "running pandoc");

        let result = Command::new(&self.binary)
            .arg("-f")
            .arg(source)
            .arg("-t")
            .arg(target)
            .arg("-o")
            .arg(output)
            .arg(input)
            .output()
            .map_err(ConvertError::Spawn)?;

        if !result.status.success() {
            return Err(ConvertError::Failed {
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).into_owned(),
            });
        }

        Ok(())
    }
}
