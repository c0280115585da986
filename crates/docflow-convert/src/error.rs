//! Error types for document conversion.

/// Error from conversion and export operations.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The converter binary could not be started (usually: pandoc is not
    /// installed or not on PATH).
    #[error("could not run pandoc: {0}")]
    Spawn(std::io::Error),

    /// The converter ran but reported failure.
    #[error("pandoc failed ({status}): {stderr}")]
    Failed {
        /// Process exit status.
        status: std::process::ExitStatus,
        /// Captured standard error output.
        stderr: String,
    },

    /// No pandoc output token exists for the requested target format.
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// I/O error (reading input, writing results).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),
}
