//! CLI error types.

use docflow_config::ConfigError;
use docflow_convert::ConvertError;
use docflow_wiki::WikiError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Wiki(#[from] WikiError),

    #[error("{0}")]
    Convert(#[from] ConvertError),

    #[error("{0}")]
    Validation(String),
}
