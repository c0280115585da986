//! CLI command implementations.

pub(crate) mod convert;
pub(crate) mod export;
pub(crate) mod pages;
pub(crate) mod publish;

pub(crate) use convert::ConvertArgs;
pub(crate) use export::ExportArgs;
pub(crate) use pages::{CheckArgs, DirsArgs, PagesArgs};
pub(crate) use publish::PublishArgs;

use std::path::PathBuf;

use uuid::Uuid;

use docflow_config::Config;
use docflow_wiki::WikiClient;

use crate::error::CliError;

/// Create the wiki client from validated configuration.
///
/// Fails with a configuration error before any network call when the
/// `[wiki]` section is missing or incomplete.
fn wiki_client(config: &Config) -> Result<WikiClient, CliError> {
    let wiki = config.require_wiki()?;
    let client = WikiClient::from_config(&wiki.base_url, wiki.external_url(), &wiki.token)?;
    Ok(client)
}

/// Fresh working directory for one run, named by a session id.
fn session_dir(kind: &str) -> PathBuf {
    std::env::temp_dir()
        .join("docflow")
        .join(kind)
        .join(Uuid::new_v4().to_string())
}
