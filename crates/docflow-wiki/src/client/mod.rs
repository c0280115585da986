//! Wiki.js GraphQL API client.
//!
//! Provides a sync HTTP client for the Wiki.js GraphQL endpoint with
//! bearer-token authentication. All operations go through a single POST
//! transport; response interpretation lives in [`decode`] so the
//! status/error matrix is testable without a server.

mod decode;
mod pages;

use std::time::Duration;

use serde::de::DeserializeOwned;
use ureq::Agent;

use crate::error::WikiError;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Wiki.js GraphQL API client.
pub struct WikiClient {
    agent: Agent,
    base_url: String,
    external_url: String,
    token: String,
}

impl WikiClient {
    /// Create client from config values.
    ///
    /// # Arguments
    /// * `base_url` - Wiki.js API base URL
    /// * `external_url` - user-facing base URL for published-page links;
    ///   falls back to `base_url` when unset
    /// * `token` - Wiki.js API bearer token
    ///
    /// # Errors
    ///
    /// Returns [`WikiError::NotConfigured`] when URL or token are blank, so
    /// no network call is ever attempted against a half-configured wiki.
    pub fn from_config(
        base_url: &str,
        external_url: Option<&str>,
        token: &str,
    ) -> Result<Self, WikiError> {
        if base_url.trim().is_empty() || token.trim().is_empty() {
            return Err(WikiError::NotConfigured);
        }

        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        let base_url = base_url.trim_end_matches('/').to_owned();
        let external_url = external_url
            .map(|url| url.trim_end_matches('/').to_owned())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| base_url.clone());

        Ok(Self {
            agent,
            base_url,
            external_url,
            token: token.to_owned(),
        })
    }

    /// The user-facing base URL for published-page links.
    pub fn external_url(&self) -> &str {
        &self.external_url
    }

    /// The GraphQL endpoint URL.
    fn graphql_url(&self) -> String {
        format!("{}/graphql", self.base_url)
    }

    /// POST a GraphQL payload and decode the typed `data` value.
    fn post<T: DeserializeOwned>(&self, payload: &serde_json::Value) -> Result<T, WikiError> {
        let body = serde_json::to_vec(payload)?;

        let response = self
            .agent
            .post(&self.graphql_url())
            .header("Authorization", &format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
            .send(&body[..])
            .map_err(|e| WikiError::Connection(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .into_body()
            .read_to_string()
            .unwrap_or_else(|_| "(unable to read response body)".to_owned());

        decode::decode_response(status, &text)
    }
}
