//! Wiki.js API types.

use serde::Deserialize;

/// Page entry from the pages list query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageListItem {
    /// Page ID.
    pub id: i64,
    /// Page title.
    pub title: String,
    /// Slash-delimited page path.
    pub path: String,
    /// Content type ("markdown", "html", ...). Not requested by every query.
    #[serde(default)]
    pub content_type: Option<String>,
}

/// Embedded status object of a mutation, distinct from top-level GraphQL
/// `errors`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResponseResult {
    pub succeeded: bool,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Page reference returned by the create mutation.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CreatedPage {
    pub id: i64,
    pub path: String,
}

/// Page payload from the single-page query. The query requests more fields
/// than the client consumes; serde skips the rest.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PageContent {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Result of publishing a page.
#[derive(Debug, Clone)]
pub struct PublishedPage {
    /// Page ID assigned by the wiki.
    pub id: i64,
    /// Path the wiki actually stored the page under.
    pub path: String,
    /// User-facing URL of the page (external base URL + actual path).
    pub url: String,
}

/// Result of fetching a page by path.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// Page found with content.
    Found {
        /// Page content (Markdown).
        content: String,
        /// Page title, when the wiki reported one.
        title: Option<String>,
    },
    /// No page with the requested path exists.
    Missing,
    /// Page exists but has no usable content. The title is kept so callers
    /// can still derive a filename from it.
    Empty {
        /// Title discovered during lookup, if any.
        title: Option<String>,
    },
}
