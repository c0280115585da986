//! Page operations against the Wiki.js GraphQL API.

use std::collections::BTreeSet;

use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, warn};

use super::WikiClient;
use crate::error::WikiError;
use crate::types::{CreatedPage, FetchOutcome, PageContent, PageListItem, PublishedPage, ResponseResult};

/// Editor every published page is created with.
const PAGE_EDITOR: &str = "markdown";

/// Locale every published page is created with.
const PAGE_LOCALE: &str = "de";

/// Tags attached to every published page.
const PAGE_TAGS: [&str; 2] = ["DocFlow", "Automatisch"];

/// Mutation creating a published page.
const CREATE_PAGE_MUTATION: &str = r"
mutation Page($content: String!, $description: String!, $editor: String!, $isPublished: Boolean!, $isPrivate: Boolean!, $locale: String!, $path: String!, $tags: [String]!, $title: String!) {
  pages {
    create(content: $content, description: $description, editor: $editor, isPublished: $isPublished, isPrivate: $isPrivate, locale: $locale, path: $path, tags: $tags, title: $title) {
      responseResult {
        succeeded,
        errorCode,
        slug,
        message
      },
      page {
        id,
        path,
        title
      }
    }
  }
}
";

/// List query for the export picker (content type included).
const LIST_PAGES_QUERY: &str = r"
query ListPages($limit: Int) {
  pages {
    list(limit: $limit) {
      id
      title
      path
      contentType
    }
  }
}
";

/// List query used to resolve a path to a page id.
const FIND_PAGE_QUERY: &str = r"
query FindPage {
  pages {
    list {
      id
      path
      title
    }
  }
}
";

/// Content query by page id.
const PAGE_CONTENT_QUERY: &str = r"
query GetPageContent($id: Int!) {
  pages {
    single(id: $id) {
      content
      title
      description
      path
      id
    }
  }
}
";

#[derive(Debug, Deserialize)]
struct CreateData {
    pages: CreatePages,
}

#[derive(Debug, Deserialize)]
struct CreatePages {
    create: CreateResult,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateResult {
    response_result: ResponseResult,
    #[serde(default)]
    page: Option<CreatedPage>,
}

#[derive(Debug, Deserialize)]
struct ListData {
    pages: ListPages,
}

#[derive(Debug, Deserialize)]
struct ListPages {
    list: Vec<PageListItem>,
}

#[derive(Debug, Deserialize)]
struct SingleData {
    pages: SinglePages,
}

#[derive(Debug, Deserialize)]
struct SinglePages {
    #[serde(default)]
    single: Option<PageContent>,
}

impl WikiClient {
    /// Create a published page.
    ///
    /// A page is attempted exactly once; there is no automatic retry.
    ///
    /// # Errors
    ///
    /// Returns [`WikiError::Rejected`] when the wiki reports
    /// `responseResult.succeeded == false` (e.g. the path already exists),
    /// or the transport/protocol error that prevented the attempt.
    pub(crate) fn create_page(
        &self,
        content: &str,
        title: &str,
        path: &str,
        description: &str,
    ) -> Result<PublishedPage, WikiError> {
        info!(title, path, "creating wiki page");

        let payload = json!({
            "query": CREATE_PAGE_MUTATION,
            "variables": {
                "content": content,
                "description": description,
                "editor": PAGE_EDITOR,
                "isPublished": true,
                "isPrivate": false,
                "locale": PAGE_LOCALE,
                "path": path,
                "tags": PAGE_TAGS,
                "title": title,
            },
        });

        let data: CreateData = self.post(&payload)?;
        self.interpret_create(data)
    }

    /// Turn a decoded create response into the published page or the
    /// wiki's own failure report.
    fn interpret_create(&self, data: CreateData) -> Result<PublishedPage, WikiError> {
        let result = data.pages.create;

        if result.response_result.succeeded {
            let page = result.page.ok_or_else(|| {
                WikiError::GraphQl("create succeeded but no page was returned".to_owned())
            })?;
            let url = format!("{}/{}", self.external_url(), page.path);
            info!(id = page.id, %url, "wiki page created");
            Ok(PublishedPage {
                id: page.id,
                path: page.path,
                url,
            })
        } else {
            let message = result
                .response_result
                .message
                .unwrap_or_else(|| "unknown error".to_owned());
            let code = result
                .response_result
                .error_code
                .map_or_else(|| "unknown".to_owned(), |code| code.to_string());
            warn!(%message, %code, "wiki rejected page creation");
            Err(WikiError::Rejected { message, code })
        }
    }

    /// List up to `limit` pages, keeping only Markdown pages.
    ///
    /// The wiki has no server-side content-type filter in this protocol, so
    /// the filtering happens client-side.
    pub fn list_pages(&self, limit: u32) -> Result<Vec<PageListItem>, WikiError> {
        debug!(limit, "listing wiki pages");

        let payload = json!({
            "query": LIST_PAGES_QUERY,
            "variables": { "limit": limit },
        });
        let data: ListData = self.post(&payload)?;

        let pages: Vec<PageListItem> = data
            .pages
            .list
            .into_iter()
            .filter(|page| page.content_type.as_deref() == Some("markdown"))
            .collect();
        info!(count = pages.len(), "fetched markdown pages");
        Ok(pages)
    }

    /// Fetch a page's content by path.
    ///
    /// Two round trips: the full page list is scanned for an exact path
    /// match (the protocol offers no lookup-by-path that returns content
    /// reliably), then the content is fetched by id.
    pub fn fetch_page(&self, path: &str) -> Result<FetchOutcome, WikiError> {
        debug!(path, "resolving page id from page list");

        let data: ListData = self.post(&json!({ "query": FIND_PAGE_QUERY }))?;
        let Some(entry) = data.pages.list.into_iter().find(|page| page.path == path) else {
            warn!(path, "no page with this path");
            return Ok(FetchOutcome::Missing);
        };

        let mut title = Some(entry.title).filter(|t| !t.is_empty());

        debug!(id = entry.id, "fetching page content");
        let payload = json!({
            "query": PAGE_CONTENT_QUERY,
            "variables": { "id": entry.id },
        });
        let data: SingleData = self.post(&payload)?;

        let Some(page) = data.pages.single else {
            warn!(id = entry.id, "page has no content payload");
            return Ok(FetchOutcome::Empty { title });
        };

        // Prefer the title from the content response when present.
        if let Some(updated) = page.title.filter(|t| !t.is_empty()) {
            title = Some(updated);
        }

        match page.content.filter(|content| !content.is_empty()) {
            Some(content) => {
                info!(path, chars = content.len(), "fetched page content");
                Ok(FetchOutcome::Found { content, title })
            }
            None => {
                warn!(path, "page found but content is empty");
                Ok(FetchOutcome::Empty { title })
            }
        }
    }

    /// Derive the set of directories from all known page paths.
    ///
    /// There is no dedicated directory API; every non-empty proper prefix
    /// of every page path counts as a directory, and the root (empty
    /// string) is always included.
    pub fn directories(&self) -> Result<Vec<String>, WikiError> {
        let data: ListData = self.post(&json!({ "query": FIND_PAGE_QUERY }))?;

        let mut directories = BTreeSet::new();
        directories.insert(String::new());
        for page in &data.pages.list {
            let parts: Vec<&str> = page.path.split('/').collect();
            for i in 1..parts.len() {
                directories.insert(parts[..i].join("/"));
            }
        }

        Ok(directories.into_iter().collect())
    }

    /// Verify the wiki is reachable and the token works.
    ///
    /// Returns the number of pages the wiki reports.
    pub fn check_connection(&self) -> Result<usize, WikiError> {
        let data: ListData = self.post(&json!({ "query": FIND_PAGE_QUERY }))?;
        Ok(data.pages.list.len())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::decode::decode_response;
    use super::*;

    fn client() -> WikiClient {
        WikiClient::from_config(
            "https://wiki.internal.example.com",
            Some("https://wiki.example.com"),
            "token",
        )
        .unwrap()
    }

    /// Decode a canned 200 response body into create data.
    fn create_data(body: &str) -> CreateData {
        decode_response(200, body).unwrap()
    }

    #[test]
    fn test_create_success_builds_external_url() {
        let data = create_data(
            r#"{"data": {"pages": {"create": {
                "responseResult": {"succeeded": true, "errorCode": 0, "slug": "a-b", "message": "ok"},
                "page": {"id": 42, "path": "a/b", "title": "B"}
            }}}}"#,
        );

        let page = client().interpret_create(data).unwrap();
        assert_eq!(page.id, 42);
        assert_eq!(page.path, "a/b");
        assert_eq!(page.url, "https://wiki.example.com/a/b");
    }

    #[test]
    fn test_create_rejection_carries_message_and_code() {
        let data = create_data(
            r#"{"data": {"pages": {"create": {
                "responseResult": {"succeeded": false, "errorCode": 6002, "message": "Page path already exists"}
            }}}}"#,
        );

        match client().interpret_create(data) {
            Err(WikiError::Rejected { message, code }) => {
                assert_eq!(message, "Page path already exists");
                assert_eq!(code, "6002");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_create_rejection_without_details_uses_placeholders() {
        let data = create_data(
            r#"{"data": {"pages": {"create": {
                "responseResult": {"succeeded": false}
            }}}}"#,
        );

        match client().interpret_create(data) {
            Err(WikiError::Rejected { message, code }) => {
                assert_eq!(message, "unknown error");
                assert_eq!(code, "unknown");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_create_success_without_page_is_protocol_error() {
        let data = create_data(
            r#"{"data": {"pages": {"create": {
                "responseResult": {"succeeded": true}
            }}}}"#,
        );

        assert!(matches!(
            client().interpret_create(data),
            Err(WikiError::GraphQl(_))
        ));
    }

    #[test]
    fn test_external_url_falls_back_to_base_url() {
        let client =
            WikiClient::from_config("https://wiki.example.com/", None, "token").unwrap();
        assert_eq!(client.external_url(), "https://wiki.example.com");
    }

    #[test]
    fn test_blank_config_is_rejected_before_any_call() {
        assert!(matches!(
            WikiClient::from_config("", None, "token"),
            Err(WikiError::NotConfigured)
        ));
        assert!(matches!(
            WikiClient::from_config("https://wiki.example.com", None, "  "),
            Err(WikiError::NotConfigured)
        ));
    }
}
