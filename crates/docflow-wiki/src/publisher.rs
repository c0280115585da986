//! Page publishing workflow.
//!
//! [`PagePublisher`] encapsulates the steps from a converted Markdown
//! document to a live wiki page:
//!
//! 1. Resolve the destination title and path
//! 2. Strip conversion artifacts from the content
//! 3. Create the page through the GraphQL API
//!
//! Every document is attempted exactly once; all failures come back as
//! [`WikiError`] values so a batch can keep going after a bad file.

use chrono::Local;
use tracing::info;

use crate::client::WikiClient;
use crate::error::WikiError;
use crate::markdown::clean_markdown;
use crate::resolve::{DestinationRequest, resolve_destination};
use crate::types::PublishedPage;

/// Batch-level inputs shared by every document of an upload.
#[derive(Debug, Clone, Default)]
pub struct PublishDefaults {
    /// Name of the uploading user, used in generated default paths.
    pub username: Option<String>,
    /// Preselected wiki folder; overrides the generated default path.
    pub default_folder: Option<String>,
}

/// Per-document inputs.
#[derive(Debug)]
pub struct PublishRequest<'a> {
    /// Markdown body, prior to cleanup.
    pub content: &'a str,
    /// Filename of the converted document; the title fallback.
    pub source_name: &'a str,
    /// User-supplied target path for this document.
    pub custom_path: Option<&'a str>,
    /// User-supplied title for this document.
    pub custom_title: Option<&'a str>,
}

/// Handles publishing converted documents as wiki pages.
pub struct PagePublisher<'a> {
    client: &'a WikiClient,
    defaults: PublishDefaults,
}

impl<'a> PagePublisher<'a> {
    /// Create a new page publisher.
    #[must_use]
    pub fn new(client: &'a WikiClient, defaults: PublishDefaults) -> Self {
        Self { client, defaults }
    }

    /// Publish one document as a wiki page.
    ///
    /// # Errors
    ///
    /// Returns the [`WikiError`] describing why the page could not be
    /// created; the destination resolution itself cannot fail.
    pub fn publish(&self, request: &PublishRequest<'_>) -> Result<PublishedPage, WikiError> {
        let now = Local::now();

        let destination = resolve_destination(
            &DestinationRequest {
                source_name: request.source_name,
                custom_path: request.custom_path,
                custom_title: request.custom_title,
                username: self.defaults.username.as_deref(),
                default_folder: self.defaults.default_folder.as_deref(),
            },
            now,
        );

        let cleaned = clean_markdown(request.content);
        let removed = request
            .content
            .chars()
            .count()
            .saturating_sub(cleaned.chars().count());
        info!(removed, "cleaned conversion artifacts from markdown");

        let description = format!(
            "Automatisch erstellt durch DocFlow am {}",
            now.format("%Y%m%d_%H%M%S")
        );

        self.client
            .create_page(&cleaned, &destination.title, &destination.path, &description)
    }
}
