//! Wiki.js integration for DocFlow.
//!
//! This crate provides everything needed to turn a converted Markdown
//! document into a published Wiki.js page:
//! - [`WikiClient`]: sync GraphQL API client with bearer-token auth
//! - [`PagePublisher`]: destination resolution + content cleanup + page creation
//! - [`resolve_destination`]: the path/title precedence rules
//! - sanitizers for wiki paths, page titles and filesystem names
//!
//! # Publishing
//!
//! ```ignore
//! use docflow_wiki::{PagePublisher, PublishDefaults, PublishRequest, WikiClient};
//!
//! let client = WikiClient::from_config(
//!     "https://wiki.example.com",
//!     Some("https://wiki.example.com"),
//!     "api-token",
//! )?;
//! let publisher = PagePublisher::new(&client, PublishDefaults::default());
//!
//! let page = publisher.publish(&PublishRequest {
//!     content: "# Bericht\n\nInhalt",
//!     source_name: "bericht.md",
//!     custom_path: None,
//!     custom_title: None,
//! })?;
//! println!("published at {}", page.url);
//! ```

// API client
mod client;
pub use client::WikiClient;

mod error;
pub use error::WikiError;

// Markdown cleanup (applied before publishing)
mod markdown;
pub use markdown::clean_markdown;

// Publishing workflow
mod publisher;
pub use publisher::{PagePublisher, PublishDefaults, PublishRequest};

// Destination resolution
mod resolve;
pub use resolve::{Destination, DestinationRequest, resolve_destination};

mod sanitize;
pub use sanitize::{sanitize_filename, sanitize_path, sanitize_title};

mod types;
pub use types::{FetchOutcome, PageListItem, PublishedPage};
