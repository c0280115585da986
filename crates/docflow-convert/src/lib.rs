//! Document conversion for DocFlow.
//!
//! Wraps pandoc as an external process for both directions:
//! - office documents → Markdown (before publishing to the wiki)
//! - Markdown → office documents (when exporting wiki pages)
//!
//! The [`Exporter`] drives the export pipeline (fetch page, write Markdown,
//! convert to each requested format) and [`archive::zip_directory`] bundles
//! a result directory for download.

mod archive;
mod error;
mod exporter;
mod formats;
mod pandoc;

pub use archive::zip_directory;
pub use error::ConvertError;
pub use exporter::{ExportReport, Exporter, PageSource};
pub use formats::{ALLOWED_EXTENSIONS, input_format, is_allowed, output_format};
pub use pandoc::Pandoc;
