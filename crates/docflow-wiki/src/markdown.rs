//! Cleanup of Markdown produced by document conversion.
//!
//! Converters leave recognizable artifacts behind: page-number markers from
//! print layouts, block quotes that were never quotes, stray `**\` escape
//! sequences and runs of blank lines. [`clean_markdown`] strips them before
//! the content is published.

use std::sync::LazyLock;

use regex::Regex;

/// `Seite <n> von <m>` page markers from print-oriented source documents.
static PAGE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[Ss]eite\s+\d+\s+von\s+\d+").expect("invalid page marker regex"));

/// Leading `>` (plus following whitespace) at the start of a line.
static QUOTE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^>\s*").expect("invalid quote prefix regex"));

/// Strip known conversion artifacts from Markdown text.
///
/// Idempotent: cleaning already-clean text returns it unchanged.
pub fn clean_markdown(content: &str) -> String {
    let cleaned = PAGE_MARKER.replace_all(content, "");
    let cleaned = QUOTE_PREFIX.replace_all(&cleaned, "");
    let mut cleaned = cleaned.replace("**\\", "");

    // Collapse runs of blank lines down to a single blank line.
    while cleaned.contains("\n\n\n") {
        cleaned = cleaned.replace("\n\n\n", "\n\n");
    }

    cleaned.trim().to_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_removes_page_markers() {
        assert_eq!(clean_markdown("vorher Seite 1 von 10 nachher"), "vorher  nachher");
        assert_eq!(clean_markdown("seite 12 von 30"), "");
    }

    #[test]
    fn test_strips_quote_prefixes() {
        assert_eq!(clean_markdown("> quoted\n> more"), "quoted\nmore");
        assert_eq!(clean_markdown(">no space"), "no space");
    }

    #[test]
    fn test_removes_escape_artifacts() {
        assert_eq!(clean_markdown("text**\\rest"), "textrest");
    }

    #[test]
    fn test_collapses_blank_line_runs() {
        assert_eq!(clean_markdown("a\n\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_combined_artifacts() {
        let input = "Seite 1 von 10\n> quoted\n\n\n\ntext**\\";
        assert_eq!(clean_markdown(input), "quoted\n\ntext");
    }

    #[test]
    fn test_idempotent() {
        for input in [
            "Seite 1 von 10\n> quoted\n\n\n\ntext**\\",
            "# Heading\n\nBody text.\n",
            "",
        ] {
            let once = clean_markdown(input);
            assert_eq!(clean_markdown(&once), once, "not idempotent for {input:?}");
        }
    }
}
