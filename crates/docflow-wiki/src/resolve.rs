//! Destination resolution for uploaded documents.
//!
//! Computes the final `(title, path)` pair of a wiki page from noisy user
//! input: an optional custom path, an optional custom title, the source
//! filename, the uploading user and an optional preselected folder. The
//! precedence rules are ordered and first-match-wins at every decision
//! point; see [`resolve_destination`].

use chrono::{DateTime, Local};
use tracing::info;

use crate::sanitize::{sanitize_path, sanitize_title};

/// Base folder for auto-generated page paths.
const DEFAULT_BASE_FOLDER: &str = "DocFlow";

/// Username segment used when no username was supplied.
const ANONYMOUS_USER: &str = "anonymous";

/// Raw inputs for destination resolution.
#[derive(Debug, Default)]
pub struct DestinationRequest<'a> {
    /// Filename of the converted Markdown document; the title fallback.
    /// A trailing `.md` extension (any case) is ignored.
    pub source_name: &'a str,
    /// User-supplied target path, possibly blank.
    pub custom_path: Option<&'a str>,
    /// User-supplied page title, possibly blank.
    pub custom_title: Option<&'a str>,
    /// Name of the uploading user.
    pub username: Option<&'a str>,
    /// Preselected wiki folder.
    pub default_folder: Option<&'a str>,
}

/// Final page destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    /// Display title (spaces preserved, sanitized).
    pub title: String,
    /// Slash-delimited wiki path; its last segment is the hyphenated title.
    pub path: String,
}

/// Resolve the destination `(title, path)` for a page.
///
/// Path precedence:
/// 1. custom path (title segment appended unless already present)
/// 2. default folder: `{folder}/{title}` — deliberately without the
///    username/timestamp namespace of rule 3
/// 3. `DocFlow/{username}/{YYYY-MM-DD-HHMM}/{title}`
///
/// `now` is taken as a parameter so callers control the clock.
pub fn resolve_destination(request: &DestinationRequest<'_>, now: DateTime<Local>) -> Destination {
    let title = resolve_title(request);
    let title_for_path = title.replace(' ', "-");
    let path = resolve_path(request, &title_for_path, now);

    // Assembled from sanitized parts, but run the whole path through once
    // more; sanitization is idempotent.
    Destination {
        title,
        path: sanitize_path(&path),
    }
}

fn resolve_title(request: &DestinationRequest<'_>) -> String {
    if let Some(custom) = non_blank(request.custom_title) {
        let sanitized = sanitize_title(custom);
        if sanitized != custom {
            info!(original = custom, %sanitized, "title contained invalid characters");
        }
        sanitized
    } else {
        sanitize_title(strip_markdown_extension(request.source_name))
    }
}

fn resolve_path(
    request: &DestinationRequest<'_>,
    title_for_path: &str,
    now: DateTime<Local>,
) -> String {
    if let Some(custom) = non_blank(request.custom_path) {
        let trimmed = custom.trim_matches('/');
        let sanitized = sanitize_path(trimmed);
        if sanitized != trimmed {
            info!(original = trimmed, %sanitized, "path contained invalid characters");
        }
        // Append the title segment only if the path does not already end
        // with it.
        if sanitized.ends_with(&format!("/{title_for_path}")) || sanitized == title_for_path {
            sanitized
        } else {
            format!("{sanitized}/{title_for_path}")
        }
    } else if let Some(folder) = non_blank(request.default_folder) {
        // An explicitly selected folder is used as-is, without the
        // username/timestamp namespace.
        let folder = sanitize_path(folder);
        info!(%folder, "using preselected folder");
        format!("{folder}/{title_for_path}")
    } else {
        let username = match request.username {
            Some(name) if !name.is_empty() => sanitize_path(name),
            _ => ANONYMOUS_USER.to_owned(),
        };
        let stamp = now.format("%Y-%m-%d-%H%M");
        let base = sanitize_path(&format!("{DEFAULT_BASE_FOLDER}/{username}/{stamp}"));
        info!(%base, "no path given, using generated default");
        format!("{base}/{title_for_path}")
    }
}

/// Trimmed value, or `None` when absent or blank.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Strip a trailing `.md` extension, case-insensitively.
fn strip_markdown_extension(name: &str) -> &str {
    let bytes = name.as_bytes();
    if bytes.len() >= 3 && bytes[bytes.len() - 3..].eq_ignore_ascii_case(b".md") {
        &name[..name.len() - 3]
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
    }

    fn request<'a>() -> DestinationRequest<'a> {
        DestinationRequest {
            source_name: "bericht.md",
            ..DestinationRequest::default()
        }
    }

    #[test]
    fn test_custom_title_wins_over_filename() {
        let destination = resolve_destination(
            &DestinationRequest {
                custom_title: Some("Q3 Report"),
                custom_path: Some("Docs/Reports"),
                ..request()
            },
            fixed_now(),
        );
        assert_eq!(destination.title, "Q3 Report");
        assert_eq!(destination.path, "Docs/Reports/Q3-Report");
    }

    #[test]
    fn test_custom_path_ending_in_title_not_duplicated() {
        let destination = resolve_destination(
            &DestinationRequest {
                custom_title: Some("Q3 Report"),
                custom_path: Some("Docs/Q3-Report"),
                ..request()
            },
            fixed_now(),
        );
        assert_eq!(destination.path, "Docs/Q3-Report");
    }

    #[test]
    fn test_single_segment_path_equal_to_title_not_duplicated() {
        let destination = resolve_destination(
            &DestinationRequest {
                custom_title: Some("Q3 Report"),
                custom_path: Some("Q3-Report"),
                ..request()
            },
            fixed_now(),
        );
        assert_eq!(destination.path, "Q3-Report");
    }

    #[test]
    fn test_partial_segment_suffix_still_appends_title() {
        // "Docs/XQ3-Report" ends with the characters "Q3-Report" but not
        // with the segment, so the title is appended.
        let destination = resolve_destination(
            &DestinationRequest {
                custom_title: Some("Q3 Report"),
                custom_path: Some("Docs/XQ3-Report"),
                ..request()
            },
            fixed_now(),
        );
        assert_eq!(destination.path, "Docs/XQ3-Report/Q3-Report");
    }

    #[test]
    fn test_custom_path_surrounding_slashes_trimmed() {
        let destination = resolve_destination(
            &DestinationRequest {
                custom_title: Some("Notes"),
                custom_path: Some("/Docs/Archive/"),
                ..request()
            },
            fixed_now(),
        );
        assert_eq!(destination.path, "Docs/Archive/Notes");
    }

    #[test]
    fn test_title_falls_back_to_filename_without_extension() {
        let destination = resolve_destination(&request(), fixed_now());
        assert_eq!(destination.title, "bericht");
    }

    #[test]
    fn test_markdown_extension_stripped_case_insensitively() {
        for name in ["bericht.md", "bericht.MD", "bericht.Md"] {
            let destination = resolve_destination(
                &DestinationRequest {
                    source_name: name,
                    ..DestinationRequest::default()
                },
                fixed_now(),
            );
            assert_eq!(destination.title, "bericht", "for {name:?}");
        }
    }

    #[test]
    fn test_generated_default_path_has_user_and_timestamp() {
        let destination = resolve_destination(
            &DestinationRequest {
                username: Some("jdoe"),
                ..request()
            },
            fixed_now(),
        );
        assert_eq!(destination.path, "DocFlow/jdoe/2025-03-14-0930/bericht");
    }

    #[test]
    fn test_missing_username_becomes_anonymous() {
        let destination = resolve_destination(&request(), fixed_now());
        assert_eq!(destination.path, "DocFlow/anonymous/2025-03-14-0930/bericht");
    }

    #[test]
    fn test_default_folder_skips_user_namespace() {
        // Selecting an explicit folder deliberately bypasses the
        // username/timestamp segments; the page lands directly below it.
        let destination = resolve_destination(
            &DestinationRequest {
                default_folder: Some("Shared"),
                username: Some("jdoe"),
                ..request()
            },
            fixed_now(),
        );
        assert_eq!(destination.path, "Shared/bericht");
    }

    #[test]
    fn test_blank_inputs_treated_as_absent() {
        let destination = resolve_destination(
            &DestinationRequest {
                custom_path: Some("   "),
                custom_title: Some(""),
                default_folder: Some(" "),
                username: Some("jdoe"),
                ..request()
            },
            fixed_now(),
        );
        assert_eq!(destination.title, "bericht");
        assert_eq!(destination.path, "DocFlow/jdoe/2025-03-14-0930/bericht");
    }

    #[test]
    fn test_umlauts_in_title_and_path() {
        let destination = resolve_destination(
            &DestinationRequest {
                custom_title: Some("Müller Bericht"),
                custom_path: Some("Prüfung"),
                ..request()
            },
            fixed_now(),
        );
        assert_eq!(destination.title, "Mueller Bericht");
        assert_eq!(destination.path, "Pruefung/Mueller-Bericht");
    }

    #[test]
    fn test_path_invariant_characters() {
        let destination = resolve_destination(
            &DestinationRequest {
                custom_title: Some("Q3: Report!"),
                custom_path: Some("Docs & More/2025"),
                username: Some("jdoe"),
                ..request()
            },
            fixed_now(),
        );
        assert!(
            destination
                .path
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '_' | '-')),
            "unexpected characters in {:?}",
            destination.path
        );
        assert!(!destination.path.split('/').any(str::is_empty));
        assert!(destination.path.ends_with(&destination.title.replace(' ', "-")));
    }
}
