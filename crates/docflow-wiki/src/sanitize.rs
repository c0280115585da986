//! Sanitizers for wiki paths, page titles and filesystem names.
//!
//! All three functions are total and idempotent. Path sanitization is the
//! strictest on structure (`/` separates segments), title sanitization keeps
//! spaces for readability, and filename sanitization targets what a local
//! filesystem will accept.

/// Transliterate German umlauts and ß to their ASCII spellings.
fn transliterate(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            'ä' => out.push_str("ae"),
            'ö' => out.push_str("oe"),
            'ü' => out.push_str("ue"),
            'ß' => out.push_str("ss"),
            'Ä' => out.push_str("Ae"),
            'Ö' => out.push_str("Oe"),
            'Ü' => out.push_str("Ue"),
            _ => out.push(ch),
        }
    }
    out
}

/// Sanitize a slash-delimited wiki path.
///
/// Per segment: spaces become `-`, everything outside `[A-Za-z0-9_-]` is
/// stripped. Segments that end up empty are dropped entirely, so the result
/// never contains `//`, leading or trailing slashes.
pub fn sanitize_path(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let transliterated = transliterate(path);
    let segments: Vec<String> = transliterated
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            segment
                .replace(' ', "-")
                .chars()
                .filter(|&c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
                .collect()
        })
        .filter(|segment: &String| !segment.is_empty())
        .collect();

    segments.join("/")
}

/// Sanitize a wiki page title.
///
/// Spaces are kept (allowed in titles); everything outside `[A-Za-z0-9 _-]`
/// is stripped and the result is trimmed.
pub fn sanitize_title(title: &str) -> String {
    transliterate(title)
        .chars()
        .filter(|&c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .trim()
        .to_owned()
}

/// Sanitize a string for use as a local filename.
///
/// More restrictive than the wiki path rules: characters that are invalid
/// on common filesystems and control characters become `_`, surrounding
/// whitespace and periods are trimmed. Falls back to `"untitled"` when
/// nothing survives.
pub fn sanitize_filename(name: &str) -> String {
    let replaced: String = transliterate(name)
        .chars()
        .map(|c| {
            if matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*') || (c as u32) < 0x20
            {
                '_'
            } else {
                c
            }
        })
        .collect();

    let trimmed = replaced.trim().trim_matches('.');
    if trimmed.is_empty() {
        "untitled".to_owned()
    } else {
        trimmed.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_sanitize_path_transliterates_umlauts() {
        assert_eq!(sanitize_path("Müller/Bericht Q3!"), "Mueller/Bericht-Q3");
        assert_eq!(sanitize_path("Straße/Übersicht"), "Strasse/Uebersicht");
    }

    #[test]
    fn test_sanitize_path_drops_empty_segments() {
        assert_eq!(sanitize_path("//a///b//"), "a/b");
        assert_eq!(sanitize_path("a/!!!/b"), "a/b");
    }

    #[test]
    fn test_sanitize_path_spaces_become_hyphens() {
        assert_eq!(sanitize_path("My Folder/Sub Folder"), "My-Folder/Sub-Folder");
    }

    #[test]
    fn test_sanitize_path_empty_input() {
        assert_eq!(sanitize_path(""), "");
    }

    #[test]
    fn test_sanitize_path_only_invalid_characters() {
        assert_eq!(sanitize_path("!@#$%^&*()"), "");
        assert_eq!(sanitize_path("..."), "");
        assert_eq!(sanitize_path("§ 1 Abs. 2"), "-1-Abs-2");
    }

    #[test]
    fn test_sanitize_path_idempotent() {
        for input in ["Müller/Bericht Q3!", "a b/c d", "//x//", "plain/path"] {
            let once = sanitize_path(input);
            assert_eq!(sanitize_path(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_sanitize_title_keeps_spaces() {
        assert_eq!(sanitize_title("Müller Bericht"), "Mueller Bericht");
        assert_eq!(sanitize_title("Q3 Report (final)"), "Q3 Report final");
    }

    #[test]
    fn test_sanitize_title_trims_whitespace() {
        assert_eq!(sanitize_title("  Bericht  "), "Bericht");
        assert_eq!(sanitize_title(""), "");
    }

    #[test]
    fn test_sanitize_title_idempotent() {
        for input in ["Müller Bericht", "  a b  ", "Q3: Report?", ""] {
            let once = sanitize_title(input);
            assert_eq!(sanitize_title(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_sanitize_filename_replaces_invalid_characters() {
        assert_eq!(sanitize_filename("a/b:c"), "a_b_c");
        assert_eq!(sanitize_filename("report<1>.docx"), "report_1_.docx");
        assert_eq!(sanitize_filename("tab\there"), "tab_here");
    }

    #[test]
    fn test_sanitize_filename_empty_falls_back() {
        assert_eq!(sanitize_filename(""), "untitled");
        assert_eq!(sanitize_filename("..."), "untitled");
        assert_eq!(sanitize_filename("   "), "untitled");
    }

    #[test]
    fn test_sanitize_filename_transliterates() {
        assert_eq!(sanitize_filename("Prüfbericht"), "Pruefbericht");
    }

    #[test]
    fn test_sanitize_filename_trims_periods() {
        assert_eq!(sanitize_filename(".hidden."), "hidden");
    }
}
