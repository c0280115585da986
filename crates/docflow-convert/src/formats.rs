//! Format tables for pandoc invocations.
//!
//! Input tokens are derived from the upload's file extension; unrecognized
//! extensions fall back to `docx`, which is by far the most common upload.
//! Output tokens cover the export targets the UI offers.

/// File extensions accepted for conversion to Markdown.
pub const ALLOWED_EXTENSIONS: [&str; 19] = [
    "doc", "docx", "odt", "rtf", "tex", "html", "htm", "epub", "ppt", "pptx", "odp", "rst",
    "textile", "wiki", "dbk", "xml", "adoc", "asciidoc", "org",
];

/// Whether the filename carries an extension we can convert.
pub fn is_allowed(filename: &str) -> bool {
    extension(filename).is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}

/// Pandoc input token for a filename, defaulting to `docx` for
/// unrecognized extensions.
pub fn input_format(filename: &str) -> &'static str {
    match extension(filename).as_deref() {
        Some("odt") => "odt",
        Some("rtf") => "rtf",
        Some("tex") => "latex",
        Some("html" | "htm") => "html",
        Some("epub") => "epub",
        Some("ppt" | "pptx") => "pptx",
        Some("odp") => "odp",
        Some("rst") => "rst",
        Some("textile") => "textile",
        Some("wiki") => "mediawiki",
        Some("dbk" | "xml") => "docbook",
        Some("adoc" | "asciidoc") => "asciidoc",
        Some("org") => "org",
        // "doc", "docx" and anything unknown
        _ => "docx",
    }
}

/// Pandoc output token for an export target format.
pub fn output_format(target: &str) -> Option<&'static str> {
    match target {
        "docx" => Some("docx"),
        "odt" => Some("odt"),
        "rtf" => Some("rtf"),
        "pdf" => Some("pdf"),
        "html" => Some("html"),
        "tex" => Some("latex"),
        "epub" => Some("epub"),
        "pptx" => Some("pptx"),
        _ => None,
    }
}

/// Lowercased extension after the last `.`, if any.
fn extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
}
