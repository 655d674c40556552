//! File naming for downloaded images.

use regex::Regex;
use std::sync::LazyLock;

/// Characters that may not appear in a generated file stem.
static UNSAFE_CHARS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_-]").unwrap());

/// Image URLs containing one of these (case-insensitive) are diagrams.
pub const DIAGRAM_KEYWORDS: &[&str] = &["architecture", "diagram", "reference"];

/// File stem for a page URL: its last path segment with `-` turned into `_`
/// and anything outside `[A-Za-z0-9_-]` dropped.
pub fn clean_filename(url: &str) -> String {
    let name = url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .replace('-', "_");
    UNSAFE_CHARS_REGEX.replace_all(&name, "").into_owned()
}

/// Extension (with dot) for an image, from its content type or URL suffix.
pub fn infer_extension(content_type: &str, url: &str) -> &'static str {
    let content_type = content_type.to_ascii_lowercase();
    if content_type.contains("svg") || url.ends_with(".svg") {
        ".svg"
    } else if content_type.contains("png") || url.ends_with(".png") {
        ".png"
    } else if content_type.contains("jpg")
        || content_type.contains("jpeg")
        || url.ends_with(".jpg")
        || url.ends_with(".jpeg")
    {
        ".jpg"
    } else {
        ".png"
    }
}

/// Whether an image URL looks like an architecture diagram.
pub fn is_diagram_url(url: &str) -> bool {
    let lower = url.to_lowercase();
    DIAGRAM_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_filename() {
        assert_eq!(
            clean_filename("https://learn.microsoft.com/en-us/azure/architecture/guide/architecture-styles/"),
            "architecture_styles"
        );
        assert_eq!(
            clean_filename("https://example.com/a/compute-decision-tree"),
            "compute_decision_tree"
        );
        assert_eq!(clean_filename("https://example.com/x/page.html?q=1"), "pagehtmlq1");
    }

    #[test]
    fn test_infer_extension() {
        assert_eq!(infer_extension("image/svg+xml", "https://x/a"), ".svg");
        assert_eq!(infer_extension("", "https://x/a.svg"), ".svg");
        assert_eq!(infer_extension("image/png", "https://x/a"), ".png");
        assert_eq!(infer_extension("image/jpeg", "https://x/a"), ".jpg");
        assert_eq!(infer_extension("", "https://x/a.jpeg"), ".jpg");
        assert_eq!(infer_extension("application/octet-stream", "https://x/a"), ".png");
    }

    #[test]
    fn test_is_diagram_url() {
        assert!(is_diagram_url("https://x/images/AKS-Baseline-Architecture.svg"));
        assert!(is_diagram_url("https://x/media/flow-diagram.png"));
        assert!(is_diagram_url("https://x/reference-architectures/hub.png"));
        assert!(!is_diagram_url("https://x/media/logo.png"));
    }
}
