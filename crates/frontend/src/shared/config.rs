//! Deployment base path resolution.
//!
//! The site can be served from a domain root or from a subdirectory (e.g.
//! project pages hosting), so asset URLs are built against the document
//! base URI rather than a hard-coded root.

/// Normalize a configured deployment root to end with exactly one `/`.
pub fn normalize_base_path(raw: &str) -> String {
    format!("{}/", raw.trim_end_matches('/'))
}

/// The directory part of a document URI. The base URI carries the document
/// name when no `<base>` element is present, so everything past the last
/// separator is dropped.
pub fn document_directory(uri: &str) -> &str {
    match uri.rfind('/') {
        Some(index) => &uri[..index],
        None => "",
    }
}

/// The deployment root the app is served from, ending with exactly one
/// `/`. Falls back to `"/"` outside a browser document.
pub fn base_path() -> String {
    let base_uri = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.base_uri().ok())
        .flatten();

    match base_uri {
        Some(uri) => normalize_base_path(document_directory(&uri)),
        None => "/".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_exactly_one_separator() {
        assert_eq!(normalize_base_path("/portfolio"), "/portfolio/");
        assert_eq!(normalize_base_path("/portfolio/"), "/portfolio/");
        assert_eq!(normalize_base_path("/portfolio///"), "/portfolio/");
        assert_eq!(normalize_base_path(""), "/");
    }

    #[test]
    fn test_document_directory_strips_the_document_name() {
        assert_eq!(
            document_directory("https://example.com/portfolio/index.html"),
            "https://example.com/portfolio"
        );
        assert_eq!(
            document_directory("https://example.com/portfolio/"),
            "https://example.com/portfolio"
        );
        assert_eq!(document_directory("no-separator"), "");
    }

    #[test]
    fn test_base_path_falls_back_without_a_document() {
        assert_eq!(base_path(), "/");
    }
}
