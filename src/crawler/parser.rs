//! HTML parser for link extraction
//!
//! Resolves every hyperlink reference found in a page against the page's
//! effective base URL, producing absolute URLs. Scope filtering and
//! signature deduplication run on the output in the crawl loop; this
//! module only parses and resolves.

use crate::ExtractError;
use scraper::{Html, Selector};
use url::Url;

/// Extracts all hyperlinks from HTML, resolved against `base_url`
///
/// # Link Extraction Rules
///
/// **Include:** `<a href="...">` tags anywhere in the document.
///
/// **Exclude:**
/// - `javascript:`, `mailto:`, `tel:` links
/// - Data URIs
/// - Fragment-only links (same-page anchors)
/// - `<a href="..." download>`
/// - Anything that does not resolve to an HTTP(S) URL
///
/// Malformed markup is tolerated: the parser recovers what it can, and
/// hrefs that fail to resolve are skipped. The returned set carries no
/// ordering guarantee beyond document order.
///
/// # Example
///
/// ```
/// use crawlscope::crawler::extract_links;
/// use url::Url;
///
/// let html = r#"<html><body><a href="/page">Link</a></body></html>"#;
/// let base = Url::parse("https://example.com/").unwrap();
/// let links = extract_links(html, &base).unwrap();
/// assert_eq!(links[0].as_str(), "https://example.com/page");
/// ```
pub fn extract_links(html: &str, base_url: &Url) -> Result<Vec<Url>, ExtractError> {
    let document = Html::parse_document(html);

    let selector =
        Selector::parse("a[href]").map_err(|e| ExtractError::Selector(e.to_string()))?;

    let mut links = Vec::new();
    for element in document.select(&selector) {
        // Skip if it has the download attribute
        if element.value().attr("download").is_some() {
            continue;
        }

        if let Some(href) = element.value().attr("href") {
            if let Some(url) = resolve_link(href, base_url) {
                links.push(url);
            }
        }
    }

    Ok(links)
}

/// Resolves a link href to an absolute URL and validates it
///
/// Returns None if the link should be excluded:
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - Fragment-only links
/// - Invalid URLs
/// - Non-HTTP(S) URLs after resolution
fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    // Skip empty hrefs
    if href.is_empty() {
        return None;
    }

    // Skip special schemes
    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    // Skip fragment-only links (same page anchors)
    if href.starts_with('#') {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) => {
            if absolute_url.scheme() == "http" || absolute_url.scheme() == "https" {
                Some(absolute_url)
            } else {
                None
            }
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://example.com/page").unwrap()
    }

    fn links(html: &str) -> Vec<String> {
        extract_links(html, &base_url())
            .unwrap()
            .into_iter()
            .map(|u| u.to_string())
            .collect()
    }

    #[test]
    fn test_extract_absolute_link() {
        let found = links(r#"<html><body><a href="https://other.com/page">Link</a></body></html>"#);
        assert_eq!(found, vec!["https://other.com/page"]);
    }

    #[test]
    fn test_extract_relative_link() {
        let found = links(r#"<html><body><a href="/other">Link</a></body></html>"#);
        assert_eq!(found, vec!["https://example.com/other"]);
    }

    #[test]
    fn test_extract_relative_path_link() {
        let found = links(r#"<html><body><a href="other">Link</a></body></html>"#);
        assert_eq!(found, vec!["https://example.com/other"]);
    }

    #[test]
    fn test_query_is_preserved() {
        let found = links(r#"<html><body><a href="/p?id=1">Link</a></body></html>"#);
        assert_eq!(found, vec!["https://example.com/p?id=1"]);
    }

    #[test]
    fn test_skip_javascript_link() {
        let found = links(r#"<html><body><a href="javascript:void(0)">Link</a></body></html>"#);
        assert!(found.is_empty());
    }

    #[test]
    fn test_skip_mailto_link() {
        let found = links(r#"<html><body><a href="mailto:test@example.com">Email</a></body></html>"#);
        assert!(found.is_empty());
    }

    #[test]
    fn test_skip_tel_link() {
        let found = links(r#"<html><body><a href="tel:+1234567890">Call</a></body></html>"#);
        assert!(found.is_empty());
    }

    #[test]
    fn test_skip_data_uri() {
        let found = links(r#"<html><body><a href="data:text/html,<h1>Test</h1>">Data</a></body></html>"#);
        assert!(found.is_empty());
    }

    #[test]
    fn test_skip_download_link() {
        let found = links(r#"<html><body><a href="/file.pdf" download>Download</a></body></html>"#);
        assert!(found.is_empty());
    }

    #[test]
    fn test_skip_fragment_only() {
        let found = links(r##"<html><body><a href="#section">Jump</a></body></html>"##);
        assert!(found.is_empty());
    }

    #[test]
    fn test_multiple_links_in_document_order() {
        let found = links(
            r#"
            <html>
            <body>
                <a href="/page1">Link 1</a>
                <a href="/page2">Link 2</a>
                <a href="https://other.com/page3">Link 3</a>
            </body>
            </html>
        "#,
        );
        assert_eq!(
            found,
            vec![
                "https://example.com/page1",
                "https://example.com/page2",
                "https://other.com/page3"
            ]
        );
    }

    #[test]
    fn test_mixed_valid_and_invalid_links() {
        let found = links(
            r#"
            <html>
            <body>
                <a href="/valid">Valid</a>
                <a href="javascript:alert('no')">Invalid</a>
                <a href="mailto:test@example.com">Invalid</a>
                <a href="/another-valid">Valid</a>
            </body>
            </html>
        "#,
        );
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_malformed_markup_is_tolerated() {
        let found = links(r#"<html><body><a href="/ok">ok<div></a><p>"#);
        assert_eq!(found, vec!["https://example.com/ok"]);
    }

    #[test]
    fn test_empty_document() {
        let found = links("");
        assert!(found.is_empty());
    }
}
