// src/extract/html.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, which never fails on broken markup. It
//   recovers whatever structure it can, like a browser does
//
// We also use the `url` crate to resolve relative links to absolute URLs.
//
// Rules applied to every href:
// - mailto: links are dropped
// - anything starting with "http" is kept exactly as written
// - everything else is resolved against the page URL
// - duplicates on the same page are kept once
// =============================================================================

use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a[href]").expect("ANCHOR_SELECTOR: hardcoded selector is valid")
});

// The links found on one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedLinks {
    /// The page the links were found on
    pub source: String,
    /// Absolute link targets, each one at most once, in document order
    pub links: Vec<String>,
}

// Extracts all links from HTML content
//
// Parameters:
//   base_url: the URL of the page (for resolving relative links)
//   html: the HTML content to parse
//
// Returns: ExtractedLinks with every distinct absolute link on the page
//
// Example:
//   base_url = "https://example.com"
//   html = "<a href='/docs'>Docs</a><a href='/docs'>Again</a>"
//   links = ["https://example.com/docs"]
pub fn extract_links(base_url: &str, html: &str) -> ExtractedLinks {
    let mut links = Vec::new();
    let mut seen = HashSet::new();

    // Parse the base URL once. If it is broken we can still keep the
    // absolute links, we just cannot resolve the relative ones.
    let base = match Url::parse(base_url) {
        Ok(url) => Some(url),
        Err(e) => {
            tracing::warn!("Invalid base URL {}: {}", base_url, e);
            None
        }
    };

    let document = Html::parse_document(html);

    for element in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        if let Some(link) = resolve_href(base.as_ref(), href) {
            if seen.insert(link.clone()) {
                links.push(link);
            }
        }
    }

    ExtractedLinks {
        source: base_url.to_string(),
        links,
    }
}

// Turns one href value into an absolute link
//
// Examples (base = "https://example.com/page"):
//   "mailto:me@example.com"      -> None
//   "https://other.com/./a"      -> Some("https://other.com/./a")  (untouched)
//   "/docs"                      -> Some("https://example.com/docs")
//   "#top"                       -> Some("https://example.com/page#top")
fn resolve_href(base: Option<&Url>, href: &str) -> Option<String> {
    if href.starts_with("mailto:") {
        return None;
    }

    if href.starts_with("http") {
        return Some(href.to_string());
    }

    match base?.join(href) {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            tracing::debug!("Skipping unresolvable link {:?}: {}", href, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_set(links: &ExtractedLinks) -> HashSet<&str> {
        links.links.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_extract_absolute_link_verbatim() {
        let html = r#"<a href="https://www.rust-lang.org">Rust</a>"#;
        let links = extract_links("https://example.com", html);
        // No trailing slash added: absolute links are not re-parsed
        assert_eq!(links.links, vec!["https://www.rust-lang.org"]);
        assert_eq!(links.source, "https://example.com");
    }

    #[test]
    fn test_absolute_link_is_not_resolved_against_base() {
        let html = r#"<a href="http://Other.COM/a/../b">x</a>"#;
        let links = extract_links("https://example.com/page", html);
        assert_eq!(links.links, vec!["http://Other.COM/a/../b"]);
    }

    #[test]
    fn test_resolve_relative_link() {
        let html = r#"<a href="/page2">Page 2</a>"#;
        let links = extract_links("http://example.com", html);
        assert_eq!(links.links, vec!["http://example.com/page2"]);
    }

    #[test]
    fn test_resolve_parent_and_fragment_links() {
        let html = r##"
            <a href="../about">About</a>
            <a href="#fragment">Fragment</a>
        "##;
        let links = extract_links("https://example.com/page/", html);
        assert_eq!(
            as_set(&links),
            HashSet::from(["https://example.com/about", "https://example.com/page/#fragment"])
        );
    }

    #[test]
    fn test_skip_mailto() {
        let html = r#"<p><a href="mailto:test@example.com">Email</a></p>"#;
        let links = extract_links("https://example.com", html);
        assert!(links.links.is_empty());
    }

    #[test]
    fn test_mixed_page_excludes_mailto() {
        let html = r#"
            <html>
                <body>
                    <a href="http://example.com/page1">Page 1</a>
                    <a href="/page2">Page 2</a>
                    <a href="mailto:x@example.com">Email</a>
                </body>
            </html>
        "#;
        let links = extract_links("http://example.com", html);
        assert_eq!(
            as_set(&links),
            HashSet::from(["http://example.com/page1", "http://example.com/page2"])
        );
    }

    #[test]
    fn test_duplicates_on_one_page_are_kept_once() {
        let html = r#"
            <a href="/docs">Docs</a>
            <a href="https://example.com/docs">Docs again</a>
            <a href="/docs">Docs once more</a>
        "#;
        let links = extract_links("https://example.com", html);
        assert_eq!(links.links, vec!["https://example.com/docs"]);
    }

    #[test]
    fn test_anchors_without_href_are_skipped() {
        let html = r#"<a name="top">Top</a><a>Nothing</a><a href="/x">X</a>"#;
        let links = extract_links("https://example.com", html);
        assert_eq!(links.links, vec!["https://example.com/x"]);
    }

    #[test]
    fn test_malformed_markup_is_tolerated() {
        let html = r#"<div><a href="/one">one<p><a href='/two'>two</div></span><a href=/three>"#;
        let links = extract_links("https://example.com", html);
        assert_eq!(
            as_set(&links),
            HashSet::from([
                "https://example.com/one",
                "https://example.com/two",
                "https://example.com/three",
            ])
        );
    }

    #[test]
    fn test_empty_markup_yields_no_links() {
        let links = extract_links("https://example.com", "");
        assert!(links.links.is_empty());
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let html = r#"<a href="/a">A</a><a href="https://b.com/">B</a><a href="c">C</a>"#;
        let first = extract_links("https://example.com/dir/", html);
        let second = extract_links("https://example.com/dir/", html);
        assert_eq!(as_set(&first), as_set(&second));
    }

    #[test]
    fn test_invalid_base_keeps_only_absolute_links() {
        let html = r#"<a href="/relative">R</a><a href="https://example.com/abs">A</a>"#;
        let links = extract_links("not a url", html);
        assert_eq!(links.links, vec!["https://example.com/abs"]);
    }
}
