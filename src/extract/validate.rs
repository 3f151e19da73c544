// src/extract/validate.rs
// =============================================================================
// Validation of the URLs given on the command line.
//
// A URL is accepted when it looks like scheme://host[:port][/path...]
// and the scheme is http, https or ftp. Everything else is rejected
// before it ever reaches the fetcher.
// =============================================================================

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ExtractError;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    // scheme, host, optional port, optional path
    Regex::new(r"^(https?|ftp)://[A-Za-z0-9.-]+(:[0-9]+)?(/.*)?$")
        .expect("URL_RE: hardcoded regex is valid")
});

// Checks a single URL
//
// Returns: the same URL when valid, otherwise the reason it was rejected
//
// Example:
//   validate_url("https://example.com/docs") -> Ok("https://example.com/docs")
//   validate_url("example.com")              -> Err(InvalidUrl)
pub fn validate_url(url: &str) -> Result<String, ExtractError> {
    if url.is_empty() {
        return Err(ExtractError::EmptyUrl);
    }
    if !URL_RE.is_match(url) {
        return Err(ExtractError::InvalidUrl(url.to_string()));
    }
    Ok(url.to_string())
}

// Splits the input into (valid, invalid) URLs, keeping the input order
//
// Fails with NoValidUrls when the input is empty or nothing in it is valid.
// The invalid list is handed back so the caller can warn about it.
pub fn filter_valid_urls<S: AsRef<str>>(
    urls: &[S],
) -> Result<(Vec<String>, Vec<String>), ExtractError> {
    let mut valid = Vec::new();
    let mut invalid = Vec::new();

    for url in urls {
        let url = url.as_ref();
        match validate_url(url) {
            Ok(url) => valid.push(url),
            Err(_) => invalid.push(url.to_string()),
        }
    }

    if valid.is_empty() {
        return Err(ExtractError::NoValidUrls);
    }

    Ok((valid, invalid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls_are_returned_unchanged() {
        let valid_urls = [
            "http://example.com",
            "https://example.com",
            "ftp://example.com",
            "https://example.com/path?query=1",
            "http://127.0.0.1:8080/page1",
        ];
        for url in valid_urls {
            assert_eq!(validate_url(url).unwrap(), url, "URL should be valid: {url}");
        }
    }

    #[test]
    fn test_invalid_urls_are_rejected() {
        let invalid_urls = [
            "example.com",
            "://example.com",
            "http:/example.com",
            "https:/example",
            "mailto:someone@example.com",
            "gopher://example.com",
        ];
        for url in invalid_urls {
            assert!(
                matches!(validate_url(url), Err(ExtractError::InvalidUrl(_))),
                "URL should be invalid: {url}"
            );
        }
    }

    #[test]
    fn test_empty_url_is_rejected() {
        assert!(matches!(validate_url(""), Err(ExtractError::EmptyUrl)));
    }

    #[test]
    fn test_filter_keeps_order_and_reports_invalid() {
        let urls = ["https://b.com", "nope", "http://a.com/x", ""];
        let (valid, invalid) = filter_valid_urls(&urls).unwrap();
        assert_eq!(valid, vec!["https://b.com", "http://a.com/x"]);
        assert_eq!(invalid, vec!["nope", ""]);
    }

    #[test]
    fn test_filter_fails_without_valid_urls() {
        let empty: [&str; 0] = [];
        assert!(matches!(filter_valid_urls(&empty), Err(ExtractError::NoValidUrls)));
        assert!(matches!(
            filter_valid_urls(&["example.com"]),
            Err(ExtractError::NoValidUrls)
        ));
    }
}
