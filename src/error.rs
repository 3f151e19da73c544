// src/error.rs
// =============================================================================
// Error types for the extraction pipeline.
//
// We use the `thiserror` crate, which generates the Display and Error
// implementations from the #[error("...")] attributes.
//
// Two enums live here:
// - ExtractError: errors a caller of the pipeline can see
// - FetchError: the reason a single fetch failed. It never leaves the
//   fetcher; it is turned into a log event and an empty page instead.
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// An empty string was given where a URL was expected
    #[error("URL cannot be empty")]
    EmptyUrl,

    /// The URL does not match scheme://host[:port][/path]
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Nothing usable was left after validating the input
    #[error("No valid URLs provided")]
    NoValidUrls,

    /// The shared HTTP client could not be built
    #[error("Failed to create HTTP session: {0}")]
    Session(#[source] reqwest::Error),

    /// Every page failed or had no links
    #[error("No links could be extracted from the provided URLs")]
    NoResults,
}

#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with something other than 200 OK
    #[error("status code: {}", .0.as_u16())]
    Status(StatusCode),

    /// DNS, connection, TLS, timeout, body decoding...
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = FetchError::Status(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "status code: 404");
    }

    #[test]
    fn test_invalid_url_message() {
        let err = ExtractError::InvalidUrl("example.com".to_string());
        assert_eq!(err.to_string(), "Invalid URL: example.com");
    }
}
