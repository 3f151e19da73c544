// src/extract/fetch.rs
// =============================================================================
// This module downloads the pages we extract links from.
//
// Key functionality:
// - Makes exactly one HTTP GET request per URL (no retries)
// - Only a 200 OK response counts as success
// - Any failure (404, timeout, DNS error, ...) is logged through the
//   Recorder and turned into an empty page, it is never returned as an error
//
// One `reqwest::Client` is shared by every fetch. The client keeps a
// connection pool internally, so concurrent fetches to the same host
// reuse connections.
//
// Rust concepts:
// - async/await: For concurrent network I/O
// - Arc<dyn Trait>: Shared ownership of a trait object (the recorder)
// - The ? operator: Early return on errors inside try_fetch
// =============================================================================

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, StatusCode};

use super::record::Recorder;
use crate::error::{ExtractError, FetchError};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_REDIRECTS: usize = 10;

// The outcome of fetching one URL
//
// An empty `content` means "skip this page": either the fetch failed or
// the page really was empty. Both cases are treated the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// The URL that was requested
    pub url: String,
    /// The response body, or "" when the fetch failed
    pub content: String,
}

impl FetchResult {
    pub fn new(url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content: content.into(),
        }
    }

    pub fn failed(url: impl Into<String>) -> Self {
        Self::new(url, String::new())
    }

    /// True when there is markup worth handing to the link extractor
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }
}

// Fetches pages over a shared HTTP session
#[derive(Clone)]
pub struct Fetcher {
    client: Client,
    recorder: Arc<dyn Recorder>,
}

impl Fetcher {
    // Builds the shared HTTP client
    //
    // This is the only place where the pipeline can fail for real:
    // without a client there is nothing to fetch with.
    pub fn new(recorder: Arc<dyn Recorder>) -> Result<Self, ExtractError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(ExtractError::Session)?;

        Ok(Self::with_client(client, recorder))
    }

    // Uses a client that was configured somewhere else
    pub fn with_client(client: Client, recorder: Arc<dyn Recorder>) -> Self {
        Self { client, recorder }
    }

    // Fetches a single URL
    //
    // Returns: FetchResult with the body on 200 OK, or with an empty body
    // on any failure. Failures are reported to the recorder once each.
    pub async fn fetch(&self, url: &str) -> FetchResult {
        if url.is_empty() {
            self.recorder.record("Failed to fetch: URL cannot be empty");
            return FetchResult::failed(url);
        }

        match self.try_fetch(url).await {
            Ok(content) => {
                tracing::debug!(url, bytes = content.len(), "fetched page");
                FetchResult::new(url, content)
            }
            Err(e) => {
                self.recorder.record(&format!("Failed to fetch {} ({})", url, e));
                FetchResult::failed(url)
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        Ok(response.text().await?)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Arc<dyn Recorder>?
//    - dyn Recorder is "any type that implements Recorder"
//    - Arc lets many fetches share the same recorder without copying it
//    - Cloning an Arc only bumps a reference count
//
// 2. Why is fetch() not returning a Result?
//    - One broken page must never stop the others
//    - The error is logged and the page is simply left empty
//
// 3. What does response.text() do?
//    - Reads the whole body and decodes it using the charset the server sent
// -----------------------------------------------------------------------------
