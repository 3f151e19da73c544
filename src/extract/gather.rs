// src/extract/gather.rs
// =============================================================================
// This module runs the whole pipeline over a batch of URLs.
//
// How it works:
// 1. Fetch phase: start one fetch per URL, all at once, and wait for
//    every one of them to finish
// 2. Extract phase: for every page that came back with content, start one
//    link extraction, all at once, and wait for every one to finish
// 3. Fold phase: group the links by the domain of the page they were
//    found on, keeping only the path of each link
//
// A phase never starts before the previous one is completely done.
// The DomainIndex is only touched in the fold phase, by a single task,
// so it needs no locking.
//
// Rust concepts:
// - join_all: Waits for a whole batch of futures (like Promise.all)
// - spawn_blocking: Runs CPU work (HTML parsing) on tokio's thread pool
// - BTreeMap: A map that keeps its keys sorted
// =============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;

use super::fetch::{FetchResult, Fetcher};
use super::html::{extract_links, ExtractedLinks};
use super::record::Recorder;
use crate::error::ExtractError;

// Links grouped by the domain (scheme://host[:port]) of the page they
// were found on. Each entry is the path of one link.
//
// Serializes as a plain JSON object: { "http://a.com": ["/x", "/y"] }
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DomainIndex {
    domains: BTreeMap<String, Vec<String>>,
}

impl DomainIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a path under a domain, creating the domain on first use
    pub fn push(&mut self, domain: impl Into<String>, path: impl Into<String>) {
        self.domains.entry(domain.into()).or_default().push(path.into());
    }

    pub fn get(&self, domain: &str) -> Option<&[String]> {
        self.domains.get(domain).map(Vec::as_slice)
    }

    /// No links at all were gathered
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Number of domains
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Total number of paths over all domains
    pub fn path_count(&self) -> usize {
        self.domains.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.domains
            .iter()
            .map(|(domain, paths)| (domain.as_str(), paths.as_slice()))
    }

    /// Every entry as domain + path, one absolute URL each
    pub fn absolute_urls(&self) -> impl Iterator<Item = String> + '_ {
        self.iter()
            .flat_map(|(domain, paths)| paths.iter().map(move |path| format!("{}{}", domain, path)))
    }

    // An index without a single link is the "nothing useful was produced"
    // condition callers must report, so it becomes NoResults here
    pub fn require_links(self) -> Result<Self, ExtractError> {
        if self.is_empty() {
            return Err(ExtractError::NoResults);
        }
        Ok(self)
    }
}

// Runs the fetch, extract and fold phases over a batch of URLs
pub struct LinkGatherer {
    fetcher: Fetcher,
    recorder: Arc<dyn Recorder>,
}

impl LinkGatherer {
    // Creates the shared HTTP session
    //
    // Fails only if the session itself cannot be created.
    pub fn new(recorder: Arc<dyn Recorder>) -> Result<Self, ExtractError> {
        let fetcher = Fetcher::new(recorder.clone())?;
        Ok(Self { fetcher, recorder })
    }

    pub fn with_fetcher(fetcher: Fetcher, recorder: Arc<dyn Recorder>) -> Self {
        Self { fetcher, recorder }
    }

    // Gathers the links of every URL into a DomainIndex
    //
    // The URLs are expected to be validated already. Individual failures
    // never fail the batch: a page that could not be fetched simply adds
    // nothing. An empty result is returned as an empty index.
    pub async fn gather<S: AsRef<str>>(&self, urls: &[S]) -> DomainIndex {
        tracing::info!("Fetching {} page(s)", urls.len());
        let pages = self.fetch_all(urls).await;

        let with_content: Vec<FetchResult> =
            pages.into_iter().filter(FetchResult::has_content).collect();
        tracing::info!("Extracting links from {} page(s)", with_content.len());
        let extracted = self.extract_all(with_content).await;

        let index = fold(extracted);
        tracing::info!(
            "Gathered {} link(s) across {} domain(s)",
            index.path_count(),
            index.len()
        );
        index
    }

    // Fetch phase
    //
    // join_all polls every fetch before waiting on any of them, and only
    // resolves once the slowest one is done. Results come back in input order.
    async fn fetch_all<S: AsRef<str>>(&self, urls: &[S]) -> Vec<FetchResult> {
        let fetches = urls.iter().map(|url| self.fetcher.fetch(url.as_ref()));
        join_all(fetches).await
    }

    // Extract phase
    //
    // Parsing is pure CPU work, so each page goes to the blocking pool.
    // A task that panics is recorded and skipped; the others still count.
    async fn extract_all(&self, pages: Vec<FetchResult>) -> Vec<ExtractedLinks> {
        let tasks = pages.into_iter().map(|page| {
            let url = page.url.clone();
            let task = tokio::task::spawn_blocking(move || extract_links(&page.url, &page.content));
            async move { (url, task.await) }
        });

        let mut extracted = Vec::new();
        for (url, result) in join_all(tasks).await {
            match result {
                Ok(links) => extracted.push(links),
                Err(e) => self
                    .recorder
                    .record(&format!("Failed to extract links from {} ({})", url, e)),
            }
        }
        extracted
    }
}

// Fold phase
//
// Groups every link under the domain of the page it was found on (not the
// domain of the link itself) and keeps only the link's path.
pub fn fold(extracted: Vec<ExtractedLinks>) -> DomainIndex {
    let mut index = DomainIndex::new();

    for ExtractedLinks { source, links } in extracted {
        let Some(domain) = domain_key(&source) else {
            tracing::warn!("Cannot determine the domain of {}, skipping its links", source);
            continue;
        };

        for link in links {
            index.push(domain.as_str(), link_path(&link));
        }
    }

    index
}

// scheme://host[:port] of a URL, without path, query or fragment
//
// Works on the raw text: the host keeps its case and an explicit port is
// kept even when it is the default one.
//
// Example: "http://example.com:80/a?b#c" -> Some("http://example.com:80")
pub fn domain_key(url: &str) -> Option<String> {
    let (scheme, rest) = url.split_once("://")?;
    if !is_scheme(scheme) {
        return None;
    }

    let authority = &rest[..rest.find(['/', '?', '#']).unwrap_or(rest.len())];
    if authority.is_empty() {
        return None;
    }

    Some(format!("{}://{}", scheme, authority))
}

// The path part of a link, taken from the raw text
//
// Query and fragment are dropped, and so is scheme://authority when
// present. Nothing is normalized: dot segments stay and a link without a
// path gives "". Text that is not a URL at all is returned as a path.
//
// Examples:
//   "https://b.com/x/../y?q=1#top" -> "/x/../y"
//   "http://example.com"           -> ""
//   "http-faq.html"                -> "http-faq.html"
pub fn link_path(link: &str) -> String {
    let link = &link[..link.find(['?', '#']).unwrap_or(link.len())];

    let rest = match link.split_once(':') {
        Some((scheme, rest)) if is_scheme(scheme) => rest,
        _ => link,
    };

    match rest.strip_prefix("//") {
        Some(after) => after.find('/').map_or("", |i| &after[i..]).to_string(),
        None => rest.to_string(),
    }
}

// ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why two different tools for concurrency?
//    - Fetching waits on the network, so plain futures polled together
//      by join_all are enough
//    - Parsing keeps a CPU busy, so it goes to spawn_blocking where it
//      cannot stall the async tasks
//
// 2. What does #[serde(transparent)] do?
//    - DomainIndex is serialized as if it were just its inner map
//
// 3. What is `let ... else`?
//    - Like `if let`, but the else branch must leave the loop or function
//    - Keeps the happy path unindented
// -----------------------------------------------------------------------------
