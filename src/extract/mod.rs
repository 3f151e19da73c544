// src/extract/mod.rs
// =============================================================================
// This module contains the fetch-and-extract pipeline.
//
// Submodules:
// - validate: Checks the URLs given on the command line
// - record: The handle failures are reported through
// - fetch: Downloads one page over a shared HTTP session
// - html: Extracts links from one page
// - gather: Runs fetch and html over a batch and groups links by domain
//
// This file (mod.rs) is the module root - it re-exports the public API so
// callers can write `extract::LinkGatherer` instead of the full path.
// =============================================================================

mod fetch;
mod gather;
mod html;
mod record;
mod validate;

pub use fetch::{FetchResult, Fetcher};
pub use gather::{domain_key, fold, link_path, DomainIndex, LinkGatherer};
pub use html::{extract_links, ExtractedLinks};
pub use record::{Recorder, TracingRecorder};
pub use validate::{filter_valid_urls, validate_url};
