// src/lib.rs
// =============================================================================
// Library root. The binary in main.rs is a thin wrapper around this.
//
// Modules:
// - extract: Fetches pages concurrently and groups their links by domain
// - output: Prints the grouped links as plain URLs or JSON
// - error: Error types shared by both
// =============================================================================

pub mod error;
pub mod extract;
pub mod output;

pub use error::{ExtractError, FetchError};
pub use extract::{DomainIndex, LinkGatherer, Recorder, TracingRecorder};
pub use output::{render, OutputFormat};
