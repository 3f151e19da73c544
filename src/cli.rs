// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Example:
//   link-extractor -u https://example.com -u https://rust-lang.org -o json
// =============================================================================

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use link_extractor::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "link-extractor",
    version,
    about = "Fetch web pages concurrently and list their links grouped by domain",
    long_about = "link-extractor downloads every given URL at the same time, extracts the links \
                  from each page and prints them grouped by the domain of the page they were found on."
)]
pub struct Cli {
    /// The URLs to process (can be given multiple times)
    ///
    /// Invalid URLs are ignored with a warning
    #[arg(short = 'u', long = "url", required = true)]
    pub urls: Vec<String>,

    /// Output format: 'stdout' (one absolute URL per line) or 'json'
    #[arg(short, long, value_enum, ignore_case = true)]
    pub output: OutputFormat,

    /// Logging level (RUST_LOG overrides this)
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = LogLevel::Info)]
    pub verbosity: LogLevel,

    /// Append logs to this file instead of stderr
    #[arg(short, long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
