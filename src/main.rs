// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Drop invalid URLs (with a warning) and gather links from the rest
// 4. Print the links as plain URLs or JSON
// 5. Exit with proper code (0 = success, 1 = no links found, 2 = error)
// =============================================================================

mod cli;
mod logging;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use link_extractor::extract::filter_valid_urls;
use link_extractor::{render, ExtractError, LinkGatherer, TracingRecorder};

#[tokio::main]
async fn main() {
    let code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_code(&e)
        }
    };

    std::process::exit(code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbosity, cli.log_file.as_deref())?;
    tracing::info!("Starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let (urls, invalid) = filter_valid_urls(cli.urls.as_slice())?;
    if !invalid.is_empty() {
        tracing::warn!("Invalid URLs ignored: {}", invalid.join(", "));
    }

    let gatherer = LinkGatherer::new(Arc::new(TracingRecorder))?;
    let index = gatherer.gather(urls.as_slice()).await.require_links()?;

    let stdout = std::io::stdout();
    render(&index, cli.output, &mut stdout.lock())?;

    Ok(())
}

// 1 = nothing was gathered, 2 = anything else went wrong
fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<ExtractError>() {
        Some(ExtractError::NoResults) => 1,
        _ => 2,
    }
}
