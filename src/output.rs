// src/output.rs
// =============================================================================
// Renders a DomainIndex for the user.
//
// Two formats:
// - stdout: one absolute URL (domain + path) per line
// - json: the index as { "domain": ["path", ...] }, pretty printed
// =============================================================================

use std::io::{self, Write};

use clap::ValueEnum;

use crate::extract::DomainIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One absolute URL per line
    Stdout,
    /// The grouped index as JSON
    Json,
}

// Writes the index in the requested format
pub fn render<W: Write>(index: &DomainIndex, format: OutputFormat, out: &mut W) -> io::Result<()> {
    match format {
        OutputFormat::Stdout => {
            for url in index.absolute_urls() {
                writeln!(out, "{}", url)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, index)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
