// src/output/mod.rs
// =============================================================================
// Writes the filtered repository list to a file.
//
// Submodules:
// - csv: comma-separated rows with a header
// - json: pretty-printed array of objects
// - html: a small standalone page with a table
//
// Every renderer is a pure function from records to a String. This file picks
// the renderer, builds the file name and does the single write.
// =============================================================================

mod csv;
mod html;
mod json;

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use thiserror::Error;
use tracing::debug;

use crate::repo::RepositoryRecord;

// File formats the writer can produce
//
// ValueEnum lets clap parse --output-format csv|json|html straight into this
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated values with a Name,URL,Description header
    Csv,
    /// Array of {"Name", "URL", "Description"} objects
    Json,
    /// HTML page with a table of linked repository names
    Html,
}

impl OutputFormat {
    // File extension appended to the output name
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
        }
    }
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to serialize repositories as JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// Returns <base_name>.<extension>
//
// Example: ("ghpsum", Json) -> "ghpsum.json"
pub fn output_path(base_name: &str, format: OutputFormat) -> PathBuf {
    PathBuf::from(format!("{}.{}", base_name, format.extension()))
}

// Serializes the records in the requested format
//
// Only JSON can fail; CSV and HTML are built from plain strings
pub fn render(records: &[RepositoryRecord], format: OutputFormat) -> Result<String, OutputError> {
    let content = match format {
        OutputFormat::Csv => csv::render(records),
        OutputFormat::Json => json::render(records)?,
        OutputFormat::Html => html::render(records),
    };
    Ok(content)
}

// Renders the records and writes them to <base_name>.<format>
//
// Any existing file at that path is replaced without asking.
// Returns: the path that was written
pub fn write_output(
    records: &[RepositoryRecord],
    base_name: &str,
    format: OutputFormat,
) -> Result<PathBuf, OutputError> {
    let path = output_path(base_name, format);

    // Render everything before touching the filesystem, so a failure here
    // never leaves a half-written file behind
    let content = render(records, format)?;

    // One write call; fs::write truncates an existing file
    write_file(&path, &content)?;

    debug!(path = %path.display(), count = records.len(), "wrote output");
    Ok(path)
}

fn write_file(path: &Path, content: &str) -> Result<(), OutputError> {
    fs::write(path, content).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}
