// src/github/error.rs
// =============================================================================
// Errors the fetcher can report.
//
// A non-success status and a malformed record are both fatal for the run;
// main.rs prints them and exits with a non-zero status.
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    /// The configured API base URL cannot carry a path (e.g. `mailto:`).
    #[error("Invalid API base URL: {0}")]
    InvalidApiUrl(String),

    /// Transport-level failure (DNS, TLS, connection reset, ...).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// GitHub answered with anything other than 200 OK.
    #[error("Failed to retrieve repositories: HTTP {status}")]
    Status { status: StatusCode },

    /// The body was not a JSON array of repository objects.
    #[error("Unexpected response payload: {0}")]
    Payload(#[source] serde_json::Error),

    /// A repository object lacked a required field.
    #[error("Malformed repository record at index {index}: missing `{field}`")]
    MalformedRecord { index: usize, field: &'static str },
}
