// src/github/fetch.rs
// =============================================================================
// This module fetches a user's repository list from GitHub.
//
// Strategy:
// - Join users/{username}/repos onto the API base URL
// - Send one GET request (no auth, no pagination, no retry)
// - Parse the JSON array into typed records, failing on the first record
//   that is missing a required field
//
// Rust concepts:
// - async functions: For network I/O
// - Option<T> fields: serde leaves them as None when a key is missing or null
// - collect::<Result<Vec<_>, _>>(): Stops at the first error
// =============================================================================

use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::error::FetchError;
use crate::repo::{RepositoryCandidate, RepositoryRecord};

// Public GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

// GitHub rejects requests that carry no User-Agent header
const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const GITHUB_JSON: &str = "application/vnd.github+json";

// The subset of GitHub's repository object we read
#[derive(Debug, Deserialize)]
struct RawRepository {
    name: Option<String>,
    html_url: Option<String>,
    description: Option<String>,
    #[serde(default)]
    fork: bool,
}

impl RawRepository {
    fn into_candidate(self, index: usize) -> Result<RepositoryCandidate, FetchError> {
        // An empty name is as useless as a missing one
        let name = self
            .name
            .filter(|n| !n.is_empty())
            .ok_or(FetchError::MalformedRecord { index, field: "name" })?;
        let url = self
            .html_url
            .ok_or(FetchError::MalformedRecord { index, field: "html_url" })?;

        Ok(RepositoryCandidate {
            record: RepositoryRecord::new(name, url, self.description),
            is_fork: self.fork,
        })
    }
}

// Builds the listing endpoint for a user
//
// Example:
//   api_url = "https://ghe.example.com/api/v3", username = "octocat"
//   result  = "https://ghe.example.com/api/v3/users/octocat/repos"
pub fn repos_endpoint(api_url: &Url, username: &str) -> Result<Url, FetchError> {
    let mut endpoint = api_url.clone();

    // path_segments_mut fails for URLs like mailto: that have no path.
    // pop_if_empty drops the trailing "/" so we don't produce "//users".
    endpoint
        .path_segments_mut()
        .map_err(|_| FetchError::InvalidApiUrl(api_url.to_string()))?
        .pop_if_empty()
        .extend(["users", username, "repos"]);
    Ok(endpoint)
}

// Fetches the first page of a user's repositories
//
// Parameters:
//   api_url: base URL of the REST API (normally DEFAULT_API_URL)
//   username: GitHub account handle, already validated by the CLI
//
// Returns: candidates in the order GitHub sent them, each still carrying
// its fork flag for the filter
pub async fn fetch_repositories(
    api_url: &Url,
    username: &str,
) -> Result<Vec<RepositoryCandidate>, FetchError> {
    let endpoint = repos_endpoint(api_url, username)?;
    debug!(%endpoint, "fetching repositories");

    // One client, one request: no retries, no pagination
    let client = Client::builder().user_agent(APP_USER_AGENT).build()?;
    let response = client
        .get(endpoint)
        .header(ACCEPT, GITHUB_JSON)
        .send()
        .await?;

    let status = response.status();
    debug!(%status, "GitHub responded");

    // Only a plain 200 counts; any other status (even 2xx) ends the run
    if status != StatusCode::OK {
        return Err(FetchError::Status { status });
    }

    let body = response.text().await?;
    parse_repositories(&body)
}

// Parses a /users/{username}/repos response body
//
// Stops at the first record that is missing a required field.
pub fn parse_repositories(body: &str) -> Result<Vec<RepositoryCandidate>, FetchError> {
    // The body must be a JSON array; anything else is a payload error
    let raw: Vec<RawRepository> = serde_json::from_str(body).map_err(FetchError::Payload)?;

    // collect() into Result returns the first Err it meets
    raw.into_iter()
        .enumerate()
        .map(|(index, repo)| repo.into_candidate(index))
        .collect()
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why parse into Option<String> and check afterwards?
//    - serde would reject a missing key on a plain String field, but the error
//      would not say which record was broken
//    - Checking by hand lets us report the record index and the field name
//
// 2. Why is parse_repositories public?
//    - It does all the interesting work without a network connection,
//      so it can be tested directly
// -----------------------------------------------------------------------------
