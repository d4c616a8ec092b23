// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - Building the /users/{username}/repos endpoint from a base URL
// - Issuing a single unauthenticated GET request
// - Turning the JSON payload into typed repository candidates
//
// Only the first page of results is read; pagination, authentication and
// retries are deliberately left out.
// =============================================================================

mod error;
mod fetch;

pub use fetch::{fetch_repositories, DEFAULT_API_URL};
