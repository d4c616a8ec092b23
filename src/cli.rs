// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The parsed `Cli` is turned into a `Config` exactly once in main.rs; the
// rest of the program only ever sees the `Config`.
//
// Rust concepts:
// - Derive macros: clap generates the parser from the struct definition
// - value_parser: Custom validation that runs before our code does
// - From/into conversions: Turning parsed arguments into a config value
// =============================================================================

use clap::Parser;
use url::Url;

use crate::filter::FilterOptions;
use crate::github::DEFAULT_API_URL;
use crate::output::OutputFormat;

// GitHub account handles are at most 39 characters long
const MAX_USERNAME_LEN: usize = 39;

#[derive(Parser, Debug)]
#[command(
    name = "ghpsum",
    version,
    about = "Save a summary of a GitHub user's repositories as CSV, JSON or HTML",
    long_about = "ghpsum fetches the public repository list of a GitHub user and writes \
                  each repository's name, URL and description to <output-name>.<output-format>."
)]
pub struct Cli {
    /// GitHub username whose repositories are listed
    #[arg(long, value_parser = validate_username)]
    pub username: String,

    /// Leave out forked repositories
    #[arg(long)]
    pub filter_fork: bool,

    /// Leave out repositories whose name contains "github.io"
    #[arg(long)]
    pub filter_github_io: bool,

    /// Output file name, without extension
    #[arg(long, default_value = "ghpsum")]
    pub output_name: String,

    /// Output file format
    #[arg(long, value_enum)]
    pub output_format: OutputFormat,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GHPSUM_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: Url,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Everything one run needs, built once from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub username: String,
    pub filter: FilterOptions,
    pub output_name: String,
    pub output_format: OutputFormat,
    pub api_url: Url,
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            username: self.username,
            filter: FilterOptions {
                exclude_forks: self.filter_fork,
                exclude_github_io: self.filter_github_io,
            },
            output_name: self.output_name,
            output_format: self.output_format,
            api_url: self.api_url,
            verbose: self.verbose,
        }
    }
}

/// Checks that `name` looks like a GitHub account handle: ASCII letters,
/// digits and single hyphens, no leading or trailing hyphen, 1 to 39 chars.
pub fn validate_username(name: &str) -> Result<String, String> {
    if name.is_empty() {
        return Err("username must not be empty".to_string());
    }
    if name.len() > MAX_USERNAME_LEN {
        return Err(format!(
            "username must be at most {} characters",
            MAX_USERNAME_LEN
        ));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err("username may only contain letters, digits and hyphens".to_string());
    }
    if name.starts_with('-') || name.ends_with('-') || name.contains("--") {
        return Err(
            "username cannot start or end with a hyphen or contain consecutive hyphens"
                .to_string(),
        );
    }
    Ok(name.to_string())
}
