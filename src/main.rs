// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap and build a Config
// 2. Fetch the user's repositories from GitHub (one request)
// 3. Drop the repositories the filters exclude
// 4. Write the rest to <output-name>.<output-format>
// 5. Exit with 0 on success, 1 on any error (clap itself uses 2 for bad usage)
//
// Each step finishes before the next one starts; nothing runs concurrently.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod filter;   // src/filter.rs - fork / github.io filters
mod github;   // src/github/ - GitHub API access
mod logging;  // src/logging.rs - tracing setup
mod output;   // src/output/ - CSV, JSON and HTML writers
mod repo;     // src/repo.rs - the repository record

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use cli::{Cli, Config};

#[tokio::main]
async fn main() {
    let config = Cli::parse().into_config();
    logging::init_logging(config.verbose);

    let exit_code = match run(&config).await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run(config: &Config) -> Result<()> {
    let candidates = github::fetch_repositories(&config.api_url, &config.username)
        .await
        .with_context(|| format!("Could not list repositories of {}", config.username))?;
    debug!(fetched = candidates.len(), "repositories received");

    let records = filter::filter_repositories(candidates, &config.filter);
    debug!(kept = records.len(), filter = ?config.filter, "filters applied");

    let path = output::write_output(&records, &config.output_name, config.output_format)
        .context("Could not save repository summary")?;

    println!(
        "Repository names and descriptions of {}'s projects have been saved to {}",
        config.username,
        path.display()
    );
    Ok(())
}
