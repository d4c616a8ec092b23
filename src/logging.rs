// src/logging.rs
// =============================================================================
// Sets up `tracing` output.
//
// Diagnostics go to stderr so that stdout only carries the confirmation line.
// RUST_LOG always wins; otherwise --verbose switches this crate from warn to
// debug. reqwest and its dependencies stay quiet unless asked for.
//
// Examples:
//   ghpsum --username octocat --output-format json -v
//   RUST_LOG=ghpsum=trace,reqwest=debug ghpsum --username octocat --output-format csv
// =============================================================================

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "ghpsum=debug,reqwest=warn,hyper=warn"
    } else {
        "ghpsum=warn,reqwest=error,hyper=error"
    }
}

pub fn init_logging(verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    // Directives above are constants, so the fallback always parses
    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
