//! Diagnostic logging setup.
//!
//! The game trace is ordinary output; this is for `tracing` diagnostics from
//! the engine and CLI, filtered by `RUST_LOG` and written to stderr.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Calling it twice only prints a warning.
pub fn init_logging() {
    let filter = build_filter(std::env::var("RUST_LOG").ok().as_deref());

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("WARNING: logging was already initialised");
    }
}
