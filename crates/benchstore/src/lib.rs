//! Command line client for the benchmark store.
//!
//! The binary wires [`config::Cli`] to the subcommands in [`commands`]; both
//! are exposed here so they can be tested without a cluster.

pub mod commands;
pub mod config;

pub use config::{Cli, Command, StoreConfig};

/// Initializes the tracing subscriber for logging.
///
/// Logs go to stderr so command output on stdout stays machine readable.
/// `RUST_LOG` takes precedence over `level`.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "benchstore={level},benchstore_persistence={level},elasticsearch=warn"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
