#![forbid(unsafe_code)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

//! # Seakeeping CLI
//!
//! Command-line front end for the [`seakeeping`] library.
//!
//! The binary parses a [`cli::Cli`], validates it into a [`config::Config`],
//! runs the job and writes the rendered report to stdout. Diagnostics go to
//! stderr through `tracing`.

pub mod cli;
pub mod config;
pub mod output;

use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flag when set.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(level: LogLevel) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}
