//! Shared plumbing of the `docdrift` and `docdrift-ci` binaries.

pub mod summary;

use std::path::PathBuf;

use docdrift_core::config::{resolve_with_base, Config};

/// Exit code for a POOR verdict.
pub const EXIT_POOR: u8 = 1;
/// Exit code for configuration, I/O or input-limit failures.
pub const EXIT_FAILURE: u8 = 2;

/// Log to stderr, filtered by `RUST_LOG` (default `warn`), so stdout carries only reports.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Expand and resolve a user path against the working directory.
pub fn resolve_arg(arg: &str) -> anyhow::Result<PathBuf> {
    Ok(resolve_with_base(&std::env::current_dir()?, arg))
}

pub fn load_config(config_dir: Option<&str>) -> anyhow::Result<Config> {
    match config_dir {
        Some(dir) => Config::load_from(&resolve_arg(dir)?),
        None => Config::load(),
    }
}
