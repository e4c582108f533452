//! docdrift-core
//!
//! Shared vocabulary of the consistency engine: text units, token sets, gaps,
//! reports, the seams between pipeline stages, errors, configuration and the
//! directory ingestion used by the CI entry point.

pub mod config;
pub mod error;
pub mod ingest;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
