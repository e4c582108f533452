use std::path::PathBuf;

use thiserror::Error;

use crate::types::TextKind;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{kind} input is {size} bytes, above the limit of {limit} bytes")]
    InputTooLarge {
        kind: TextKind,
        size: usize,
        limit: usize,
    },

    #[error("{kind} input is not valid UTF-8 text: {source}")]
    InvalidEncoding {
        kind: TextKind,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
