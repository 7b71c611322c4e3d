//! Error types for starstation-script

use thiserror::Error;

/// Catalog loading error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("Duplicate definition: {0}")]
    DuplicateDefinition(String),

    #[error("Unrecognized catalog file: {0}")]
    UnrecognizedFile(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
