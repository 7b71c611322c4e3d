//! Error types for starstation-service
//!
//! One flat enum, but every variant classifies into a [`ErrorKind`] so a
//! transport layer can map failures to status codes without matching the
//! whole enum.

use thiserror::Error;

/// Service error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown building type: {0}")]
    UnknownBuildingType(String),

    #[error("Duplicate username: {0}")]
    DuplicateUsername(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Insufficient resources to build: {0}")]
    InsufficientResources(String),

    #[error("An event is already active")]
    EventAlreadyActive,

    #[error("Persistence error: {0}")]
    Persistence(#[from] starstation_db::Error),

    #[error("Catalog error: {0}")]
    Catalog(#[from] starstation_script::Error),
}

/// Broad failure classes, mirroring how callers are expected to react
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed input; nothing was mutated
    Validation,
    /// A referenced record or definition does not exist
    NotFound,
    /// The operation conflicts with current state; nothing was mutated
    Conflict,
    /// The store or reference data failed underneath us
    Internal,
}

impl Error {
    /// Classify this error for transport mapping
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) => ErrorKind::Validation,
            Error::UnknownBuildingType(_) => ErrorKind::NotFound,
            Error::DuplicateUsername(_)
            | Error::InvalidCredentials
            | Error::InsufficientResources(_)
            | Error::EventAlreadyActive => ErrorKind::Conflict,
            Error::Persistence(_) | Error::Catalog(_) => ErrorKind::Internal,
        }
    }
}

impl From<starstation_core::Error> for Error {
    fn from(err: starstation_core::Error) -> Self {
        match err {
            starstation_core::Error::UnknownBuildingType(id) => {
                Error::UnknownBuildingType(id.to_string())
            }
            starstation_core::Error::InsufficientResources(id) => {
                Error::InsufficientResources(id.to_string())
            }
            starstation_core::Error::EventAlreadyActive => Error::EventAlreadyActive,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            Error::Validation("username required".into()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            Error::UnknownBuildingType("monolith".into()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(Error::InvalidCredentials.kind(), ErrorKind::Conflict);
        assert_eq!(Error::EventAlreadyActive.kind(), ErrorKind::Conflict);
    }
}
