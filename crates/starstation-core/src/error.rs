//! Error types for starstation-core

use crate::identity::DefId;
use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown building type: {0}")]
    UnknownBuildingType(DefId),

    #[error("Insufficient resources to build: {0}")]
    InsufficientResources(DefId),

    #[error("An event is already active")]
    EventAlreadyActive,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
