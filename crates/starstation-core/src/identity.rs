//! Identity types for users and catalog definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a registered user
///
/// Assigned by the persistence layer at registration. This is the single
/// canonical identifier type; every lookup goes through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub u64);

impl UserId {
    /// Create a new user ID
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user:{}", self.0)
    }
}

/// Identifier for a catalog definition (building type or event type)
///
/// Uses a string-based ID for easy reference from RON catalog files
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefId(pub String);

impl DefId {
    /// Create a new definition ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DefId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for DefId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id() {
        let id = UserId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "user:7");
    }

    #[test]
    fn test_def_id() {
        let id = DefId::new("habitat");
        assert_eq!(id.as_str(), "habitat");
        assert_eq!(format!("{}", id), "habitat");
    }
}
