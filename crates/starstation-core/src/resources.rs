//! Resource kinds and balance maps

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of resource kinds a colony tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Oxygen,
    Food,
    Water,
    Energy,
    Metal,
}

impl Resource {
    /// All resource kinds, in display order
    pub const ALL: [Resource; 5] = [
        Resource::Oxygen,
        Resource::Food,
        Resource::Water,
        Resource::Energy,
        Resource::Metal,
    ];

    /// Get the lower-case name used in catalogs and wire formats
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Oxygen => "oxygen",
            Resource::Food => "food",
            Resource::Water => "water",
            Resource::Energy => "energy",
            Resource::Metal => "metal",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Integer amounts per resource kind (balances, yields, costs)
///
/// Uses IndexMap to preserve insertion order for deterministic serialization
pub type ResourceMap = IndexMap<Resource, u64>;

/// Production multipliers per resource kind (1.0 = unmodified)
pub type ModifierMap = IndexMap<Resource, f64>;

/// Expand a map to cover every resource kind, filling absent entries with zero
pub fn zero_filled(amounts: &ResourceMap) -> ResourceMap {
    Resource::ALL
        .iter()
        .map(|&r| (r, amounts.get(&r).copied().unwrap_or(0)))
        .collect()
}
