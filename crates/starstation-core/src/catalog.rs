//! Catalog definitions for buildings and world events
//!
//! Reference data, immutable at runtime. The accrual engine and event
//! selector are parameterized over these types; loading them from RON files
//! and seeding them into the store live in the script and db crates.

use crate::identity::DefId;
use crate::resources::{ModifierMap, ResourceMap};
use crate::time::TimestampMs;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// All known building definitions, keyed by type
///
/// IndexMap keeps catalog order, which the weighted event draw and display
/// both rely on.
pub type BuildingCatalog = IndexMap<DefId, BuildingDef>;

/// All known event definitions, keyed by type
pub type EventCatalog = IndexMap<DefId, EventDef>;

/// Definition of a building type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingDef {
    /// Unique identifier for this building type
    pub id: DefId,
    /// Display name
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Icon identifier for UI
    #[serde(default)]
    pub icon: Option<String>,
    /// Balance required per resource to construct one
    #[serde(default)]
    pub cost: ResourceMap,
    /// Base yield per production cycle, per resource
    #[serde(default)]
    pub production: ResourceMap,
    /// Production cycle length in seconds (30 or 60)
    #[serde(default = "default_production_rate")]
    pub production_rate: u32,
    /// Highest level this building can reach
    #[serde(default = "default_max_level")]
    pub max_level: u32,
    /// Cost growth factor per level
    #[serde(default = "default_upgrade_cost_multiplier")]
    pub upgrade_cost_multiplier: f64,
}

fn default_production_rate() -> u32 {
    60
}

fn default_max_level() -> u32 {
    1
}

fn default_upgrade_cost_multiplier() -> f64 {
    1.0
}

impl BuildingDef {
    /// Create a new building definition with no cost or production
    pub fn new(id: impl Into<DefId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            icon: None,
            cost: ResourceMap::new(),
            production: ResourceMap::new(),
            production_rate: 60,
            max_level: 1,
            upgrade_cost_multiplier: 1.0,
        }
    }
}

/// How often an event type may fire and what it does while active
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDef {
    /// Unique identifier for this event type
    pub id: DefId,
    /// Display name
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Icon identifier for UI
    #[serde(default)]
    pub icon: Option<String>,
    /// How long the event stays active, in milliseconds
    pub duration_ms: u64,
    /// Production effects while active
    pub effects: EventEffects,
    /// Selection rarity
    #[serde(default)]
    pub rarity: Rarity,
    /// Minimum time between consecutive triggers, in milliseconds
    pub cooldown_ms: u64,
}

impl EventDef {
    /// Timestamp at which this event type becomes eligible again
    pub fn eligible_at(&self, last_occurrence: TimestampMs) -> TimestampMs {
        last_occurrence + self.cooldown_ms as i64
    }
}

/// Effects an event applies while it is active
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEffects {
    /// Per-resource production multipliers; unlisted resources stay at 1.0
    #[serde(default)]
    pub production_modifiers: ModifierMap,
    /// Display text announcing the event
    #[serde(default)]
    pub message: String,
}

/// Selection rarity tiers with fixed draw weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    /// Anything the catalog names that we do not recognize
    #[serde(other)]
    Unknown,
}

impl Rarity {
    /// Weight used in the rarity-weighted event draw
    pub fn weight(&self) -> f64 {
        match self {
            Rarity::Common => 0.5,
            Rarity::Uncommon => 0.3,
            Rarity::Rare => 0.2,
            Rarity::Unknown => 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::Resource;

    #[test]
    fn test_building_def_ron() {
        let ron_str = r#"
        (
            id: "habitat",
            name: "Habitat",
            description: "Pressurized living quarters",
            cost: { metal: 10, energy: 5 },
            production: { oxygen: 5 },
            production_rate: 30,
            max_level: 5,
            upgrade_cost_multiplier: 1.5,
        )
        "#;

        let def: BuildingDef = ron::from_str(ron_str).unwrap();
        assert_eq!(def.id.as_str(), "habitat");
        assert_eq!(def.production[&Resource::Oxygen], 5);
        assert_eq!(def.production_rate, 30);
    }

    #[test]
    fn test_building_def_defaults() {
        let ron_str = r#"(id: "relay", name: "Relay")"#;
        let def: BuildingDef = ron::from_str(ron_str).unwrap();
        assert_eq!(def.production_rate, 60);
        assert_eq!(def.max_level, 1);
        assert!(def.cost.is_empty());
    }

    #[test]
    fn test_event_def_ron() {
        let ron_str = r#"
        (
            id: "solar_eclipse",
            name: "Solar Eclipse",
            duration_ms: 300000,
            effects: (
                production_modifiers: { energy: 0.5 },
                message: "Energy production halved.",
            ),
            rarity: common,
            cooldown_ms: 600000,
        )
        "#;

        let def: EventDef = ron::from_str(ron_str).unwrap();
        assert_eq!(def.rarity, Rarity::Common);
        assert_eq!(def.effects.production_modifiers[&Resource::Energy], 0.5);
        assert_eq!(def.eligible_at(1_000), 601_000);
    }

    #[test]
    fn test_rarity_weights() {
        assert_eq!(Rarity::Common.weight(), 0.5);
        assert_eq!(Rarity::Uncommon.weight(), 0.3);
        assert_eq!(Rarity::Rare.weight(), 0.2);
        assert_eq!(Rarity::Unknown.weight(), 0.1);
    }
}
