//! Catalog models for database storage.

use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};
use starstation_core::{BuildingDef, DefId, EventDef, EventEffects, Rarity};

/// Stored building definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 10, version = 1)]
#[native_db]
pub struct StoredBuildingDef {
    /// Primary key - building type.
    #[primary_key]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Icon identifier.
    pub icon: Option<String>,
    /// Serialized construction cost map.
    pub cost: Vec<u8>,
    /// Serialized base production map.
    pub production: Vec<u8>,
    /// Production cycle length in seconds.
    pub production_rate: u32,
    /// Highest reachable level.
    pub max_level: u32,
    /// Cost growth factor per level.
    pub upgrade_cost_multiplier: f64,
}

impl StoredBuildingDef {
    /// Create from a core BuildingDef.
    pub fn from_def(def: &BuildingDef) -> Self {
        Self {
            id: def.id.as_str().to_string(),
            name: def.name.clone(),
            description: def.description.clone(),
            icon: def.icon.clone(),
            cost: bincode::serialize(&def.cost).unwrap_or_default(),
            production: bincode::serialize(&def.production).unwrap_or_default(),
            production_rate: def.production_rate,
            max_level: def.max_level,
            upgrade_cost_multiplier: def.upgrade_cost_multiplier,
        }
    }

    /// Convert to a core BuildingDef.
    pub fn to_def(&self) -> BuildingDef {
        BuildingDef {
            id: DefId::new(self.id.clone()),
            name: self.name.clone(),
            description: self.description.clone(),
            icon: self.icon.clone(),
            cost: bincode::deserialize(&self.cost).unwrap_or_default(),
            production: bincode::deserialize(&self.production).unwrap_or_default(),
            production_rate: self.production_rate,
            max_level: self.max_level,
            upgrade_cost_multiplier: self.upgrade_cost_multiplier,
        }
    }
}

/// Stored event definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 11, version = 1)]
#[native_db]
pub struct StoredEventDef {
    /// Primary key - event type.
    #[primary_key]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Icon identifier.
    pub icon: Option<String>,
    /// Active duration in milliseconds.
    pub duration_ms: u64,
    /// Serialized production modifier map.
    pub production_modifiers: Vec<u8>,
    /// Display text announcing the event.
    pub message: String,
    /// Rarity tier name.
    pub rarity: String,
    /// Cooldown in milliseconds.
    pub cooldown_ms: u64,
}

impl StoredEventDef {
    /// Create from a core EventDef.
    pub fn from_def(def: &EventDef) -> Self {
        let rarity = match def.rarity {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Unknown => "unknown",
        };
        Self {
            id: def.id.as_str().to_string(),
            name: def.name.clone(),
            description: def.description.clone(),
            icon: def.icon.clone(),
            duration_ms: def.duration_ms,
            production_modifiers: bincode::serialize(&def.effects.production_modifiers)
                .unwrap_or_default(),
            message: def.effects.message.clone(),
            rarity: rarity.to_string(),
            cooldown_ms: def.cooldown_ms,
        }
    }

    /// Convert to a core EventDef.
    pub fn to_def(&self) -> EventDef {
        let rarity = match self.rarity.as_str() {
            "common" => Rarity::Common,
            "uncommon" => Rarity::Uncommon,
            "rare" => Rarity::Rare,
            _ => Rarity::Unknown,
        };
        EventDef {
            id: DefId::new(self.id.clone()),
            name: self.name.clone(),
            description: self.description.clone(),
            icon: self.icon.clone(),
            duration_ms: self.duration_ms,
            effects: EventEffects {
                production_modifiers: bincode::deserialize(&self.production_modifiers)
                    .unwrap_or_default(),
                message: self.message.clone(),
            },
            rarity,
            cooldown_ms: self.cooldown_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starstation_core::Resource;

    #[test]
    fn test_event_def_round_trip() {
        let def = EventDef {
            id: DefId::new("meteor_shower"),
            name: "Meteor Shower".to_string(),
            description: String::new(),
            icon: Some("☄️".to_string()),
            duration_ms: 180_000,
            effects: EventEffects {
                production_modifiers: [(Resource::Metal, 2.0)].into_iter().collect(),
                message: "Metal production doubled.".to_string(),
            },
            rarity: Rarity::Uncommon,
            cooldown_ms: 900_000,
        };

        let restored = StoredEventDef::from_def(&def).to_def();
        assert_eq!(restored.id, def.id);
        assert_eq!(restored.rarity, Rarity::Uncommon);
        assert_eq!(
            restored.effects.production_modifiers[&Resource::Metal],
            2.0
        );
    }
}
