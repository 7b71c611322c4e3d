//! Per-user game state: balances, owned buildings, active event

use crate::catalog::EventDef;
use crate::identity::{DefId, UserId};
use crate::resources::{ModifierMap, Resource, ResourceMap};
use crate::rng::GameRng;
use crate::time::TimestampMs;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Side length of the cosmetic placement grid
const GRID_SIZE: i64 = 16;

/// Building type granted to every new colony
pub const STARTER_BUILDING: &str = "habitat";

/// Resource balances granted to every new colony
pub const STARTER_BALANCES: [(Resource, u64); 5] = [
    (Resource::Oxygen, 100),
    (Resource::Food, 50),
    (Resource::Water, 80),
    (Resource::Energy, 30),
    (Resource::Metal, 20),
];

/// The complete persisted state of one user's colony
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Owning user
    pub user_id: UserId,
    /// Current spendable balances; never negative
    pub resources: ResourceMap,
    /// Owned building instances, in construction order
    pub buildings: Vec<Building>,
    /// The at-most-one embedded event; stale records linger until the next
    /// trigger overwrites them, so readers must check [`ActiveEvent::is_active`]
    pub active_event: Option<ActiveEvent>,
    /// When each event type last fired; absent entry means never
    pub last_event_occurrence: IndexMap<DefId, TimestampMs>,
}

impl GameState {
    /// Create an empty state with zeroed balances and no buildings
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            resources: Resource::ALL.iter().map(|&r| (r, 0)).collect(),
            buildings: Vec::new(),
            active_event: None,
            last_event_occurrence: IndexMap::new(),
        }
    }

    /// Create the starter colony a new registration receives: seed balances
    /// and one free level-1 habitat
    pub fn starter(user_id: UserId, now: TimestampMs, rng: &mut GameRng) -> Self {
        Self {
            user_id,
            resources: STARTER_BALANCES.iter().copied().collect(),
            buildings: vec![Building::new(DefId::new(STARTER_BUILDING), now, rng)],
            active_event: None,
            last_event_occurrence: IndexMap::new(),
        }
    }

    /// Current balance for a resource (0 when the key is absent)
    pub fn balance(&self, resource: Resource) -> u64 {
        self.resources.get(&resource).copied().unwrap_or(0)
    }

    /// The embedded event, only while it is still running
    pub fn live_event(&self, now: TimestampMs) -> Option<&ActiveEvent> {
        self.active_event.as_ref().filter(|e| e.is_active(now))
    }
}

/// An owned building instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    /// Key into the building catalog
    pub kind: DefId,
    /// Current level; construction starts at 1
    pub level: u32,
    /// When this building's accrual was last collected
    pub last_harvest: TimestampMs,
    /// Cosmetic placement, no gameplay effect
    pub position: Position,
}

impl Building {
    /// Construct a level-1 building with a fresh accrual clock
    pub fn new(kind: DefId, now: TimestampMs, rng: &mut GameRng) -> Self {
        Self {
            kind,
            level: 1,
            last_harvest: now,
            position: Position::random(rng),
        }
    }
}

/// A cell on the cosmetic placement grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Pick a random grid cell
    pub fn random(rng: &mut GameRng) -> Self {
        Self {
            x: rng.range_i64(0, GRID_SIZE - 1) as i32,
            y: rng.range_i64(0, GRID_SIZE - 1) as i32,
        }
    }
}

/// A triggered event embedded in the game state
///
/// Snapshot of the definition it was drawn from, so catalog edits never
/// change an event already in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveEvent {
    /// Key into the event catalog
    pub event_type: DefId,
    /// Display name
    pub name: String,
    /// Icon identifier for UI
    pub icon: Option<String>,
    /// Display text announcing the event
    pub message: String,
    /// Per-resource production multipliers while active
    pub production_modifiers: ModifierMap,
    /// When the event fired
    pub start_time: TimestampMs,
    /// When the event stops applying
    pub end_time: TimestampMs,
}

impl ActiveEvent {
    /// Snapshot a definition into a running event starting now
    pub fn begin(def: &EventDef, now: TimestampMs) -> Self {
        Self {
            event_type: def.id.clone(),
            name: def.name.clone(),
            icon: def.icon.clone(),
            message: def.effects.message.clone(),
            production_modifiers: def.effects.production_modifiers.clone(),
            start_time: now,
            end_time: now + def.duration_ms as i64,
        }
    }

    /// Whether the event still applies at the given time
    pub fn is_active(&self, now: TimestampMs) -> bool {
        self.end_time > now
    }

    /// Production multiplier for a resource (1.0 when unlisted)
    pub fn modifier(&self, resource: Resource) -> f64 {
        self.production_modifiers
            .get(&resource)
            .copied()
            .unwrap_or(1.0)
    }
}
