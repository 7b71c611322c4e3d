//! Game state models for database storage.

use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};
use starstation_core::{GameState, UserId};

/// Stored per-user game state.
///
/// The variable-shape fields (maps, building list, embedded event) are
/// bincode-packed; the record is written whole in one transaction so a
/// mutation is all-or-nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 3, version = 1)]
#[native_db]
pub struct StoredGameState {
    /// Primary key - owning user ID.
    #[primary_key]
    pub user_id: u64,
    /// Serialized resource balances.
    pub resources: Vec<u8>,
    /// Serialized owned buildings.
    pub buildings: Vec<u8>,
    /// Serialized embedded event, if one was ever triggered.
    pub active_event: Option<Vec<u8>>,
    /// Serialized per-event-type last occurrence timestamps.
    pub last_event_occurrence: Vec<u8>,
}

impl StoredGameState {
    /// Create from a core GameState.
    pub fn from_state(state: &GameState) -> Self {
        Self {
            user_id: state.user_id.raw(),
            resources: bincode::serialize(&state.resources).unwrap_or_default(),
            buildings: bincode::serialize(&state.buildings).unwrap_or_default(),
            active_event: state
                .active_event
                .as_ref()
                .map(|e| bincode::serialize(e).unwrap_or_default()),
            last_event_occurrence: bincode::serialize(&state.last_event_occurrence)
                .unwrap_or_default(),
        }
    }

    /// Convert to a core GameState.
    pub fn to_state(&self) -> GameState {
        let mut state = GameState::new(UserId::new(self.user_id));
        state.resources = bincode::deserialize(&self.resources).unwrap_or_default();
        state.buildings = bincode::deserialize(&self.buildings).unwrap_or_default();
        state.active_event = self
            .active_event
            .as_ref()
            .and_then(|e| bincode::deserialize(e).ok());
        state.last_event_occurrence =
            bincode::deserialize(&self.last_event_occurrence).unwrap_or_default();
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starstation_core::{GameRng, GameState, Resource, UserId};

    #[test]
    fn test_state_round_trip() {
        let mut rng = GameRng::new(42);
        let state = GameState::starter(UserId::new(9), 1_000, &mut rng);

        let restored = StoredGameState::from_state(&state).to_state();
        assert_eq!(restored.user_id, state.user_id);
        assert_eq!(restored.resources, state.resources);
        assert_eq!(restored.buildings, state.buildings);
        assert!(restored.active_event.is_none());
        assert_eq!(restored.balance(Resource::Oxygen), 100);
    }
}
