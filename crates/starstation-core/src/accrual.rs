//! Production accrual: the single formula behind state preview and harvest
//!
//! Buildings produce in fixed cycles measured against wall-clock time.
//! Elapsed time is quantized to whole minutes first, and the event-modified
//! amount is floored again afterwards; the two truncations compound and the
//! result is the observable contract, pinned by the tests below.

use crate::catalog::{BuildingCatalog, BuildingDef};
use crate::resources::ResourceMap;
use crate::state::{ActiveEvent, Building, GameState};
use crate::time::{TimestampMs, MS_PER_MINUTE};

/// Resources collected by a harvest commit
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HarvestOutcome {
    /// Total amounts produced since each building's last harvest
    pub harvested: ResourceMap,
}

/// Compute the resources accrued since each building's last harvest
///
/// Read-only projection: safe to call arbitrarily often, identical results
/// until time advances. Buildings with no catalog entry are skipped, and
/// buildings of the same type accumulate additively.
pub fn compute_accrual(
    state: &GameState,
    catalog: &BuildingCatalog,
    now: TimestampMs,
) -> ResourceMap {
    let event = state.live_event(now);
    let mut total = ResourceMap::new();

    for building in &state.buildings {
        let Some(def) = catalog.get(&building.kind) else {
            continue;
        };
        accumulate(&mut total, &building_yield(building, def, event, now));
    }

    total
}

/// Commit accrued resources into the balance and reset production clocks
///
/// Every building that produced a non-zero amount of anything has its
/// `last_harvest` reset to `now`; buildings that produced nothing keep
/// their clocks, so mixed-rate buildings stay independent. Amounts for
/// resource keys absent from the balance map are dropped, not credited.
pub fn harvest(state: &mut GameState, catalog: &BuildingCatalog, now: TimestampMs) -> HarvestOutcome {
    let yields: Vec<ResourceMap> = {
        let event = state.live_event(now);
        state
            .buildings
            .iter()
            .map(|building| match catalog.get(&building.kind) {
                Some(def) => building_yield(building, def, event, now),
                None => ResourceMap::new(),
            })
            .collect()
    };

    let mut harvested = ResourceMap::new();
    for (building, produced) in state.buildings.iter_mut().zip(&yields) {
        if produced.is_empty() {
            continue;
        }
        building.last_harvest = now;
        accumulate(&mut harvested, produced);
    }

    for (resource, amount) in &harvested {
        if let Some(balance) = state.resources.get_mut(resource) {
            *balance += amount;
        }
    }

    HarvestOutcome { harvested }
}

/// Amounts one building has produced since its last harvest
///
/// Only non-zero amounts are recorded; an empty map means the building
/// contributed nothing and its clock must not be reset.
fn building_yield(
    building: &Building,
    def: &BuildingDef,
    event: Option<&ActiveEvent>,
    now: TimestampMs,
) -> ResourceMap {
    // Whole minutes only; partial cycles contribute zero. Clamped so a
    // harvest timestamp ahead of `now` never mints negative accrual.
    let minutes_passed = ((now - building.last_harvest) / MS_PER_MINUTE).max(0) as u64;

    // 30-second buildings complete two cycles per elapsed minute
    let cycles = if def.production_rate == 30 {
        minutes_passed * 2
    } else {
        minutes_passed
    };

    let mut produced = ResourceMap::new();
    for (&resource, &base) in &def.production {
        if base == 0 {
            continue;
        }
        let amount = cycles * base * building.level as u64;
        let modifier = event.map_or(1.0, |e| e.modifier(resource));
        let final_amount = (amount as f64 * modifier).floor() as u64;
        if final_amount > 0 {
            produced.insert(resource, final_amount);
        }
    }

    produced
}

fn accumulate(total: &mut ResourceMap, produced: &ResourceMap) {
    for (&resource, &amount) in produced {
        *total.entry(resource).or_insert(0) += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BuildingCatalog, BuildingDef, EventDef, EventEffects};
    use crate::identity::{DefId, UserId};
    use crate::resources::Resource;
    use crate::state::Position;

    fn catalog() -> BuildingCatalog {
        let mut habitat = BuildingDef::new("habitat", "Habitat");
        habitat.production = [(Resource::Oxygen, 5)].into_iter().collect();
        habitat.production_rate = 30;

        let mut farm = BuildingDef::new("hydroponics_farm", "Hydroponics Farm");
        farm.production = [(Resource::Food, 3)].into_iter().collect();
        farm.production_rate = 60;

        [
            (habitat.id.clone(), habitat),
            (farm.id.clone(), farm),
        ]
        .into_iter()
        .collect()
    }

    fn building(kind: &str, level: u32, last_harvest: TimestampMs) -> Building {
        Building {
            kind: DefId::new(kind),
            level,
            last_harvest,
            position: Position { x: 0, y: 0 },
        }
    }

    fn state_with(buildings: Vec<Building>) -> GameState {
        let mut state = GameState::new(UserId::new(1));
        state.buildings = buildings;
        state
    }

    fn event(modifiers: &[(Resource, f64)], start: TimestampMs, duration_ms: u64) -> ActiveEvent {
        let def = EventDef {
            id: DefId::new("test_event"),
            name: "Test Event".to_string(),
            description: String::new(),
            icon: None,
            duration_ms,
            effects: EventEffects {
                production_modifiers: modifiers.iter().copied().collect(),
                message: String::new(),
            },
            rarity: Default::default(),
            cooldown_ms: 0,
        };
        ActiveEvent::begin(&def, start)
    }

    #[test]
    fn test_sixty_second_rate_is_linear_in_minutes() {
        let state = state_with(vec![building("hydroponics_farm", 2, 0)]);

        for minutes in 0..10u64 {
            let accrued = compute_accrual(&state, &catalog(), minutes as i64 * 60_000);
            let expected = minutes * 3 * 2;
            assert_eq!(accrued.get(&Resource::Food).copied().unwrap_or(0), expected);
        }
    }

    #[test]
    fn test_thirty_second_rate_doubles_cycles() {
        let state = state_with(vec![building("habitat", 1, 0)]);

        // 90 seconds elapse: one whole minute, two half-minute cycles
        let accrued = compute_accrual(&state, &catalog(), 90_000);
        assert_eq!(accrued[&Resource::Oxygen], 10);
    }

    #[test]
    fn test_sub_minute_elapsed_accrues_nothing() {
        let state = state_with(vec![building("habitat", 1, 0)]);

        let accrued = compute_accrual(&state, &catalog(), 59_999);
        assert!(accrued.is_empty());
    }

    #[test]
    fn test_clock_skew_accrues_nothing() {
        let state = state_with(vec![building("habitat", 1, 120_000)]);

        let accrued = compute_accrual(&state, &catalog(), 60_000);
        assert!(accrued.is_empty());
    }

    #[test]
    fn test_preview_is_idempotent() {
        let state = state_with(vec![building("habitat", 1, 0)]);

        let first = compute_accrual(&state, &catalog(), 90_000);
        let second = compute_accrual(&state, &catalog(), 90_000);
        assert_eq!(first, second);
        assert_eq!(state.buildings[0].last_harvest, 0);
    }

    #[test]
    fn test_same_type_buildings_accumulate() {
        let state = state_with(vec![building("habitat", 1, 0), building("habitat", 1, 0)]);

        let accrued = compute_accrual(&state, &catalog(), 60_000);
        assert_eq!(accrued[&Resource::Oxygen], 20);
    }

    #[test]
    fn test_unknown_building_type_skipped() {
        let state = state_with(vec![building("monolith", 1, 0), building("habitat", 1, 0)]);

        let accrued = compute_accrual(&state, &catalog(), 60_000);
        assert_eq!(accrued[&Resource::Oxygen], 10);
        assert_eq!(accrued.len(), 1);
    }

    #[test]
    fn test_modifier_floors_after_scaling() {
        // base 5 per minute, level 1, 60s rate -> amount 5
        let mut def = BuildingDef::new("still", "Water Still");
        def.production = [(Resource::Water, 5)].into_iter().collect();
        let catalog: BuildingCatalog = [(def.id.clone(), def)].into_iter().collect();

        let mut state = state_with(vec![building("still", 1, 0)]);

        state.active_event = Some(event(&[(Resource::Water, 0.5)], 0, 600_000));
        assert_eq!(compute_accrual(&state, &catalog, 60_000)[&Resource::Water], 2);

        state.active_event = Some(event(&[(Resource::Water, 1.5)], 0, 600_000));
        assert_eq!(compute_accrual(&state, &catalog, 60_000)[&Resource::Water], 7);
    }

    #[test]
    fn test_double_floor_compounds() {
        // 90s at a 60s rate floors to 1 minute before the modifier floor:
        // floor(floor(1.5) * 5 * 1.5) = 7, not floor(1.5 * 5 * 1.5) = 11
        let mut def = BuildingDef::new("still", "Water Still");
        def.production = [(Resource::Water, 5)].into_iter().collect();
        let catalog: BuildingCatalog = [(def.id.clone(), def)].into_iter().collect();

        let mut state = state_with(vec![building("still", 1, 0)]);
        state.active_event = Some(event(&[(Resource::Water, 1.5)], 0, 600_000));

        assert_eq!(compute_accrual(&state, &catalog, 90_000)[&Resource::Water], 7);
    }

    #[test]
    fn test_expired_event_stops_modifying() {
        let state = {
            let mut s = state_with(vec![building("habitat", 1, 0)]);
            s.active_event = Some(event(&[(Resource::Oxygen, 3.0)], 0, 30_000));
            s
        };

        // Event ended at 30s; the minute that accrued afterwards is unmodified
        let accrued = compute_accrual(&state, &catalog(), 60_000);
        assert_eq!(accrued[&Resource::Oxygen], 10);
    }

    #[test]
    fn test_harvest_credits_and_resets() {
        let mut state = state_with(vec![building("habitat", 1, 0)]);
        state.resources = Resource::ALL.iter().map(|&r| (r, 100)).collect();

        let outcome = harvest(&mut state, &catalog(), 90_000);
        assert_eq!(outcome.harvested[&Resource::Oxygen], 10);
        assert_eq!(state.balance(Resource::Oxygen), 110);
        assert_eq!(state.buildings[0].last_harvest, 90_000);
    }

    #[test]
    fn test_harvest_is_not_idempotent() {
        let mut state = state_with(vec![building("habitat", 1, 0)]);
        state.resources = Resource::ALL.iter().map(|&r| (r, 0)).collect();

        let first = harvest(&mut state, &catalog(), 90_000);
        assert!(!first.harvested.is_empty());

        let second = harvest(&mut state, &catalog(), 90_000);
        assert!(second.harvested.is_empty());
        assert_eq!(state.balance(Resource::Oxygen), 10);
    }

    #[test]
    fn test_harvest_resets_only_contributing_buildings() {
        // The farm has a fresh clock and produces nothing; only the habitat resets
        let mut state = state_with(vec![
            building("habitat", 1, 0),
            building("hydroponics_farm", 1, 80_000),
        ]);

        harvest(&mut state, &catalog(), 90_000);
        assert_eq!(state.buildings[0].last_harvest, 90_000);
        assert_eq!(state.buildings[1].last_harvest, 80_000);
    }

    #[test]
    fn test_harvest_drops_amounts_for_absent_balance_keys() {
        let mut state = state_with(vec![building("habitat", 1, 0)]);
        state.resources.shift_remove(&Resource::Oxygen);

        let outcome = harvest(&mut state, &catalog(), 60_000);
        // Reported as harvested, but never credited anywhere
        assert_eq!(outcome.harvested[&Resource::Oxygen], 10);
        assert_eq!(state.balance(Resource::Oxygen), 0);
        assert!(!state.resources.contains_key(&Resource::Oxygen));
    }

    #[test]
    fn test_zero_modifier_suppresses_reset() {
        let mut state = state_with(vec![building("habitat", 1, 0)]);
        state.active_event = Some(event(&[(Resource::Oxygen, 0.0)], 0, 600_000));

        harvest(&mut state, &catalog(), 90_000);
        // Nothing produced, so the clock keeps ticking from the original mark
        assert_eq!(state.buildings[0].last_harvest, 0);
    }
}
