//! Construction of new buildings

use crate::catalog::BuildingCatalog;
use crate::error::{Error, Result};
use crate::identity::DefId;
use crate::rng::GameRng;
use crate::state::{Building, GameState};
use crate::time::TimestampMs;

/// Construct a building, deducting its full cost from the balances
///
/// Affordability is a conjunction over every cost entry; if any single
/// resource falls short nothing is deducted. A missing balance key counts
/// as zero. On success the new level-1 building is appended with a fresh
/// accrual clock and a random cosmetic position; other buildings' clocks
/// are untouched.
pub fn build(
    state: &mut GameState,
    kind: &DefId,
    catalog: &BuildingCatalog,
    rng: &mut GameRng,
    now: TimestampMs,
) -> Result<Building> {
    let def = catalog
        .get(kind)
        .ok_or_else(|| Error::UnknownBuildingType(kind.clone()))?;

    for (&resource, &required) in &def.cost {
        if state.balance(resource) < required {
            return Err(Error::InsufficientResources(kind.clone()));
        }
    }

    for (&resource, &required) in &def.cost {
        if let Some(balance) = state.resources.get_mut(&resource) {
            *balance -= required;
        }
    }

    let building = Building::new(kind.clone(), now, rng);
    state.buildings.push(building.clone());
    Ok(building)
}
