//! World event selection
//!
//! At most one event is active per colony. Selection filters the catalog by
//! cooldown, then draws from the eligible set weighted by rarity. Expired
//! events are never swept; they stay embedded until the next trigger
//! overwrites them.

use crate::catalog::{EventCatalog, EventDef};
use crate::error::{Error, Result};
use crate::rng::GameRng;
use crate::state::{ActiveEvent, GameState};
use crate::time::TimestampMs;

/// Result of an event trigger attempt
#[derive(Debug, Clone)]
pub enum TriggerOutcome {
    /// An event fired and is now embedded in the state
    Triggered(ActiveEvent),
    /// Every catalog entry is still cooling down
    NoneEligible {
        /// Smallest positive wait until some event becomes eligible,
        /// 0 when the catalog gives no answer
        next_eligible_in_ms: i64,
    },
}

/// Try to fire a random world event for this colony
///
/// Fails with a conflict while an event is still running. Cooldowns gate
/// eligibility per event type; a type that never fired (or whose recorded
/// occurrence is zero) is always eligible. The winning type's occurrence
/// timestamp is recorded in the same mutation that embeds the event.
pub fn trigger_event(
    state: &mut GameState,
    catalog: &EventCatalog,
    rng: &mut GameRng,
    now: TimestampMs,
) -> Result<TriggerOutcome> {
    if state.live_event(now).is_some() {
        return Err(Error::EventAlreadyActive);
    }

    let eligible: Vec<&EventDef> = catalog
        .values()
        .filter(|def| is_eligible(def, state, now))
        .collect();

    if eligible.is_empty() {
        return Ok(TriggerOutcome::NoneEligible {
            next_eligible_in_ms: next_eligible_wait(catalog, state, now),
        });
    }

    let weights: Vec<f64> = eligible.iter().map(|def| def.rarity.weight()).collect();
    let index = rng.weighted_index(&weights).unwrap_or(0);
    let def = eligible[index];

    let active = ActiveEvent::begin(def, now);
    state.last_event_occurrence.insert(def.id.clone(), now);
    state.active_event = Some(active.clone());
    Ok(TriggerOutcome::Triggered(active))
}

fn is_eligible(def: &EventDef, state: &GameState, now: TimestampMs) -> bool {
    match state.last_event_occurrence.get(&def.id) {
        None => true,
        Some(&0) => true,
        Some(&last) => now - last >= def.cooldown_ms as i64,
    }
}

/// Smallest positive remaining cooldown across the whole catalog
fn next_eligible_wait(catalog: &EventCatalog, state: &GameState, now: TimestampMs) -> i64 {
    catalog
        .values()
        .filter_map(|def| {
            let last = *state.last_event_occurrence.get(&def.id)?;
            let remaining = def.eligible_at(last) - now;
            (remaining > 0).then_some(remaining)
        })
        .min()
        .unwrap_or(0)
}
