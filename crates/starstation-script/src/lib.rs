//! StarStation Script - RON catalog loader and seed data
//!
//! Loads the game's reference data from RON files:
//! - Building definitions (cost, production, cycle length)
//! - World event definitions (duration, modifiers, rarity, cooldown)
//!
//! Ships the seed catalogs under `data/`, embedded via `include_str!` so a
//! fresh deployment needs no external files.

mod error;
mod loader;

pub use error::{Error, Result};
pub use loader::{seed_catalogs, Catalogs, Loader};
