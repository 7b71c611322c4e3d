//! Common query patterns for the database.

use crate::error::{Error, Result};
use crate::models::*;
use crate::store::Store;
use starstation_core::{BuildingCatalog, EventCatalog};

impl Store {
    /// Load every building definition, keyed by type.
    pub fn load_building_catalog(&self) -> Result<BuildingCatalog> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<StoredBuildingDef>()?;
        let iter = scan.all()?;
        let defs: std::result::Result<Vec<StoredBuildingDef>, _> = iter.collect();
        let defs = defs.map_err(|e| Error::Database(e.to_string()))?;
        Ok(defs
            .into_iter()
            .map(|d| {
                let def = d.to_def();
                (def.id.clone(), def)
            })
            .collect())
    }

    /// Load every event definition, keyed by type.
    pub fn load_event_catalog(&self) -> Result<EventCatalog> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<StoredEventDef>()?;
        let iter = scan.all()?;
        let defs: std::result::Result<Vec<StoredEventDef>, _> = iter.collect();
        let defs = defs.map_err(|e| Error::Database(e.to_string()))?;
        Ok(defs
            .into_iter()
            .map(|d| {
                let def = d.to_def();
                (def.id.clone(), def)
            })
            .collect())
    }

    /// Count registered users.
    pub fn count_users(&self) -> Result<usize> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<StoredUser>()?;
        let iter = scan.all()?;
        Ok(iter.count())
    }
}
