//! RON catalog loader

use crate::error::{Error, Result};
use starstation_core::{BuildingCatalog, BuildingDef, EventCatalog, EventDef};
use std::fs;
use std::path::Path;

/// Loaded reference data: both catalogs, in file order
#[derive(Debug, Default)]
pub struct Catalogs {
    /// Building definitions by type
    pub buildings: BuildingCatalog,
    /// Event definitions by type
    pub events: EventCatalog,
}

impl Catalogs {
    /// Create empty catalogs
    pub fn new() -> Self {
        Self::default()
    }
}

/// Loader for RON catalog files
pub struct Loader {
    catalogs: Catalogs,
}

impl Loader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            catalogs: Catalogs::new(),
        }
    }

    /// Load a single RON file
    ///
    /// The file kind is determined by its top-level field (`buildings:` or
    /// `events:`), falling back to a filename hint.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let filename = path.file_name().and_then(|n| n.to_str()).unwrap_or("");

        if content.contains("buildings:") || filename.contains("building") {
            self.load_buildings_str(&content)
        } else if content.contains("events:") || filename.contains("event") {
            self.load_events_str(&content)
        } else {
            Err(Error::UnrecognizedFile(path.display().to_string()))
        }
    }

    /// Load building definitions from a RON string
    pub fn load_buildings_str(&mut self, content: &str) -> Result<()> {
        #[derive(serde::Deserialize)]
        struct BuildingFile {
            buildings: Vec<BuildingDef>,
        }

        let file: BuildingFile = ron::from_str(content)?;
        for building in file.buildings {
            let id = building.id.clone();
            if self.catalogs.buildings.contains_key(&id) {
                return Err(Error::DuplicateDefinition(id.to_string()));
            }
            self.catalogs.buildings.insert(id, building);
        }
        Ok(())
    }

    /// Load event definitions from a RON string
    pub fn load_events_str(&mut self, content: &str) -> Result<()> {
        #[derive(serde::Deserialize)]
        struct EventFile {
            events: Vec<EventDef>,
        }

        let file: EventFile = ron::from_str(content)?;
        for event in file.events {
            let id = event.id.clone();
            if self.catalogs.events.contains_key(&id) {
                return Err(Error::DuplicateDefinition(id.to_string()));
            }
            self.catalogs.events.insert(id, event);
        }
        Ok(())
    }

    /// Load all RON files from a directory, recursing into subdirectories
    pub fn load_directory(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if !path.is_dir() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Not a directory: {:?}", path),
            )));
        }

        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let file_path = entry.path();

            if file_path.extension().map(|e| e == "ron").unwrap_or(false) {
                self.load_file(&file_path)?;
            } else if file_path.is_dir() {
                self.load_directory(&file_path)?;
            }
        }

        Ok(())
    }

    /// Finish loading and return the catalogs
    pub fn finish(self) -> Catalogs {
        self.catalogs
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Load the seed catalogs shipped with this crate
pub fn seed_catalogs() -> Result<Catalogs> {
    let mut loader = Loader::new();
    loader.load_buildings_str(include_str!("../data/buildings.ron"))?;
    loader.load_events_str(include_str!("../data/events.ron"))?;
    Ok(loader.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use starstation_core::{DefId, Rarity, Resource, STARTER_BUILDING};

    #[test]
    fn test_load_buildings() {
        let content = r#"
        (
            buildings: [
                (
                    id: "habitat",
                    name: "Habitat",
                    cost: { metal: 10, energy: 5 },
                    production: { oxygen: 5 },
                    production_rate: 30,
                ),
                (
                    id: "solar_array",
                    name: "Solar Array",
                    cost: { metal: 25 },
                    production: { energy: 6 },
                    production_rate: 30,
                ),
            ]
        )
        "#;

        let mut loader = Loader::new();
        loader.load_buildings_str(content).unwrap();

        let catalogs = loader.finish();
        assert_eq!(catalogs.buildings.len(), 2);
        let habitat = &catalogs.buildings[&DefId::new("habitat")];
        assert_eq!(habitat.production[&Resource::Oxygen], 5);
    }

    #[test]
    fn test_duplicate_definition_rejected() {
        let content = r#"
        (
            buildings: [
                (id: "habitat", name: "Habitat"),
                (id: "habitat", name: "Habitat Again"),
            ]
        )
        "#;

        let mut loader = Loader::new();
        let err = loader.load_buildings_str(content).unwrap_err();
        assert!(matches!(err, Error::DuplicateDefinition(_)));
    }

    #[test]
    fn test_seed_catalogs_parse() {
        let catalogs = seed_catalogs().unwrap();

        // Registration depends on the starter building existing
        let starter = &catalogs.buildings[&DefId::new(STARTER_BUILDING)];
        assert_eq!(starter.production_rate, 30);
        assert_eq!(starter.production[&Resource::Oxygen], 5);

        assert_eq!(catalogs.events.len(), 5);
        let eclipse = &catalogs.events[&DefId::new("solar_eclipse")];
        assert_eq!(eclipse.rarity, Rarity::Common);
        assert_eq!(eclipse.duration_ms, 300_000);
        assert_eq!(
            eclipse.effects.production_modifiers[&Resource::Energy],
            0.5
        );
    }

    #[test]
    fn test_seed_event_rarities_cover_tiers() {
        let catalogs = seed_catalogs().unwrap();
        let rare = catalogs
            .events
            .values()
            .filter(|e| e.rarity == Rarity::Rare)
            .count();
        assert_eq!(rare, 2);
    }
}
