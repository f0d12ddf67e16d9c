use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::definition::{AnimalDefinition, PlantDefinition};
use crate::error::CatalogError;
use crate::pattern::RhythmPattern;

/// All rhythm content of a game: patterns and the minigames that use them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub patterns: Vec<RhythmPattern>,
    pub animals: Vec<AnimalDefinition>,
    pub plants: Vec<PlantDefinition>,
}

impl Catalog {
    /// Parse and validate a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a catalog file.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Save the catalog as pretty-printed JSON.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), CatalogError> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| CatalogError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Every pattern must be playable and pattern ids must be unique.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for pattern in &self.patterns {
            pattern
                .validate()
                .map_err(|source| CatalogError::InvalidPattern {
                    id: pattern.pattern_id.clone(),
                    source,
                })?;
            if !seen.insert(pattern.pattern_id.as_str()) {
                return Err(CatalogError::DuplicatePattern {
                    id: pattern.pattern_id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Look up a pattern by id.
    pub fn pattern(&self, id: &str) -> Option<&RhythmPattern> {
        let found = self.patterns.iter().find(|p| p.pattern_id == id);
        if found.is_none() {
            warn!("Pattern {id} not found");
        }
        found
    }

    /// Resolve a list of pattern ids in order, skipping unknown ids.
    pub fn resolve(&self, ids: &[String]) -> Vec<RhythmPattern> {
        ids.iter()
            .filter_map(|id| self.pattern(id))
            .cloned()
            .collect()
    }

    pub fn animal(&self, id: &str) -> Option<&AnimalDefinition> {
        let found = self.animals.iter().find(|a| a.id == id);
        if found.is_none() {
            warn!("Animal {id} not found");
        }
        found
    }

    pub fn plant(&self, id: &str) -> Option<&PlantDefinition> {
        let found = self.plants.iter().find(|p| p.id == id);
        if found.is_none() {
            warn!("Plant {id} not found");
        }
        found
    }
}
