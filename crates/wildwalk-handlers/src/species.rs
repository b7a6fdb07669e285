//! Species id to display name lookup

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Display names keyed by species id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeciesNames {
    names: HashMap<u32, String>,
}

impl SpeciesNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, species_id: u32, name: impl Into<String>) {
        self.names.insert(species_id, name.into());
    }

    /// Configured name, or `#<id>` when unknown
    pub fn name(&self, species_id: u32) -> String {
        self.names
            .get(&species_id)
            .cloned()
            .unwrap_or_else(|| format!("#{}", species_id))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(u32, String)> for SpeciesNames {
    fn from_iter<I: IntoIterator<Item = (u32, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
