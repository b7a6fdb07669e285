//! Log-line handler

use crate::species::SpeciesNames;
use wildwalk_core::{Encounter, Handler};

/// Writes one `tracing` line per encounter
pub struct LogHandler {
    name: String,
    species: SpeciesNames,
}

impl LogHandler {
    pub fn new(species: SpeciesNames) -> Self {
        Self {
            name: "log".to_string(),
            species,
        }
    }

    /// Human-readable summary of an encounter
    pub fn describe(&self, encounter: &Encounter) -> String {
        let status = if encounter.is_new { "new" } else { "seen" };
        format!(
            "{} ({}) at {:.6},{:.6}, {} left [{}]",
            self.species.name(encounter.species_id),
            encounter.identity,
            encounter.position.latitude,
            encounter.position.longitude,
            format_remaining(encounter.visible_duration_ms),
            status
        )
    }
}

impl Default for LogHandler {
    fn default() -> Self {
        Self::new(SpeciesNames::default())
    }
}

impl Handler for LogHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn handle(&mut self, encounter: &Encounter) -> anyhow::Result<()> {
        tracing::info!(
            Name = %self.species.name(encounter.species_id),
            Latitude = encounter.position.latitude,
            Longitude = encounter.position.longitude,
            is_new = encounter.is_new,
            "{}",
            self.describe(encounter)
        );
        Ok(())
    }
}

/// `m:ss`, rounding partial seconds down
fn format_remaining(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{}:{:02}", secs / 60, secs % 60)
}
