//! New-vs-tracked classification of raw sightings

use crate::cache::EncounterCache;
use crate::types::{Coordinate, Encounter, RawSighting};
use chrono::{DateTime, Utc};

/// Classify one raw sighting against the cache.
///
/// Returns `None` for sightings with no remaining visible time; those never
/// touch the cache. Otherwise the cache entry is replaced with an encounter
/// built from the newest raw data and that encounter is returned, flagged
/// `is_new` when the id was not tracked before.
pub fn classify(
    raw: &RawSighting,
    cache: &mut EncounterCache,
    now: DateTime<Utc>,
) -> Option<Encounter> {
    let visible_duration_ms = u64::try_from(raw.time_till_hidden_ms)
        .ok()
        .filter(|&ms| ms > 0)?;

    let encounter = Encounter {
        identity: raw.encounter_id,
        position: Coordinate::new(raw.latitude, raw.longitude),
        species_id: raw.species_id,
        visible_duration_ms,
        detected_at: now,
        is_new: !cache.contains(raw.encounter_id),
    };

    cache.put(raw.encounter_id, encounter.clone());
    Some(encounter)
}
