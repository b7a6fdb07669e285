//! Core types for sightings and encounters

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A (latitude, longitude) pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(c: Coordinate) -> Self {
        (c.latitude, c.longitude)
    }
}

/// A raw sighting as decoded by the sighting source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSighting {
    pub encounter_id: u64,
    pub latitude: f64,
    pub longitude: f64,
    pub species_id: u32,
    /// Remaining visible time; zero or negative means already gone
    pub time_till_hidden_ms: i64,
}

/// One map cell of a map-objects response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapCell {
    #[serde(default)]
    pub cell_id: u64,
    #[serde(default)]
    pub wild_sightings: Vec<RawSighting>,
}

/// Map-objects response; everything except sightings is ignored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapResponse {
    #[serde(default)]
    pub cells: Vec<MapCell>,
}

impl MapResponse {
    /// Sightings from every cell that has any, in cell order
    pub fn sightings(&self) -> impl Iterator<Item = &RawSighting> {
        self.cells
            .iter()
            .filter(|cell| !cell.wild_sightings.is_empty())
            .flat_map(|cell| cell.wild_sightings.iter())
    }
}

/// A classified, tracked sighting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encounter {
    pub identity: u64,
    pub position: Coordinate,
    pub species_id: u32,
    pub visible_duration_ms: u64,
    pub detected_at: DateTime<Utc>,
    pub is_new: bool,
}

impl Encounter {
    /// Instant after which the sighting is gone
    pub fn expires_at(&self) -> DateTime<Utc> {
        // Durations past chrono's range saturate to "never" in practice.
        let millis = i64::try_from(self.visible_duration_ms).unwrap_or(i64::MAX);
        Duration::try_milliseconds(millis)
            .and_then(|d| self.detected_at.checked_add_signed(d))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }
}
