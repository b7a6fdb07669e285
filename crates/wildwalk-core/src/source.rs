//! Sighting source seam

use crate::error::SourceError;
use crate::types::MapResponse;

/// Remote map service the walker polls.
///
/// The three handshake calls run once, in order, before any location query
/// is accepted.
pub trait SightingSource {
    fn fetch_player(&mut self) -> Result<(), SourceError>;

    fn fetch_inventory(&mut self) -> Result<(), SourceError>;

    fn download_settings(&mut self) -> Result<(), SourceError>;

    fn set_location(&mut self, latitude: f64, longitude: f64);

    fn get_map_objects(&mut self) -> Result<MapResponse, SourceError>;

    /// Full handshake; stops at the first failing call
    fn initialize(&mut self) -> Result<(), SourceError> {
        self.fetch_player()?;
        self.fetch_inventory()?;
        self.download_settings()
    }
}
