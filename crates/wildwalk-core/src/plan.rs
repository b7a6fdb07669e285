//! Waypoint plans and hexagonal step generation

use crate::error::ConfigError;
use crate::types::Coordinate;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Fixed, ordered waypoints walked cyclically
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointPlan {
    waypoints: Vec<Coordinate>,
}

impl WaypointPlan {
    pub fn new(waypoints: Vec<Coordinate>) -> Result<Self, ConfigError> {
        if waypoints.is_empty() {
            return Err(ConfigError::EmptyPlan);
        }
        if let Some(bad) = waypoints.iter().find(|c| !is_valid(c)) {
            return Err(ConfigError::InvalidCoordinate {
                latitude: bad.latitude,
                longitude: bad.longitude,
            });
        }
        Ok(Self { waypoints })
    }

    /// Hexagonal plan around `center`
    pub fn generate(center: Coordinate, step_count: u32, radius_km: f64) -> Result<Self, ConfigError> {
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(ConfigError::InvalidRadius(radius_km));
        }
        Self::new(generate_steps(center, step_count, radius_km))
    }

    pub fn waypoints(&self) -> &[Coordinate] {
        &self.waypoints
    }

    pub fn get(&self, index: usize) -> Option<Coordinate> {
        self.waypoints.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}

fn is_valid(c: &Coordinate) -> bool {
    (-90.0..=90.0).contains(&c.latitude) && (-180.0..=180.0).contains(&c.longitude)
}

/// Hexagonal rings of scan points around `center`.
///
/// Ring 0 is the centre itself; ring `r` holds `6r` points. Adjacent points
/// sit `sqrt(3) * radius_km` apart so that circles of `radius_km` overlap
/// without gaps. `step_count` is the number of rings including the centre.
pub fn generate_steps(center: Coordinate, step_count: u32, radius_km: f64) -> Vec<Coordinate> {
    if step_count == 0 {
        return Vec::new();
    }

    let x = 3f64.sqrt() * radius_km;
    let y = 1.5 * radius_km;

    // (east, north) offsets in km, walked in this order around each ring
    let directions = [
        (x / 2.0, y),   // NE
        (x, 0.0),       // E
        (x / 2.0, -y),  // SE
        (-x / 2.0, -y), // SW
        (-x, 0.0),      // W
        (-x / 2.0, y),  // NW
    ];

    let mut steps = vec![center];
    for ring in 1..step_count {
        let r = f64::from(ring);
        let (mut east, mut north) = (-x * r, 0.0);
        for (de, dn) in directions {
            for _ in 0..ring {
                steps.push(offset(center, east, north));
                east += de;
                north += dn;
            }
        }
    }
    steps
}

fn offset(center: Coordinate, east_km: f64, north_km: f64) -> Coordinate {
    // cos(lat) vanishes at the poles; keep dlon finite there
    let cos_lat = center.latitude.to_radians().cos().abs().max(1e-9);
    let dlat = (north_km / EARTH_RADIUS_KM).to_degrees();
    let dlon = (east_km / (EARTH_RADIUS_KM * cos_lat)).to_degrees();
    Coordinate::new(
        (center.latitude + dlat).clamp(-90.0, 90.0),
        wrap_longitude(center.longitude + dlon),
    )
}

/// Fold a longitude back into [-180, 180)
fn wrap_longitude(longitude: f64) -> f64 {
    (longitude + 180.0).rem_euclid(360.0) - 180.0
}
