//! Walker configuration

use crate::error::ConfigError;
use crate::plan::WaypointPlan;
use crate::retry::RetryPolicy;
use crate::types::Coordinate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// When the encounter cache is swept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepCadence {
    /// Once after the last waypoint of every cycle
    #[default]
    PerCycle,
    /// After every waypoint
    PerWaypoint,
}

/// Walker configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkerConfig {
    /// Walk centre
    pub latitude: f64,
    pub longitude: f64,

    /// Hexagonal rings generated around the centre (centre included)
    pub step_count: u32,

    /// Scan radius in km used for ring spacing
    pub radius: f64,

    /// Precomputed plan; bypasses generation when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Coordinate>>,

    /// Pause after each waypoint
    pub step_interval_ms: u64,

    /// Pause between full walks
    pub loop_interval_ms: u64,

    /// Dispatch re-sightings of tracked encounters too
    pub notify_on_repeat: bool,

    pub sweep_cadence: SweepCadence,

    /// Handshake attempts before giving up (unbounded when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_max_attempts: Option<u32>,

    /// Stop after this many full walks (runs forever when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cycles: Option<u64>,
}

impl WalkerConfig {
    pub fn new() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            step_count: 5,
            radius: 0.07,
            steps: None,
            step_interval_ms: 1000,
            loop_interval_ms: 60_000,
            notify_on_repeat: true,
            sweep_cadence: SweepCadence::PerCycle,
            init_max_attempts: None,
            max_cycles: None,
        }
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Waypoint plan: explicit `steps` if given, else generated rings
    pub fn plan(&self) -> Result<WaypointPlan, ConfigError> {
        match &self.steps {
            Some(steps) => WaypointPlan::new(steps.clone()),
            None => WaypointPlan::generate(self.center(), self.step_count, self.radius),
        }
    }

    /// Handshake retry policy; a bound of zero attempts is rejected
    pub fn retry_policy(&self) -> Result<RetryPolicy, ConfigError> {
        match self.init_max_attempts {
            Some(0) => Err(ConfigError::InvalidAttempts),
            max_attempts => Ok(RetryPolicy { max_attempts }),
        }
    }

    /// Parse a JSON config document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// `~/.wildwalk`
pub fn home_dir() -> std::io::Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
    })?;
    Ok(home.join(".wildwalk"))
}

/// `~/.wildwalk/config.json`
pub fn default_config_path() -> std::io::Result<PathBuf> {
    Ok(home_dir()?.join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = WalkerConfig::new();
        assert_eq!(config.step_count, 5);
        assert_eq!(config.radius, 0.07);
        assert_eq!(config.step_interval_ms, 1000);
        assert_eq!(config.loop_interval_ms, 60_000);
        assert!(config.notify_on_repeat);
        assert_eq!(config.sweep_cadence, SweepCadence::PerCycle);
        assert_eq!(config.retry_policy().unwrap(), RetryPolicy::unbounded());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            WalkerConfig::from_json(r#"{"latitude": 34.0, "longitude": -118.2, "step_count": 2}"#)
                .unwrap();
        assert_eq!(config.center(), Coordinate::new(34.0, -118.2));
        assert_eq!(config.loop_interval_ms, 60_000);
        assert_eq!(config.plan().unwrap().len(), 7);
    }

    #[test]
    fn test_steps_override_generation() {
        let config = WalkerConfig::from_json(
            r#"{"latitude": 1.0, "longitude": 1.0, "steps": [[10.0, 20.0], [11.0, 21.0]]}"#,
        )
        .unwrap();
        let plan = config.plan().unwrap();
        assert_eq!(
            plan.waypoints(),
            &[Coordinate::new(10.0, 20.0), Coordinate::new(11.0, 21.0)]
        );
    }

    #[test]
    fn test_sweep_cadence_parsing() {
        let config = WalkerConfig::from_json(r#"{"sweep_cadence": "per_waypoint"}"#).unwrap();
        assert_eq!(config.sweep_cadence, SweepCadence::PerWaypoint);
    }

    #[test]
    fn test_zero_init_attempts_rejected() {
        let config = WalkerConfig::from_json(r#"{"init_max_attempts": 0}"#).unwrap();
        assert!(matches!(config.retry_policy(), Err(ConfigError::InvalidAttempts)));

        let config = WalkerConfig::from_json(r#"{"init_max_attempts": 1}"#).unwrap();
        assert_eq!(config.retry_policy().unwrap(), RetryPolicy::bounded(1));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        assert!(matches!(
            WalkerConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_config_path() {
        let path = default_config_path().unwrap();
        assert!(path.ends_with(".wildwalk/config.json"));
    }
}
