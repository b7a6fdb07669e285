//! Encounter lifecycle engine: waypoint walking, encounter caching and
//! notification fan-out

mod cache;
mod classifier;
mod clock;
mod config;
mod driver;
mod error;
mod logger;
mod notify;
mod plan;
mod retry;
mod source;
mod types;

pub use cache::EncounterCache;
pub use classifier::classify;
pub use clock::{micros_from_millis, Clock, Sleeper, SystemClock, ThreadSleeper};
pub use config::{default_config_path, home_dir, SweepCadence, WalkerConfig};
pub use driver::{StopHandle, Walker};
pub use error::{ConfigError, ErrorKind, SourceError, WalkError};
pub use logger::{Logger, NullLogger, TracingLogger, WalkEvent, WalkState};
pub use notify::{Handler, HandlerRegistry};
pub use plan::{generate_steps, WaypointPlan};
pub use retry::RetryPolicy;
pub use source::SightingSource;
pub use types::{Coordinate, Encounter, MapCell, MapResponse, RawSighting};
