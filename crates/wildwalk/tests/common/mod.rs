#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use wildwalk_core::{
    Clock, Coordinate, Encounter, Handler, Logger, MapCell, MapResponse, RawSighting,
    SightingSource, Sleeper, SourceError, WalkEvent, WalkerConfig,
};

/// Source that replays scripted map responses and records every call
#[derive(Default)]
pub struct ScriptedSource {
    pub init_failures: u32,
    pub init_attempts: u32,
    pub initialized: bool,
    pub polled_before_init: bool,
    pub responses: VecDeque<Result<MapResponse, SourceError>>,
    pub locations: Vec<(f64, f64)>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, response: Result<MapResponse, SourceError>) -> Self {
        self.responses.push_back(response);
        self
    }

    pub fn failing_init(mut self, failures: u32) -> Self {
        self.init_failures = failures;
        self
    }
}

impl SightingSource for ScriptedSource {
    fn fetch_player(&mut self) -> Result<(), SourceError> {
        self.init_attempts += 1;
        if self.init_failures > 0 {
            self.init_failures -= 1;
            return Err(SourceError::no_response("no answer from server"));
        }
        Ok(())
    }

    fn fetch_inventory(&mut self) -> Result<(), SourceError> {
        Ok(())
    }

    fn download_settings(&mut self) -> Result<(), SourceError> {
        self.initialized = true;
        Ok(())
    }

    fn set_location(&mut self, latitude: f64, longitude: f64) {
        self.locations.push((latitude, longitude));
    }

    fn get_map_objects(&mut self) -> Result<MapResponse, SourceError> {
        if !self.initialized {
            self.polled_before_init = true;
        }
        self.responses
            .pop_front()
            .unwrap_or_else(|| Ok(MapResponse::default()))
    }
}

pub type Received = Arc<Mutex<Vec<Encounter>>>;

/// Handler that remembers every encounter, optionally failing each time
pub struct RecordingHandler {
    pub name: String,
    pub received: Received,
    pub fail: bool,
}

impl RecordingHandler {
    pub fn new(name: &str) -> (Self, Received) {
        let received = Received::default();
        (
            Self {
                name: name.to_string(),
                received: received.clone(),
                fail: false,
            },
            received,
        )
    }

    pub fn failing(name: &str) -> (Self, Received) {
        let (mut handler, received) = Self::new(name);
        handler.fail = true;
        (handler, received)
    }
}

impl Handler for RecordingHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn handle(&mut self, encounter: &Encounter) -> anyhow::Result<()> {
        self.received.lock().unwrap().push(encounter.clone());
        if self.fail {
            anyhow::bail!("{} refused the encounter", self.name);
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct RecordingLogger {
    pub events: Arc<Mutex<Vec<WalkEvent>>>,
}

impl RecordingLogger {
    pub fn events(&self) -> Vec<WalkEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, event: &WalkEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Clock that only moves when told to
#[derive(Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(start_time())),
        }
    }

    pub fn advance_micros(&self, micros: u64) {
        let mut now = self.now.lock().unwrap();
        *now += Duration::microseconds(micros as i64);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// Sleeper that records requested sleeps and advances a manual clock
pub struct AdvancingSleeper {
    pub clock: ManualClock,
    pub slept: Arc<Mutex<Vec<u64>>>,
}

impl AdvancingSleeper {
    pub fn new(clock: ManualClock) -> (Self, Arc<Mutex<Vec<u64>>>) {
        let slept = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                clock,
                slept: slept.clone(),
            },
            slept,
        )
    }
}

impl Sleeper for AdvancingSleeper {
    fn sleep_micros(&mut self, micros: u64) {
        self.slept.lock().unwrap().push(micros);
        self.clock.advance_micros(micros);
    }
}

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 6, 9, 0, 0).unwrap()
}

pub fn waypoints(n: usize) -> Vec<Coordinate> {
    (0..n)
        .map(|i| Coordinate::new(40.0 + i as f64 * 0.001, -74.0))
        .collect()
}

pub fn walk_config(n: usize, cycles: u64) -> WalkerConfig {
    WalkerConfig {
        steps: Some(waypoints(n)),
        max_cycles: Some(cycles),
        ..WalkerConfig::new()
    }
}

pub fn sighting(id: u64, ttl_ms: i64) -> RawSighting {
    RawSighting {
        encounter_id: id,
        latitude: 40.0005,
        longitude: -74.0005,
        species_id: 133,
        time_till_hidden_ms: ttl_ms,
    }
}

pub fn response(sightings: Vec<RawSighting>) -> MapResponse {
    MapResponse {
        cells: vec![
            MapCell {
                cell_id: 1,
                wild_sightings: vec![],
            },
            MapCell {
                cell_id: 2,
                wild_sightings: sightings,
            },
        ],
    }
}
