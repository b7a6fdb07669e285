//! Walk loop: initialize, poll every waypoint, sweep, rest, repeat

use crate::cache::EncounterCache;
use crate::classifier::classify;
use crate::clock::{micros_from_millis, Clock, Sleeper, SystemClock, ThreadSleeper};
use crate::config::{SweepCadence, WalkerConfig};
use crate::error::{ConfigError, WalkError};
use crate::logger::{Logger, WalkEvent, WalkState};
use crate::notify::{Handler, HandlerRegistry};
use crate::plan::WaypointPlan;
use crate::retry::RetryPolicy;
use crate::source::SightingSource;
use crate::types::MapResponse;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative shutdown flag shared with the walker
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

/// Owns the plan, cache and handlers of one walking daemon
pub struct Walker<S> {
    source: S,
    plan: WaypointPlan,
    cache: EncounterCache,
    handlers: HandlerRegistry,
    logger: Box<dyn Logger>,
    clock: Box<dyn Clock>,
    sleeper: Box<dyn Sleeper>,
    retry: RetryPolicy,
    step_interval_ms: u64,
    loop_interval_ms: u64,
    notify_on_repeat: bool,
    sweep_cadence: SweepCadence,
    max_cycles: Option<u64>,
    stop: StopHandle,
    state: WalkState,
    cycles: u64,
}

impl<S: SightingSource> Walker<S> {
    pub fn new(
        config: &WalkerConfig,
        source: S,
        logger: Box<dyn Logger>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            source,
            plan: config.plan()?,
            cache: EncounterCache::new(),
            handlers: HandlerRegistry::new(),
            logger,
            clock: Box::new(SystemClock),
            sleeper: Box::new(ThreadSleeper),
            retry: config.retry_policy()?,
            step_interval_ms: config.step_interval_ms,
            loop_interval_ms: config.loop_interval_ms,
            notify_on_repeat: config.notify_on_repeat,
            sweep_cadence: config.sweep_cadence,
            max_cycles: config.max_cycles,
            stop: StopHandle::default(),
            state: WalkState::Initializing,
            cycles: 0,
        })
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_sleeper(mut self, sleeper: Box<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Attach a handler; call before `run`
    pub fn add_handler(&mut self, handler: Box<dyn Handler>) {
        self.handlers.register(handler);
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn state(&self) -> WalkState {
        self.state
    }

    pub fn cache(&self) -> &EncounterCache {
        &self.cache
    }

    pub fn plan(&self) -> &WaypointPlan {
        &self.plan
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Completed full walks
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Initialize, then walk until stopped, `max_cycles` is reached, or a
    /// fatal source error occurs. The walker is left in `Stopped` either way.
    pub fn run(&mut self) -> Result<(), WalkError> {
        let result = self.walk_until_done();
        self.set_state(WalkState::Stopped);
        self.logger.log(&WalkEvent::Stopped);
        result
    }

    fn walk_until_done(&mut self) -> Result<(), WalkError> {
        self.initialize()?;

        while !self.exhausted() {
            if !self.walk_once()? {
                break;
            }
            self.cycles += 1;
            if self.exhausted() || !self.rest() {
                break;
            }
        }
        Ok(())
    }

    fn exhausted(&self) -> bool {
        self.max_cycles.is_some_and(|max| self.cycles >= max)
    }

    /// Run the handshake under the retry policy
    pub fn initialize(&mut self) -> Result<(), WalkError> {
        self.set_state(WalkState::Initializing);

        let policy = self.retry;
        let source = &mut self.source;
        let logger = &self.logger;
        let outcome = policy.run(
            |_| source.initialize(),
            |attempt, err| {
                logger.log(&WalkEvent::InitializationRetry {
                    attempt,
                    exception: err.to_string(),
                })
            },
        );

        match outcome {
            Ok(((), attempts)) => {
                self.logger.log(&WalkEvent::Initialized { attempts });
                Ok(())
            }
            Err((attempts, last)) if last.is_retryable() => {
                Err(WalkError::InitializationFailed { attempts, last })
            }
            Err((_, last)) => Err(last.into()),
        }
    }

    /// Visit every waypoint once, then sweep. Returns `false` if a stop was
    /// requested part way.
    pub fn walk_once(&mut self) -> Result<bool, WalkError> {
        self.set_state(WalkState::Polling);
        let steps = self.plan.len();

        for index in 0..steps {
            if self.stop.is_stopped() {
                return Ok(false);
            }

            let waypoint = self.plan.waypoints()[index];
            self.logger.log(&WalkEvent::Stepping {
                step: index + 1,
                steps,
                latitude: waypoint.latitude,
                longitude: waypoint.longitude,
            });

            self.source.set_location(waypoint.latitude, waypoint.longitude);
            match self.source.get_map_objects() {
                Ok(response) => self.process(&response),
                Err(err) if err.is_skippable() => {
                    self.logger.log(&WalkEvent::StepFailed {
                        step: index + 1,
                        steps,
                        exception: err.to_string(),
                    });
                }
                Err(err) => return Err(err.into()),
            }

            if self.sweep_cadence == SweepCadence::PerWaypoint {
                self.sweep();
            }
            self.sleeper.sleep_micros(micros_from_millis(self.step_interval_ms));
        }

        if self.sweep_cadence == SweepCadence::PerCycle {
            self.sweep();
        }
        Ok(true)
    }

    /// Sleep between walks. Returns `false` if a stop was requested.
    fn rest(&mut self) -> bool {
        if self.stop.is_stopped() {
            return false;
        }
        self.set_state(WalkState::Resting);
        self.logger.log(&WalkEvent::Resting {
            loop_interval_ms: self.loop_interval_ms,
        });
        self.sleeper.sleep_micros(micros_from_millis(self.loop_interval_ms));
        true
    }

    fn process(&mut self, response: &MapResponse) {
        let now = self.clock.now();
        for sighting in response.sightings() {
            let Some(encounter) = classify(sighting, &mut self.cache, now) else {
                continue;
            };
            if encounter.is_new || self.notify_on_repeat {
                self.handlers.notify(&encounter, self.logger.as_ref());
            }
        }
    }

    fn sweep(&mut self) {
        let evicted = self.cache.sweep(self.clock.now());
        self.logger.log(&WalkEvent::Swept {
            evicted,
            remaining: self.cache.len(),
        });
    }

    fn set_state(&mut self, state: WalkState) {
        self.state = state;
        self.logger.log(&WalkEvent::StateChanged { state });
    }
}
