//! Logging capability injected into the walker

use std::fmt;

/// Walk loop state, as reported in `{State}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkState {
    Initializing,
    Polling,
    Resting,
    /// `run` has returned
    Stopped,
}

impl fmt::Display for WalkState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WalkState::Initializing => "Initializing",
            WalkState::Polling => "Polling",
            WalkState::Resting => "Resting",
            WalkState::Stopped => "Stopped",
        };
        f.write_str(s)
    }
}

/// Something worth logging during a walk
#[derive(Debug, Clone, PartialEq)]
pub enum WalkEvent {
    StateChanged {
        state: WalkState,
    },
    InitializationRetry {
        attempt: u32,
        exception: String,
    },
    Initialized {
        attempts: u32,
    },
    Stepping {
        step: usize,
        steps: usize,
        latitude: f64,
        longitude: f64,
    },
    StepFailed {
        step: usize,
        steps: usize,
        exception: String,
    },
    HandlerFailed {
        name: String,
        exception: String,
    },
    Swept {
        evicted: usize,
        remaining: usize,
    },
    Resting {
        loop_interval_ms: u64,
    },
    Stopped,
}

/// Receives leveled walk events
pub trait Logger {
    fn log(&self, event: &WalkEvent);
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _event: &WalkEvent) {}
}

/// Forwards events to `tracing` with structured fields
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, event: &WalkEvent) {
        match event {
            WalkEvent::StateChanged { state } => {
                tracing::debug!(State = %state, "walker state changed")
            }
            WalkEvent::InitializationRetry { attempt, exception } => {
                tracing::warn!(attempt, Exception = %exception, "initialization failed, retrying")
            }
            WalkEvent::Initialized { attempts } => {
                tracing::info!(attempts, "session initialized")
            }
            WalkEvent::Stepping {
                step,
                steps,
                latitude,
                longitude,
            } => tracing::info!(
                Step = step,
                Steps = steps,
                Latitude = latitude,
                Longitude = longitude,
                "walking to waypoint"
            ),
            WalkEvent::StepFailed {
                step,
                steps,
                exception,
            } => tracing::warn!(
                Step = step,
                Steps = steps,
                Exception = %exception,
                "map request failed, skipping waypoint"
            ),
            WalkEvent::HandlerFailed { name, exception } => {
                tracing::error!(Name = %name, Exception = %exception, "handler failed")
            }
            WalkEvent::Swept { evicted, remaining } => {
                tracing::debug!(evicted, remaining, "swept expired encounters")
            }
            WalkEvent::Resting { loop_interval_ms } => {
                tracing::info!(LoopInterval = loop_interval_ms, "resting until next walk")
            }
            WalkEvent::Stopped => tracing::info!("walker stopped"),
        }
    }
}
