//! Time sources and blocking sleeps used by the walk loop

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Wall-clock source
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Blocking sleep primitive, microsecond resolution
pub trait Sleeper {
    fn sleep_micros(&mut self, micros: u64);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep_micros(&mut self, micros: u64) {
        std::thread::sleep(Duration::from_micros(micros));
    }
}

/// Exact millisecond to microsecond conversion, saturating at `u64::MAX`
pub fn micros_from_millis(ms: u64) -> u64 {
    ms.saturating_mul(1000)
}
