//! In-memory encounter cache with expiry sweeps

use crate::types::Encounter;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Tracked encounters keyed by encounter id
#[derive(Debug, Default)]
pub struct EncounterCache {
    entries: HashMap<u64, Encounter>,
}

impl EncounterCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, identity: u64) -> bool {
        self.entries.contains_key(&identity)
    }

    pub fn get(&self, identity: u64) -> Option<&Encounter> {
        self.entries.get(&identity)
    }

    /// Insert or replace the entry for `identity`
    pub fn put(&mut self, identity: u64, encounter: Encounter) {
        self.entries.insert(identity, encounter);
    }

    /// Evict every encounter whose expiry instant is at or before `now`.
    /// Returns the number of evicted entries.
    pub fn sweep(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, encounter| !encounter.is_expired(now));
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
