//! Handler trait and notification fan-out

use crate::logger::{Logger, WalkEvent};
use crate::types::Encounter;

/// Notification sink for accepted encounters
pub trait Handler: Send {
    /// Handler name (used in logs)
    fn name(&self) -> &str;

    /// Act on an encounter
    fn handle(&mut self, encounter: &Encounter) -> anyhow::Result<()>;
}

/// Ordered set of handlers
pub struct HandlerRegistry {
    handlers: Vec<Box<dyn Handler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Attach a handler; handlers run in attachment order
    pub fn register(&mut self, handler: Box<dyn Handler>) {
        self.handlers.push(handler);
    }

    /// Deliver `encounter` to every handler. A failing handler is logged and
    /// does not stop the rest. Returns the number of failures.
    pub fn notify(&mut self, encounter: &Encounter, logger: &dyn Logger) -> usize {
        let mut failures = 0;
        for handler in &mut self.handlers {
            if let Err(err) = handler.handle(encounter) {
                failures += 1;
                logger.log(&WalkEvent::HandlerFailed {
                    name: handler.name().to_string(),
                    exception: format!("{err:#}"),
                });
            }
        }
        failures
    }

    pub fn names(&self) -> Vec<&str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
