//! Notification handlers for accepted encounters

pub mod config;
pub mod log;
pub mod species;
pub mod webhook;

pub use config::{build_handlers, HandlerConfig};
pub use log::LogHandler;
pub use species::SpeciesNames;
pub use webhook::{WebhookHandler, WebhookPayload};
