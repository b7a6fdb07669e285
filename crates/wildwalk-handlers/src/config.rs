//! Handler settings and construction

use crate::log::LogHandler;
use crate::species::SpeciesNames;
use crate::webhook::WebhookHandler;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use wildwalk_core::Handler;

fn default_timeout_ms() -> u64 {
    5000
}

/// One entry of the `handlers` settings list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HandlerConfig {
    Log,
    Webhook {
        url: String,
        #[serde(default = "default_timeout_ms")]
        timeout_ms: u64,
    },
}

/// Build handlers in settings order
pub fn build_handlers(
    configs: &[HandlerConfig],
    species: &SpeciesNames,
) -> anyhow::Result<Vec<Box<dyn Handler>>> {
    configs
        .iter()
        .map(|config| -> anyhow::Result<Box<dyn Handler>> {
            match config {
                HandlerConfig::Log => Ok(Box::new(LogHandler::new(species.clone()))),
                HandlerConfig::Webhook { url, timeout_ms } => Ok(Box::new(WebhookHandler::new(
                    url.clone(),
                    Duration::from_millis(*timeout_ms),
                    species.clone(),
                )?)),
            }
        })
        .collect()
}
