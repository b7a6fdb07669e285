//! JSON webhook handler

use crate::species::SpeciesNames;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use wildwalk_core::{Encounter, Handler};

/// Body POSTed for each encounter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub encounter_id: u64,
    pub species_id: u32,
    pub species_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub is_new: bool,
    pub detected_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl WebhookPayload {
    pub fn from_encounter(encounter: &Encounter, species: &SpeciesNames) -> Self {
        Self {
            encounter_id: encounter.identity,
            species_id: encounter.species_id,
            species_name: species.name(encounter.species_id),
            latitude: encounter.position.latitude,
            longitude: encounter.position.longitude,
            is_new: encounter.is_new,
            detected_at: encounter.detected_at,
            expires_at: encounter.expires_at(),
        }
    }
}

/// POSTs each encounter as JSON to a fixed URL
pub struct WebhookHandler {
    name: String,
    url: String,
    client: reqwest::blocking::Client,
    species: SpeciesNames,
}

impl WebhookHandler {
    pub fn new(url: impl Into<String>, timeout: Duration, species: SpeciesNames) -> anyhow::Result<Self> {
        let url = url.into();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            anyhow::bail!("webhook url must be http(s): {}", url);
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            name: format!("webhook:{}", url),
            url,
            client,
            species,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Handler for WebhookHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn handle(&mut self, encounter: &Encounter) -> anyhow::Result<()> {
        let payload = WebhookPayload::from_encounter(encounter, &self.species);
        let response = self.client.post(&self.url).json(&payload).send()?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("webhook returned {}", status);
        }
        Ok(())
    }
}
