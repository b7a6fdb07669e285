//! Blocking HTTP implementation of `SightingSource`

use crate::config::SourceConfig;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;
use std::time::Duration;
use wildwalk_core::{ErrorKind, MapResponse, SightingSource, SourceError};

/// Map service speaking JSON over HTTP
#[derive(Debug)]
pub struct HttpSightingSource {
    base_url: String,
    auth_token: Option<String>,
    client: Client,
    location: Option<(f64, f64)>,
}

impl HttpSightingSource {
    pub fn new(config: &SourceConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| SourceError::fatal(format!("building http client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
            client,
            location: None,
        })
    }

    pub fn location(&self) -> Option<(f64, f64)> {
        self.location
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn map_url(&self, latitude: f64, longitude: f64) -> String {
        format!("{}?lat={}&lon={}", self.url("map"), latitude, longitude)
    }

    fn send(&self, request: RequestBuilder) -> Result<String, SourceError> {
        let request = match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().map_err(|e| {
            if e.is_timeout() || e.is_connect() {
                SourceError::no_response(e.to_string())
            } else {
                SourceError::transient(e.to_string())
            }
        })?;

        let status = response.status();
        if let Some(kind) = classify_status(status) {
            return Err(SourceError::new(kind, format!("{} returned {}", response.url(), status)));
        }

        response
            .text()
            .map_err(|e| SourceError::transient(format!("reading body: {}", e)))
    }

    fn handshake(&self, request: RequestBuilder, step: &str) -> Result<(), SourceError> {
        self.send(request)?;
        tracing::debug!(step, "handshake step complete");
        Ok(())
    }
}

/// Error kind for a non-success HTTP status
pub fn classify_status(status: StatusCode) -> Option<ErrorKind> {
    if status.is_success() {
        None
    } else if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
        Some(ErrorKind::Transient)
    } else {
        Some(ErrorKind::Fatal)
    }
}

impl SightingSource for HttpSightingSource {
    fn fetch_player(&mut self) -> Result<(), SourceError> {
        self.handshake(self.client.post(self.url("session")), "player")
    }

    fn fetch_inventory(&mut self) -> Result<(), SourceError> {
        self.handshake(self.client.get(self.url("inventory")), "inventory")
    }

    fn download_settings(&mut self) -> Result<(), SourceError> {
        self.handshake(self.client.get(self.url("settings")), "settings")
    }

    fn set_location(&mut self, latitude: f64, longitude: f64) {
        self.location = Some((latitude, longitude));
    }

    fn get_map_objects(&mut self) -> Result<MapResponse, SourceError> {
        let (latitude, longitude) = self
            .location
            .ok_or_else(|| SourceError::fatal("map requested before a location was set"))?;

        let body = self.send(self.client.get(self.map_url(latitude, longitude)))?;
        decode_map(&body)
    }
}

/// Decode a map-objects body; anything undecodable is malformed data
pub fn decode_map(body: &str) -> Result<MapResponse, SourceError> {
    serde_json::from_str(body).map_err(|e| SourceError::malformed(format!("map response: {}", e)))
}
