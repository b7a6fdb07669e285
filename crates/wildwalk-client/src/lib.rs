//! HTTP client for the remote map service

mod config;
mod http;

pub use config::SourceConfig;
pub use http::{classify_status, decode_map, HttpSightingSource};
