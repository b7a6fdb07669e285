//! Error types for sources, configuration and the walk loop

use std::fmt;

/// How the walk loop should treat a source failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network or remote hiccup; the waypoint is skipped
    Transient,
    /// Remote did not answer at all
    NoResponse,
    /// Retrying cannot help
    Fatal,
    /// Response could not be decoded
    MalformedData,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::Transient => "transient",
            ErrorKind::NoResponse => "no-response",
            ErrorKind::Fatal => "fatal",
            ErrorKind::MalformedData => "malformed-data",
        };
        f.write_str(s)
    }
}

/// Failure reported by a sighting source
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} source error: {message}")]
pub struct SourceError {
    pub kind: ErrorKind,
    pub message: String,
}

impl SourceError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn transient(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transient, message)
    }

    pub fn no_response(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoResponse, message)
    }

    pub fn fatal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Fatal, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedData, message)
    }

    /// Whether the initialization handshake may be retried after this error
    pub fn is_retryable(&self) -> bool {
        matches!(self.kind, ErrorKind::Transient | ErrorKind::NoResponse)
    }

    /// Whether polling should skip the waypoint and carry on
    pub fn is_skippable(&self) -> bool {
        !matches!(self.kind, ErrorKind::Fatal)
    }
}

/// Invalid walker configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("waypoint plan is empty")]
    EmptyPlan,

    #[error("invalid coordinate ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("radius must be positive, got {0}")]
    InvalidRadius(f64),

    #[error("init_max_attempts must be at least 1")]
    InvalidAttempts,

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reasons the walk loop stopped with an error
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    #[error("initialization gave up after {attempts} attempts: {last}")]
    InitializationFailed { attempts: u32, last: SourceError },

    #[error(transparent)]
    Source(#[from] SourceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SourceError::transient("timeout");
        assert_eq!(err.to_string(), "transient source error: timeout");
    }

    #[test]
    fn test_retry_and_skip_classification() {
        assert!(SourceError::no_response("x").is_retryable());
        assert!(SourceError::transient("x").is_retryable());
        assert!(!SourceError::fatal("x").is_retryable());
        assert!(!SourceError::malformed("x").is_retryable());

        assert!(SourceError::transient("x").is_skippable());
        assert!(SourceError::malformed("x").is_skippable());
        assert!(!SourceError::fatal("x").is_skippable());
    }
}
