//! Bounded retry for the initialization handshake

use crate::error::SourceError;

/// How many times the handshake may be attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RetryPolicy {
    /// `None` retries forever
    pub max_attempts: Option<u32>,
}

impl RetryPolicy {
    pub fn unbounded() -> Self {
        Self { max_attempts: None }
    }

    pub fn bounded(max_attempts: u32) -> Self {
        Self {
            max_attempts: Some(max_attempts),
        }
    }

    pub fn allows(&self, attempt: u32) -> bool {
        self.max_attempts.map_or(true, |max| attempt <= max)
    }

    /// Run `op` until it succeeds, fails with a non-retryable error, or the
    /// policy runs out. `on_retry` sees each retryable failure before the next
    /// attempt. On failure returns the attempt count and the last error.
    pub fn run<T, F, R>(&self, mut op: F, mut on_retry: R) -> Result<(T, u32), (u32, SourceError)>
    where
        F: FnMut(u32) -> Result<T, SourceError>,
        R: FnMut(u32, &SourceError),
    {
        let mut attempt = 1;
        loop {
            match op(attempt) {
                Ok(value) => return Ok((value, attempt)),
                Err(err) if err.is_retryable() && self.allows(attempt.saturating_add(1)) => {
                    on_retry(attempt, &err);
                    attempt = attempt.saturating_add(1);
                }
                Err(err) => return Err((attempt, err)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_succeeds_after_retries() {
        let policy = RetryPolicy::unbounded();
        let mut retries = Vec::new();

        let result = policy.run(
            |attempt| {
                if attempt < 3 {
                    Err(SourceError::no_response("silence"))
                } else {
                    Ok("ready")
                }
            },
            |attempt, _| retries.push(attempt),
        );

        assert_eq!(result.unwrap(), ("ready", 3));
        assert_eq!(retries, vec![1, 2]);
    }

    #[test]
    fn test_bounded_gives_up() {
        let policy = RetryPolicy::bounded(2);
        let result: Result<((), u32), _> =
            policy.run(|_| Err(SourceError::no_response("silence")), |_, _| {});

        let (attempts, err) = result.unwrap_err();
        assert_eq!(attempts, 2);
        assert!(err.is_retryable());
    }

    #[test]
    fn test_fatal_not_retried() {
        let policy = RetryPolicy::unbounded();
        let mut calls = 0;
        let result: Result<((), u32), _> = policy.run(
            |_| {
                calls += 1;
                Err(SourceError::fatal("banned"))
            },
            |_, _| {},
        );

        assert_eq!(result.unwrap_err().0, 1);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_allows() {
        assert!(RetryPolicy::unbounded().allows(u32::MAX));
        assert!(RetryPolicy::bounded(3).allows(3));
        assert!(!RetryPolicy::bounded(3).allows(4));
    }
}
