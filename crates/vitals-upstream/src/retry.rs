//! Retry policy for upstream requests
//!
//! Attempt `i` (0-based) is handled as follows:
//! - 429 Too Many Requests: wait `rate_limit_backoff × (i + 1)` and retry
//! - 5xx: wait `server_error_backoff × (i + 1)` and retry, fail on the last attempt
//! - transport error: same as 5xx
//! - anything else: hand the response back to the caller

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: u32,

    /// Base delay after a 429
    pub rate_limit_backoff: Duration,

    /// Base delay after a 5xx or transport failure
    pub server_error_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            rate_limit_backoff: Duration::from_millis(1000),
            server_error_backoff: Duration::from_millis(500),
        }
    }
}

/// What to do after one attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Use this response
    Accept,
    /// Sleep, then try again
    RetryAfter(Duration),
    /// Stop with a server error
    Fail,
    /// Rate limited on the final attempt
    Exhausted,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            ..Self::default()
        }
    }

    /// Override both backoff bases
    pub fn with_backoff(mut self, rate_limit: Duration, server_error: Duration) -> Self {
        self.rate_limit_backoff = rate_limit;
        self.server_error_backoff = server_error;
        self
    }

    /// Decide based on the HTTP status of attempt `attempt`
    pub fn on_status(&self, status: u16, attempt: u32) -> RetryDecision {
        if status == 429 {
            if self.is_last(attempt) {
                return RetryDecision::Exhausted;
            }
            return RetryDecision::RetryAfter(self.rate_limit_backoff * (attempt + 1));
        }

        if status >= 500 {
            return self.on_failure(attempt);
        }

        RetryDecision::Accept
    }

    /// Decide after a transport error on attempt `attempt`
    pub fn on_transport_error(&self, attempt: u32) -> RetryDecision {
        self.on_failure(attempt)
    }

    fn on_failure(&self, attempt: u32) -> RetryDecision {
        if self.is_last(attempt) {
            RetryDecision::Fail
        } else {
            RetryDecision::RetryAfter(self.server_error_backoff * (attempt + 1))
        }
    }

    fn is_last(&self, attempt: u32) -> bool {
        attempt + 1 >= self.max_attempts
    }
}
