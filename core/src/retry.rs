//! Bounded retry for transient outcomes.
//!
//! Only outcomes that report a transient condition are retried: transport
//! failures, and a 500 from the session handshake. The default policy makes a
//! single attempt.

use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::outcome::{ProfileOutcome, SessionOutcome};

/// How many times to try an operation and how long to wait between tries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,
}

fn default_max_attempts() -> u32 {
    1
}

fn default_backoff_ms() -> u64 {
    250
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            backoff_ms: default_backoff_ms(),
        }
    }
}

/// Outcomes that can say whether another attempt might succeed.
pub trait Retryable {
    fn is_transient(&self) -> bool;
}

impl Retryable for SessionOutcome {
    fn is_transient(&self) -> bool {
        matches!(
            self,
            SessionOutcome::ServerError | SessionOutcome::TransportFailure(_)
        )
    }
}

impl Retryable for ProfileOutcome {
    fn is_transient(&self) -> bool {
        matches!(self, ProfileOutcome::TransportFailure(_))
    }
}

impl RetryPolicy {
    pub fn backoff(&self) -> Duration {
        Duration::from_millis(self.backoff_ms)
    }

    /// Run `attempt` until it yields a non-transient outcome or the attempts
    /// run out. Always runs at least once.
    pub fn run<O, F>(&self, operation: &str, mut attempt: F) -> O
    where
        O: Retryable,
        F: FnMut() -> O,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut n = 1;
        loop {
            let outcome = attempt();
            if n >= max_attempts || !outcome.is_transient() {
                return outcome;
            }
            warn!(operation, attempt = n, max_attempts, "transient failure, retrying");
            thread::sleep(self.backoff());
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::error::TransportError;

    fn policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            backoff_ms: 0,
        }
    }

    #[test]
    fn default_policy_makes_one_attempt() {
        let calls = Cell::new(0);
        let outcome = RetryPolicy {
            backoff_ms: 0,
            ..RetryPolicy::default()
        }
        .run("start_session", || {
            calls.set(calls.get() + 1);
            SessionOutcome::ServerError
        });
        assert_eq!(outcome, SessionOutcome::ServerError);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn transient_outcomes_retry_up_to_limit() {
        let calls = Cell::new(0);
        let outcome = policy(3).run("fetch_profile", || {
            calls.set(calls.get() + 1);
            ProfileOutcome::TransportFailure(TransportError::Timeout)
        });
        assert!(matches!(outcome, ProfileOutcome::TransportFailure(_)));
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn stops_on_first_non_transient_outcome() {
        let calls = Cell::new(0);
        let outcome = policy(5).run("start_session", || {
            calls.set(calls.get() + 1);
            if calls.get() < 2 {
                SessionOutcome::ServerError
            } else {
                SessionOutcome::BadRequest
            }
        });
        assert_eq!(outcome, SessionOutcome::BadRequest);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn profile_500_is_not_retried() {
        let calls = Cell::new(0);
        policy(4).run("fetch_profile", || {
            calls.set(calls.get() + 1);
            ProfileOutcome::UnknownFailure { status: 500 }
        });
        assert_eq!(calls.get(), 1);
    }
}
