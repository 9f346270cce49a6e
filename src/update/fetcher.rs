//! Bounded retry with linear backoff around a version registry

use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use tracing::warn;

use crate::config::{DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_BASE_DELAY_MS};
use crate::update::error::RegistryError;
use crate::update::registry::VersionRegistry;
use crate::update::types::RemoteVersionRecord;

/// Trait for waiting between retry attempts
///
/// Production uses tokio's timer; tests inject a mock and assert the delay
/// progression instead of sleeping.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Sleeper backed by `tokio::time::sleep`
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

#[async_trait::async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Retry budget and backoff parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum attempts, including the first
    pub max_attempts: u32,
    /// Attempt n waits `n * base_delay` before attempt n+1
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: Duration::from_millis(DEFAULT_RETRY_BASE_DELAY_MS),
        }
    }
}

/// What to do after a failed attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryStep {
    /// Wait, then run the numbered attempt
    Retry { wait: Duration, next_attempt: u32 },
    /// Surface the error to the caller
    GiveUp,
}

impl RetryPolicy {
    /// Decide the next step after attempt `attempt` failed with `err`
    ///
    /// Pure decision; the caller owns the actual delay. Linear backoff:
    /// attempt 1 waits one base delay, attempt 2 waits two.
    pub fn after_failure(&self, attempt: u32, err: &RegistryError) -> RetryStep {
        if !err.is_retryable() || attempt >= self.max_attempts {
            return RetryStep::GiveUp;
        }
        RetryStep::Retry {
            wait: self.base_delay * attempt,
            next_attempt: attempt + 1,
        }
    }
}

/// Wraps a [`VersionRegistry`] with the retry policy
///
/// Retries block only the pipeline performing them; sibling lookups in the
/// same batch keep running.
pub struct RetryingFetcher<R, S = TokioSleeper> {
    registry: R,
    sleeper: S,
    policy: RetryPolicy,
}

impl<R: VersionRegistry> RetryingFetcher<R> {
    pub fn new(registry: R, policy: RetryPolicy) -> Self {
        Self {
            registry,
            sleeper: TokioSleeper,
            policy,
        }
    }
}

impl<R: VersionRegistry, S: Sleeper> RetryingFetcher<R, S> {
    pub fn with_sleeper(registry: R, policy: RetryPolicy, sleeper: S) -> Self {
        Self {
            registry,
            sleeper,
            policy,
        }
    }

    /// Fetch a mod's versions, retrying transient failures
    ///
    /// Exhausting the budget surfaces the last error; non-retryable errors
    /// propagate immediately without consuming further attempts.
    pub async fn fetch_versions(
        &self,
        mod_id: &str,
    ) -> Result<Vec<RemoteVersionRecord>, RegistryError> {
        let mut attempt = 1;
        loop {
            match self.registry.fetch_versions(mod_id).await {
                Ok(versions) => return Ok(versions),
                Err(err) => match self.policy.after_failure(attempt, &err) {
                    RetryStep::Retry { wait, next_attempt } => {
                        warn!(
                            "Fetch attempt {}/{} for {} failed ({}), retrying in {:?}",
                            attempt, self.policy.max_attempts, mod_id, err, wait
                        );
                        self.sleeper.sleep(wait).await;
                        attempt = next_attempt;
                    }
                    RetryStep::GiveUp => return Err(err),
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::update::registry::MockVersionRegistry;
    use mockall::predicate::eq;

    fn test_policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
        }
    }

    fn unavailable() -> RegistryError {
        RegistryError::Unavailable { status: 503 }
    }

    #[test]
    fn after_failure_backs_off_linearly() {
        let policy = test_policy();

        assert_eq!(
            policy.after_failure(1, &unavailable()),
            RetryStep::Retry {
                wait: Duration::from_millis(1000),
                next_attempt: 2
            }
        );
        assert_eq!(
            policy.after_failure(2, &unavailable()),
            RetryStep::Retry {
                wait: Duration::from_millis(2000),
                next_attempt: 3
            }
        );
        assert_eq!(policy.after_failure(3, &unavailable()), RetryStep::GiveUp);
    }

    #[test]
    fn after_failure_gives_up_immediately_on_permanent_errors() {
        let policy = test_policy();
        let not_found = RegistryError::NotFound("abc123".to_string());

        assert_eq!(policy.after_failure(1, &not_found), RetryStep::GiveUp);
    }

    #[tokio::test]
    async fn fetch_succeeds_on_third_attempt_after_increasing_waits() {
        let mut registry = MockVersionRegistry::new();
        registry
            .expect_fetch_versions()
            .with(eq("AANobbMI"))
            .times(2)
            .returning(|_| Err(RegistryError::Unavailable { status: 502 }));
        registry
            .expect_fetch_versions()
            .with(eq("AANobbMI"))
            .times(1)
            .returning(|_| Ok(vec![]));

        let mut sleeper = MockSleeper::new();
        let mut seq = mockall::Sequence::new();
        sleeper
            .expect_sleep()
            .with(eq(Duration::from_millis(1000)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| ());
        sleeper
            .expect_sleep()
            .with(eq(Duration::from_millis(2000)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| ());

        let fetcher = RetryingFetcher::with_sleeper(registry, test_policy(), sleeper);
        let result = fetcher.fetch_versions("AANobbMI").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn fetch_surfaces_last_error_after_exhausting_attempts() {
        let mut registry = MockVersionRegistry::new();
        registry
            .expect_fetch_versions()
            .times(3)
            .returning(|_| Err(RegistryError::Unavailable { status: 503 }));

        let mut sleeper = MockSleeper::new();
        sleeper.expect_sleep().times(2).returning(|_| ());

        let fetcher = RetryingFetcher::with_sleeper(registry, test_policy(), sleeper);
        let result = fetcher.fetch_versions("AANobbMI").await;

        assert!(matches!(
            result,
            Err(RegistryError::Unavailable { status: 503 })
        ));
    }

    #[tokio::test]
    async fn fetch_does_not_retry_not_found() {
        let mut registry = MockVersionRegistry::new();
        registry
            .expect_fetch_versions()
            .times(1)
            .returning(|_| Err(RegistryError::NotFound("missing".to_string())));

        let mut sleeper = MockSleeper::new();
        sleeper.expect_sleep().times(0);

        let fetcher = RetryingFetcher::with_sleeper(registry, test_policy(), sleeper);
        let result = fetcher.fetch_versions("missing").await;

        assert!(matches!(result, Err(RegistryError::NotFound(_))));
    }
}
