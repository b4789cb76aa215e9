use crate::error::ApiError;
use std::future::Future;
use std::time::Duration;

/// Retry configuration for API operations
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts after the initial call
    pub max_retries: u32,
    /// Delay before the first retry; doubles on every further attempt
    pub initial_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryConfig {
    /// Config with no waiting between attempts, for tests
    pub fn immediate(max_retries: u32) -> Self {
        Self {
            max_retries,
            initial_delay: Duration::ZERO,
        }
    }
}

/// Executes failable operations with bounded exponential backoff.
/// Retries are gated on the classified error's retry hint, so Auth and
/// Validation failures surface immediately.
#[derive(Debug, Clone)]
pub struct RetryExecutor {
    config: RetryConfig,
}

impl RetryExecutor {
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    /// Execute an async operation with retry logic. The operation runs
    /// at most `max_retries + 1` times, sleeping `initial_delay * 2^n`
    /// before retry n.
    pub async fn execute<F, Fut, T>(&self, operation: F) -> Result<T, ApiError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let mut attempt: u32 = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(error) => {
                    if !error.retryable || attempt >= self.config.max_retries {
                        if error.retryable {
                            log::warn!(
                                "Max retry attempts reached ({}), giving up",
                                self.config.max_retries
                            );
                        }
                        return Err(error);
                    }

                    let delay = self.config.initial_delay * 2u32.pow(attempt);
                    log::debug!(
                        "Retrying after {:?} (attempt {}): {}",
                        delay,
                        attempt + 1,
                        error
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

/// Convenience wrapper using the default policy (2 retries, 1s/2s)
pub async fn with_retry<F, Fut, T>(operation: F) -> Result<T, ApiError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let executor = RetryExecutor::new(RetryConfig::default());
    executor.execute(operation).await
}
