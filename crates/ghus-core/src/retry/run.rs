//! Retry loop: run an async operation until success or the policy says stop.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use super::policy::{RetryDecision, RetryPolicy};

/// Runs `op` until it succeeds or the policy's attempt budget is spent.
///
/// Each attempt calls `op` again, so its side effects (e.g. the HTTP request)
/// happen once per attempt. Between failures the task sleeps on the tokio
/// timer; no delay follows the last attempt. The final error is returned
/// unchanged.
pub async fn run_with_retry<T, E, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    let mut attempt = 1u32;
    loop {
        match op().await {
            Ok(value) => {
                if attempt > 1 {
                    tracing::debug!(attempt, "operation succeeded after retry");
                }
                return Ok(value);
            }
            Err(e) => match policy.decide(attempt) {
                RetryDecision::NoRetry => {
                    tracing::warn!(attempt, "giving up: {}", e);
                    return Err(e);
                }
                RetryDecision::RetryAfter(delay) => {
                    tracing::warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "attempt failed, retrying: {}",
                        e
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            },
        }
    }
}

/// Convenience form taking the policy parameters directly.
pub async fn execute_with_retry<T, E, F, Fut>(
    op: F,
    max_attempts: u32,
    base_delay: Duration,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    run_with_retry(&RetryPolicy::new(max_attempts, base_delay), op).await
}
