//! Retry and backoff policy.
//!
//! Every failed attempt is retried (no error classification) until the
//! attempt budget is spent; the delay before the next attempt doubles each
//! time. The search client and the CLI share this policy.

mod policy;
mod run;

pub use policy::{RetryDecision, RetryPolicy};
pub use run::{execute_with_retry, run_with_retry};
