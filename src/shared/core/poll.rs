// Eventual-consistency verification: re-run a check until it passes or a
// deadline expires. The check re-reads whatever state it depends on (for
// example the event log) on every attempt, so new data is always observed.

use std::future::Future;

use anyhow::anyhow;
use tokio::time::{Instant, sleep, timeout};

/// Per-call polling configuration. No state is retained between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSpec {
    pub interval: std::time::Duration,
    pub timeout: std::time::Duration,
}

impl PollSpec {
    pub const fn new(interval: std::time::Duration, timeout: std::time::Duration) -> Self {
        Self { interval, timeout }
    }

    pub const fn from_millis(interval_ms: u64, timeout_ms: u64) -> Self {
        Self {
            interval: std::time::Duration::from_millis(interval_ms),
            timeout: std::time::Duration::from_millis(timeout_ms),
        }
    }
}

/// Invokes `check` until it succeeds or `spec.timeout` elapses.
///
/// Attempts are strictly sequential: a new attempt never starts before the
/// previous one has fully resolved, and `check` is never invoked after the
/// deadline has passed. On success the call returns immediately without
/// waiting out the remaining interval. On timeout the error of the *last*
/// failed attempt is returned, so the caller sees what failed to converge
/// rather than a generic timeout message.
///
/// Each attempt is raced against the remaining budget, so a check that hangs
/// cannot push the call past its deadline.
pub async fn verify_eventually<F, Fut>(mut check: F, spec: PollSpec) -> anyhow::Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = anyhow::Result<()>>,
{
    let deadline = Instant::now() + spec.timeout;
    let mut last_failure: Option<anyhow::Error> = None;

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match timeout(remaining, check()).await {
            Ok(Ok(())) => return Ok(()),
            Ok(Err(failure)) => {
                if Instant::now() >= deadline {
                    return Err(failure);
                }
                last_failure = Some(failure);
            }
            // The attempt itself outlived the budget. Surface the last real
            // failure if there was one; a synthetic error only exists when
            // the very first attempt hung.
            Err(_) => {
                return Err(last_failure.unwrap_or_else(|| {
                    anyhow!("check did not complete within {:?}", spec.timeout)
                }));
            }
        }

        sleep(spec.interval.min(deadline.saturating_duration_since(Instant::now()))).await;
        if Instant::now() >= deadline {
            // Woke up at the deadline: report the failure we already have
            // instead of starting an attempt past the budget.
            return Err(last_failure.unwrap_or_else(|| {
                anyhow!("check did not complete within {:?}", spec.timeout)
            }));
        }
    }
}
