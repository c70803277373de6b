//! Timeout enforcement.
//!
//! # Responsibilities
//! - Wrap downstream calls with a deadline
//! - Cancel the call cleanly when the deadline elapses
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities
//! - Timeout errors are distinct from other errors

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

/// Returned when a call did not finish within its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("deadline of {}s exceeded", .after.as_secs_f64())]
pub struct TimedOut {
    pub after: Duration,
}

/// Run `fut` to completion or fail with [`TimedOut`] after `limit`.
///
/// The future is dropped on expiry, which closes any connection it was using.
pub async fn with_deadline<F>(limit: Duration, fut: F) -> Result<F::Output, TimedOut>
where
    F: Future,
{
    tokio::time::timeout(limit, fut)
        .await
        .map_err(|_| TimedOut { after: limit })
}
