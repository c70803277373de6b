//! Pooled RPC client for one downstream hop.
//!
//! # Responsibilities
//! - Hold one HTTP connection pool per downstream dependency
//! - Bound every call with the configured deadline
//! - Classify failures into [`UpstreamError`]

use std::time::Duration;

use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};

use crate::protocol::{MessageServiceClient, PaymentNotice, PaymentStatus};
use crate::resilience::with_deadline;
use crate::upstream::error::UpstreamError;

/// Client for the `MessageService` of the next hop.
///
/// Cheap to share behind an `Arc`; the inner HTTP client reuses connections
/// across calls.
pub struct UpstreamClient {
    /// Endpoint URL, kept for logs and errors.
    target: String,
    /// Deadline applied to every call.
    timeout: Duration,
    inner: HttpClient,
}

impl UpstreamClient {
    /// Build a client for `target`. No connection is made until the first call.
    pub fn new(target: &str, timeout: Duration) -> Result<Self, UpstreamError> {
        let inner = HttpClientBuilder::default()
            .request_timeout(timeout)
            .build(target)
            .map_err(|e| UpstreamError::InvalidTarget {
                target: target.to_string(),
                cause: e.to_string(),
            })?;

        tracing::debug!(
            target_url = %target,
            timeout_secs = timeout.as_secs_f64(),
            "Upstream client ready"
        );

        Ok(Self {
            target: target.to_string(),
            timeout,
            inner,
        })
    }

    /// Forward a notice and wait for the next hop's status.
    pub async fn send(&self, notice: PaymentNotice) -> Result<PaymentStatus, UpstreamError> {
        match with_deadline(self.timeout, self.inner.send_message(notice)).await {
            Ok(Ok(status)) => Ok(status),
            Ok(Err(e)) => Err(UpstreamError::from_client(&self.target, e, self.timeout)),
            Err(elapsed) => Err(UpstreamError::Timeout {
                target: self.target.clone(),
                source: elapsed,
            }),
        }
    }
}

impl std::fmt::Debug for UpstreamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamClient")
            .field("target", &self.target)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rejects_malformed_target() {
        let err = UpstreamClient::new("not a url", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, UpstreamError::InvalidTarget { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_target() {
        // Port 1 on loopback is never listening in test environments.
        let client = UpstreamClient::new("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();
        let err = client
            .send(PaymentNotice::new(60.0, "abc123"))
            .await
            .unwrap_err();
        assert!(err.is_unavailable(), "unexpected error: {err:?}");
    }
}
