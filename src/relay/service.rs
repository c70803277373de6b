//! `MessageService` implementation for the relay role.

use std::sync::Arc;

use jsonrpsee::core::{async_trait, RpcResult};
use jsonrpsee::types::ErrorObjectOwned;

use crate::protocol::{error_codes, MessageServiceServer, PaymentNotice, PaymentStatus};
use crate::upstream::{UpstreamClient, UpstreamError};

/// Status text reported when the validator cannot be reached.
pub const CONNECT_FAILED: &str = "error connecting to validator";
/// Status text reported when the call to the validator fails or times out.
pub const FORWARD_FAILED: &str = "error forwarding message";

/// Middle hop: forwards every notice to the validator unchanged.
#[derive(Debug, Clone)]
pub struct RelayService {
    validator: Arc<UpstreamClient>,
}

impl RelayService {
    pub fn new(validator: Arc<UpstreamClient>) -> Self {
        Self { validator }
    }

    /// Forward a notice and hand back the validator's answer as-is.
    pub async fn forward(&self, notice: PaymentNotice) -> Result<PaymentStatus, UpstreamError> {
        tracing::info!(
            amount = %format!("{:.2}", notice.amount),
            address = %notice.address,
            "Received message"
        );

        let address = notice.address.clone();
        self.validator.send(notice).await.inspect_err(|e| {
            tracing::error!(
                address = %address,
                status = failure_status(e),
                error = %e,
                "Forwarding to validator failed"
            );
        })
    }
}

/// Literal status describing a forwarding failure.
pub fn failure_status(err: &UpstreamError) -> &'static str {
    if err.is_unavailable() {
        CONNECT_FAILED
    } else {
        FORWARD_FAILED
    }
}

/// Convert a forwarding failure into the single RPC error the caller sees.
///
/// The message carries the underlying cause; the literal status stays in the
/// relay's own log and in `data`.
pub fn to_rpc_error(err: &UpstreamError) -> ErrorObjectOwned {
    let code = if err.is_unavailable() {
        error_codes::UPSTREAM_UNAVAILABLE
    } else {
        error_codes::UPSTREAM_CALL_FAILED
    };
    ErrorObjectOwned::owned(code, err.to_string(), Some(failure_status(err)))
}

#[async_trait]
impl MessageServiceServer for RelayService {
    async fn send_message(&self, notice: PaymentNotice) -> RpcResult<PaymentStatus> {
        self.forward(notice).await.map_err(|e| to_rpc_error(&e))
    }
}
