//! Relay role: forwards notices from the ingress to the validator.
//!
//! # Data Flow
//! ```text
//! message_SendMessage(PaymentNotice)
//!     → service.rs (log)
//!     → UpstreamClient (pooled, deadline-bounded)
//!     → validator
//!     → PaymentStatus unchanged, or one RPC error object
//! ```
//!
//! The relay performs no validation and keeps no state between calls.

pub mod service;

use std::sync::Arc;
use std::time::Duration;

use crate::config::RelayConfig;
use crate::net::rpc::{RpcServer, ServeError};
use crate::protocol::MessageServiceServer;
use crate::upstream::UpstreamClient;

pub use service::{to_rpc_error, RelayService, CONNECT_FAILED, FORWARD_FAILED};

/// Build the validator client and start serving.
pub async fn spawn(config: &RelayConfig) -> Result<RpcServer, ServeError> {
    let validator = UpstreamClient::new(
        &config.validator_url,
        Duration::from_secs(config.upstream_timeout_secs),
    )?;

    tracing::info!(
        validator = %config.validator_url,
        timeout_secs = config.upstream_timeout_secs,
        "Relay forwarding to validator"
    );

    let service = RelayService::new(Arc::new(validator));
    RpcServer::start(&config.bind_address, service.into_rpc(), "relay").await
}
