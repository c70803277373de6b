//! Validator role: the terminal hop holding the expected amount table.
//!
//! # Data Flow
//! ```text
//! message_SendMessage(PaymentNotice)
//!     → service.rs (log, delegate)
//!     → rule.rs (compare against table.rs)
//!     → PaymentStatus
//! ```

pub mod rule;
pub mod service;
pub mod table;

use std::sync::Arc;

use crate::config::ValidatorConfig;
use crate::net::rpc::{RpcServer, ServeError};
use crate::protocol::MessageServiceServer;

pub use rule::{evaluate, Verdict};
pub use service::ValidatorService;
pub use table::ExpectedAmountTable;

/// Build the table from config and start serving.
pub async fn spawn(config: &ValidatorConfig) -> Result<RpcServer, ServeError> {
    let table = Arc::new(ExpectedAmountTable::from_config(config));
    if table.is_empty() {
        tracing::warn!("Expected amount table is empty; every notice will be rejected");
    } else {
        tracing::info!(addresses = table.len(), "Expected amount table loaded");
    }

    let service = ValidatorService::new(table);
    RpcServer::start(&config.bind_address, service.into_rpc(), "validator").await
}
