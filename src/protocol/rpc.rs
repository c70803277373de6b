//! The `MessageService` RPC definition.
//!
//! The `rpc` macro generates `MessageServiceServer` (implemented by the relay
//! and the validator) and `MessageServiceClient` (used by the ingress and the
//! relay). The wire method name is `message_SendMessage`.

use jsonrpsee::core::RpcResult;
use jsonrpsee::proc_macros::rpc;

use crate::protocol::message::{PaymentNotice, PaymentStatus};

#[rpc(server, client, namespace = "message")]
pub trait MessageService {
    /// Submit a payment notice and receive its status.
    #[method(name = "SendMessage")]
    async fn send_message(&self, notice: PaymentNotice) -> RpcResult<PaymentStatus>;
}

/// JSON-RPC error codes used between hops.
pub mod error_codes {
    /// The next hop could not be reached.
    pub const UPSTREAM_UNAVAILABLE: i32 = -32001;
    /// The next hop was reached but the call failed or timed out.
    pub const UPSTREAM_CALL_FAILED: i32 = -32002;
}
