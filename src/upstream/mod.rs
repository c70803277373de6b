//! Outbound RPC calls to the next hop.
//!
//! # Data Flow
//! ```text
//! PaymentNotice
//!     → client.rs (pooled HTTP connection, deadline)
//!     → next hop's message_SendMessage
//!     → Result<PaymentStatus, UpstreamError>
//! ```
//!
//! # Design Decisions
//! - One client per downstream dependency, built at startup and shared for the
//!   process lifetime; connections are reused across requests
//! - A single result type: callers never see a status body and an error at
//!   the same time

pub mod client;
pub mod error;

pub use client::UpstreamClient;
pub use error::UpstreamError;
