//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection (relay / validator)
//!     → rpc.rs (jsonrpsee server, one task per connection)
//!     → MessageService implementation
//! ```
//!
//! # Design Decisions
//! - Connections are handled by the server's own task-per-connection model
//! - Each server is stopped through its handle for graceful shutdown

pub mod rpc;

pub use rpc::{RpcServer, ServeError};
