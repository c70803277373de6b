//! Shared message schema for every hop of the relay chain.
//!
//! # Data Flow
//! ```text
//! HTTP JSON body
//!     → PaymentNotice (ingress)
//!     → message_SendMessage (relay)
//!     → message_SendMessage (validator)
//!     → PaymentStatus
//!     → relay → ingress → HTTP JSON body
//! ```
//!
//! # Design Decisions
//! - One RPC definition compiled into every role, so the three services can
//!   never disagree on field names or types
//! - Failures travel as JSON-RPC error objects, never as a status body

pub mod message;
pub mod rpc;

pub use message::{PaymentNotice, PaymentStatus};
pub use rpc::{MessageServiceClient, MessageServiceServer, error_codes};
