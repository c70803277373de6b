//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Call to next hop:
//!     → timeouts.rs (enforce request deadline)
//!     → failure is terminal for the request
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every external call has a deadline
//! - No retries: a notice is forwarded at most once per inbound request

pub mod timeouts;

pub use timeouts::{with_deadline, TimedOut};
