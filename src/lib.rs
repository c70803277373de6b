//! Three-hop payment notice relay.
//!
//! # Architecture Overview
//!
//! ```text
//!   HTTP client
//!       │  POST /send {"amount", "address"}
//!       ▼
//!  ┌──────────┐  message_SendMessage  ┌──────────┐  message_SendMessage  ┌───────────┐
//!  │ ingress  │──────────────────────▶│  relay   │──────────────────────▶│ validator │
//!  │  (http)  │◀──────────────────────│          │◀──────────────────────│  (table)  │
//!  └──────────┘    {"status"}         └──────────┘    {"status"}         └───────────┘
//! ```
//!
//! Each role is a separate process started from the same binary. Every hop is
//! stateless; the only shared data is the validator's read-only expected
//! amount table.

// Roles
pub mod http;
pub mod relay;
pub mod validator;

// Shared plumbing
pub mod config;
pub mod net;
pub mod protocol;
pub mod upstream;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;
pub mod resilience;

pub use config::RelayChainConfig;
pub use http::IngressServer;
pub use lifecycle::{Role, Shutdown};
pub use protocol::{PaymentNotice, PaymentStatus};
