//! HTTP protocol handling for the ingress role.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → send handler → relay
//!     → response.rs (error mapping) or JSON status
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{request_id, MakeRequestUuidV4, X_REQUEST_ID};
pub use response::IngressError;
pub use server::IngressServer;
