//! Observability subsystem.
//!
//! Line-based structured logging only. Every role logs the notices it handles
//! and every failure at the point where it is detected, with `address`,
//! `amount`, `request_id` and `error` as fields.

pub mod logging;

pub use logging::init_logging;
