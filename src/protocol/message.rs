//! Payment message types carried through the chain.

use serde::{Deserialize, Serialize};

/// An amount/address pair announced by a caller.
///
/// Built once by the ingress from the HTTP body and passed unchanged to the
/// relay and the validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentNotice {
    /// Amount paid.
    pub amount: f64,
    /// Destination address the payment was made to.
    pub address: String,
}

impl PaymentNotice {
    pub fn new(amount: f64, address: impl Into<String>) -> Self {
        Self {
            amount,
            address: address.into(),
        }
    }
}

/// Outcome text produced by the validator and returned verbatim to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentStatus {
    pub status: String,
}

impl PaymentStatus {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}
