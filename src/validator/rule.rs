//! Payment validation rule.
//!
//! An address is paid when the amount received is strictly greater than the
//! expected amount. Unknown addresses and insufficient amounts are told apart
//! internally but produce the same status text on the wire.

use crate::protocol::PaymentStatus;
use crate::validator::table::ExpectedAmountTable;

pub const VALID_PREFIX: &str = "payment is valid for address: ";
pub const REJECTED_PREFIX: &str =
    "no address found or amount is less than expected skipping for address: ";

/// Result of checking one notice against the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    /// Amount exceeds the expected amount.
    Valid { expected: f64 },
    /// Amount is at or below the expected amount (or not a number).
    Insufficient { expected: f64 },
    /// Address is not in the table.
    UnknownAddress,
}

impl Verdict {
    /// Status text returned to the caller.
    pub fn status(&self, address: &str) -> PaymentStatus {
        match self {
            Verdict::Valid { .. } => PaymentStatus::new(format!("{VALID_PREFIX}{address}")),
            Verdict::Insufficient { .. } | Verdict::UnknownAddress => {
                PaymentStatus::new(format!("{REJECTED_PREFIX}{address}"))
            }
        }
    }
}

/// Check `amount` for `address`. Pure function of its inputs.
pub fn evaluate(table: &ExpectedAmountTable, address: &str, amount: f64) -> Verdict {
    match table.expected(address) {
        None => Verdict::UnknownAddress,
        Some(expected) if amount > expected => Verdict::Valid { expected },
        Some(expected) => Verdict::Insufficient { expected },
    }
}
