//! `MessageService` implementation for the validator role.

use std::sync::Arc;

use jsonrpsee::core::{async_trait, RpcResult};

use crate::protocol::{MessageServiceServer, PaymentNotice, PaymentStatus};
use crate::validator::rule::{evaluate, Verdict};
use crate::validator::table::ExpectedAmountTable;

/// Terminal hop: answers every notice from the expected amount table.
#[derive(Debug, Clone)]
pub struct ValidatorService {
    table: Arc<ExpectedAmountTable>,
}

impl ValidatorService {
    pub fn new(table: Arc<ExpectedAmountTable>) -> Self {
        Self { table }
    }

    /// Validate a notice. Never fails; the status text is the only signal.
    pub fn check(&self, notice: &PaymentNotice) -> PaymentStatus {
        let verdict = evaluate(&self.table, &notice.address, notice.amount);
        match verdict {
            Verdict::Valid { expected } => tracing::info!(
                address = %notice.address,
                amount = notice.amount,
                expected,
                "Payment valid: received amount is greater than expected"
            ),
            Verdict::Insufficient { expected } => tracing::info!(
                address = %notice.address,
                amount = notice.amount,
                expected,
                "Amount is not greater than expected"
            ),
            Verdict::UnknownAddress => tracing::info!(
                address = %notice.address,
                amount = notice.amount,
                "Address not found"
            ),
        }
        verdict.status(&notice.address)
    }
}

#[async_trait]
impl MessageServiceServer for ValidatorService {
    async fn send_message(&self, notice: PaymentNotice) -> RpcResult<PaymentStatus> {
        Ok(self.check(&notice))
    }
}
