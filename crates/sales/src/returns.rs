//! Return operation: reverse one open transaction.

use chrono::Utc;
use tracing::{debug, info, warn};

use dealership_core::{Aggregate, DomainError, DomainResult};

use crate::confirmation::ConfirmationService;
use crate::state::{DealershipState, ReturnTransaction, SaleCommand, SaleEvent};
use crate::transaction::Transaction;

pub struct ReturnOperation<'c> {
    confirmation: &'c dyn ConfirmationService,
}

impl<'c> ReturnOperation<'c> {
    pub fn new(confirmation: &'c dyn ConfirmationService) -> Self {
        Self { confirmation }
    }

    /// Close transaction `transaction_id` and put its unit back in the pool.
    ///
    /// Unknown ids yield `TransactionNotFound`; nothing changes and the
    /// confirmation step is skipped.
    pub fn run(
        &self,
        state: &mut DealershipState,
        transaction_id: i64,
    ) -> DomainResult<ReturnReceipt> {
        let command = SaleCommand::ReturnTransaction(ReturnTransaction {
            transaction_id,
            occurred_at: Utc::now(),
        });

        let events = state.execute(&command).inspect_err(|err| {
            debug!(transaction_id, %err, "return rejected");
        })?;

        let transaction = events
            .into_iter()
            .find_map(|event| match event {
                SaleEvent::TransactionReturned(e) => Some(e.transaction),
                _ => None,
            })
            .ok_or_else(|| DomainError::invariant("return produced no event"))?;

        info!(
            transaction_id = %transaction.id,
            unit = %transaction.purchased_car_unit_id,
            customer = %transaction.customer_name,
            "unit returned"
        );

        let confirmed = self.confirmation.confirm();
        if !confirmed {
            warn!(transaction_id = %transaction.id, "return not confirmed");
        }

        Ok(ReturnReceipt {
            transaction,
            confirmed,
        })
    }
}

/// Outcome of a return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnReceipt {
    /// The closed transaction.
    pub transaction: Transaction,
    pub confirmed: bool,
}
