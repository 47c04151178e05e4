//! Purchase operation: sell one or more units of a selected model.
//!
//! A batch is opened with [`PurchaseOperation::begin`], filled slot by slot
//! with [`PurchaseBatch::sell`], and closed with [`PurchaseBatch::finish`].
//! Each accepted unit is committed immediately; a rejected unit leaves the
//! dealership untouched and the caller may retry the same slot.

use chrono::Utc;
use tracing::{debug, info, warn};

use dealership_core::{Aggregate, DomainError, DomainResult};
use dealership_inventory::CarModel;

use crate::confirmation::ConfirmationService;
use crate::state::{DealershipState, SaleCommand, SaleEvent, SellUnit};
use crate::transaction::Transaction;

/// Entry point for purchase batches.
pub struct PurchaseOperation<'c> {
    confirmation: &'c dyn ConfirmationService,
}

impl<'c> PurchaseOperation<'c> {
    pub fn new(confirmation: &'c dyn ConfirmationService) -> Self {
        Self { confirmation }
    }

    /// Validate a requested batch size against the units still available.
    pub fn batch_size(state: &DealershipState, count: i64) -> DomainResult<usize> {
        usize::try_from(count)
            .ok()
            .filter(|n| (1..=state.pool().len()).contains(n))
            .ok_or(DomainError::InvalidBatchSize(count))
    }

    /// Open a batch of `count` units of `model`.
    ///
    /// `count` must be positive and no larger than the number of units still
    /// available, otherwise `InvalidBatchSize` is returned and nothing changes.
    pub fn begin<'s>(
        &self,
        state: &'s mut DealershipState,
        model: &CarModel,
        count: i64,
    ) -> DomainResult<PurchaseBatch<'s, 'c>> {
        let count = Self::batch_size(state, count)?;

        debug!(model = %model.name, count, "purchase batch opened");

        Ok(PurchaseBatch {
            state,
            confirmation: self.confirmation,
            model: model.clone(),
            count,
            created: Vec::with_capacity(count),
        })
    }
}

/// An open purchase batch.
pub struct PurchaseBatch<'s, 'c> {
    state: &'s mut DealershipState,
    confirmation: &'c dyn ConfirmationService,
    model: CarModel,
    count: usize,
    created: Vec<Transaction>,
}

impl PurchaseBatch<'_, '_> {
    pub fn accepted(&self) -> &[Transaction] {
        &self.created
    }

    pub fn remaining(&self) -> usize {
        self.count - self.created.len()
    }

    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }

    /// 1-based number of the slot the next `sell` fills.
    pub fn next_slot(&self) -> usize {
        self.created.len() + 1
    }

    /// Read access to the dealership while the batch is open.
    pub fn state(&self) -> &DealershipState {
        &*self.state
    }

    /// Sell `requested_unit` to `customer_name`, filling the next slot.
    pub fn sell(
        &mut self,
        customer_name: impl Into<String>,
        requested_unit: i64,
    ) -> DomainResult<&Transaction> {
        if self.is_complete() {
            return Err(DomainError::validation("batch already complete"));
        }

        let command = SaleCommand::SellUnit(SellUnit {
            model: self.model.id,
            customer_name: customer_name.into(),
            requested_unit,
            occurred_at: Utc::now(),
        });

        let events = self.state.execute(&command).inspect_err(|err| {
            debug!(slot = self.created.len() + 1, requested_unit, %err, "unit rejected");
        })?;

        for event in events {
            if let SaleEvent::UnitSold(sold) = event {
                info!(
                    transaction_id = %sold.transaction.id,
                    unit = %sold.transaction.purchased_car_unit_id,
                    customer = %sold.transaction.customer_name,
                    model = %self.model.name,
                    "unit sold"
                );
                self.created.push(sold.transaction);
            }
        }

        self.created
            .last()
            .ok_or_else(|| DomainError::invariant("sale produced no transaction"))
    }

    /// Close the batch and run the confirmation step once.
    pub fn finish(self) -> PurchaseReceipt {
        if !self.is_complete() {
            warn!(
                accepted = self.created.len(),
                requested = self.count,
                "purchase batch closed early; accepted units stay sold"
            );
        }

        let confirmed = self.confirmation.confirm();
        if !confirmed {
            warn!(transactions = self.created.len(), "purchase batch not confirmed");
        }

        PurchaseReceipt {
            model: self.model,
            transactions: self.created,
            confirmed,
        }
    }
}

/// Outcome of a purchase batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseReceipt {
    pub model: CarModel,
    /// Transactions created by this batch, in slot order.
    pub transactions: Vec<Transaction>,
    /// Advisory result of the confirmation step.
    pub confirmed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use dealership_core::UnitId;
    use dealership_inventory::Catalog;

    struct Counting {
        calls: Cell<usize>,
        answer: bool,
    }

    impl Counting {
        fn answering(answer: bool) -> Self {
            Self {
                calls: Cell::new(0),
                answer,
            }
        }
    }

    impl ConfirmationService for Counting {
        fn confirm(&self) -> bool {
            self.calls.set(self.calls.get() + 1);
            self.answer
        }
    }

    fn sedan() -> CarModel {
        Catalog::standard().find_model(1).cloned().unwrap()
    }

    fn pool_ids(state: &DealershipState) -> Vec<u32> {
        state.pool().iter().map(UnitId::get).collect()
    }

    #[test]
    fn batch_of_two_gets_consecutive_ids() {
        let confirm = Counting::answering(true);
        let op = PurchaseOperation::new(&confirm);
        let mut state = DealershipState::new(5);

        let mut batch = op.begin(&mut state, &sedan(), 2).unwrap();
        batch.sell("Alice", 2).unwrap();
        batch.sell("Bob", 4).unwrap();
        let receipt = batch.finish();

        let ids: Vec<u64> = receipt.transactions.iter().map(|t| t.id.get()).collect();
        assert_eq!(ids, [1, 2]);
        assert!(receipt.confirmed);
        assert_eq!(receipt.model.name, "Sedan");
        assert_eq!(pool_ids(&state), [1, 3, 5]);
        assert_eq!(state.ledger().len(), 2);
    }

    #[test]
    fn confirmation_runs_once_per_batch() {
        let confirm = Counting::answering(true);
        let op = PurchaseOperation::new(&confirm);
        let mut state = DealershipState::new(10);

        let mut batch = op.begin(&mut state, &sedan(), 3).unwrap();
        for unit in [1, 2, 3] {
            batch.sell("Dana", unit).unwrap();
        }
        assert_eq!(confirm.calls.get(), 0);
        batch.finish();

        assert_eq!(confirm.calls.get(), 1);
    }

    #[test]
    fn rejected_slot_can_be_retried_without_losing_accepted_units() {
        let confirm = Counting::answering(true);
        let op = PurchaseOperation::new(&confirm);
        let mut state = DealershipState::new(5);

        let mut batch = op.begin(&mut state, &sedan(), 2).unwrap();
        batch.sell("Alice", 1).unwrap();
        assert_eq!(batch.next_slot(), 2);

        assert_eq!(batch.sell("Bob", 1).unwrap_err(), DomainError::InvalidUnitSelection(1));
        assert_eq!(batch.sell("Bob", 9).unwrap_err(), DomainError::InvalidUnitSelection(9));
        assert_eq!(batch.next_slot(), 2);
        assert_eq!(batch.state().counter().issued(), 1);

        let accepted = batch.sell("Bob", 5).unwrap();
        assert_eq!(accepted.id.get(), 2);
        let customers: Vec<&str> = batch
            .accepted()
            .iter()
            .map(|t| t.customer_name.as_str())
            .collect();
        assert_eq!(customers, ["Alice", "Bob"]);

        let receipt = batch.finish();
        assert_eq!(receipt.transactions.len(), 2);
        assert_eq!(pool_ids(&state), [2, 3, 4]);
    }

    #[test]
    fn declined_confirmation_keeps_transactions() {
        let confirm = Counting::answering(false);
        let op = PurchaseOperation::new(&confirm);
        let mut state = DealershipState::new(5);

        let mut batch = op.begin(&mut state, &sedan(), 1).unwrap();
        batch.sell("Eve", 3).unwrap();
        let receipt = batch.finish();

        assert!(!receipt.confirmed);
        assert_eq!(receipt.transactions.len(), 1);
        assert_eq!(state.ledger().len(), 1);
        assert!(!state.pool().contains(UnitId::new(3)));
    }

    #[test]
    fn invalid_batch_sizes_are_rejected_before_anything_happens() {
        let confirm = Counting::answering(true);
        let op = PurchaseOperation::new(&confirm);
        let mut state = DealershipState::new(3);
        let model = sedan();

        for count in [0, -1, 4] {
            let err = op.begin(&mut state, &model, count).err();
            assert_eq!(err, Some(DomainError::InvalidBatchSize(count)));
        }
        assert_eq!(state, DealershipState::new(3));
        assert_eq!(confirm.calls.get(), 0);
    }

    #[test]
    fn selling_past_the_batch_size_is_refused() {
        let confirm = Counting::answering(true);
        let op = PurchaseOperation::new(&confirm);
        let mut state = DealershipState::new(5);

        let mut batch = op.begin(&mut state, &sedan(), 1).unwrap();
        batch.sell("Fay", 1).unwrap();
        assert!(batch.is_complete());
        assert!(matches!(batch.sell("Gus", 2), Err(DomainError::Validation(_))));
        batch.finish();

        assert_eq!(state.ledger().len(), 1);
    }

    #[test]
    fn abandoned_batch_still_confirms_once() {
        let confirm = Counting::answering(true);
        let op = PurchaseOperation::new(&confirm);
        let mut state = DealershipState::new(5);

        let mut batch = op.begin(&mut state, &sedan(), 3).unwrap();
        batch.sell("Hal", 4).unwrap();
        let receipt = batch.finish();

        assert_eq!(receipt.transactions.len(), 1);
        assert_eq!(confirm.calls.get(), 1);
    }
}
