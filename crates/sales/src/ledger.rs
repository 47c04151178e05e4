use dealership_core::{TransactionId, UnitId};

use crate::transaction::Transaction;

/// Currently-open purchase transactions, in the order they were created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, transaction: Transaction) {
        self.entries.push(transaction);
    }

    pub fn find(&self, id: TransactionId) -> Option<&Transaction> {
        self.entries.iter().find(|t| t.id == id)
    }

    /// Remove and return the transaction with `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.entries.iter().position(|t| t.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> + '_ {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.entries
    }

    pub fn sold_units(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.entries.iter().map(|t| t.purchased_car_unit_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = core::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
