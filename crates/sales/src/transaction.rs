use serde::{Deserialize, Serialize};

use dealership_core::{TransactionId, UnitId};

/// A completed purchase of one car unit. Held exclusively by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub customer_name: String,
    pub purchased_car_unit_id: UnitId,
}

/// Monotonic transaction id source.
///
/// Starts at 0; the first issued id is 1. Ids of returned transactions are
/// retired, never handed out again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionIdCounter {
    last: u64,
}

impl TransactionIdCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next created transaction will receive.
    pub fn peek_next(&self) -> TransactionId {
        TransactionId::new(self.last + 1)
    }

    /// Number of ids issued so far (equals the last issued id).
    pub fn issued(&self) -> u64 {
        self.last
    }

    /// Mark `id` as issued. The counter never moves backwards.
    pub fn record(&mut self, id: TransactionId) {
        self.last = self.last.max(id.get());
    }
}
