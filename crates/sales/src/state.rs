//! Dealership state aggregate: inventory pool, ledger and id counter.
//!
//! Purchase and return flows mutate the dealership only through
//! `SaleCommand`s. `handle` decides without touching state, so a rejected
//! command leaves pool, ledger and counter exactly as they were.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dealership_core::{Aggregate, DomainError, DomainResult, Event, ModelId, TransactionId, UnitId};
use dealership_inventory::InventoryPool;

use crate::ledger::Ledger;
use crate::transaction::{Transaction, TransactionIdCounter};

/// Number of numbered units on the lot when nothing else is configured.
pub const DEFAULT_FLEET_SIZE: u32 = 50;

/// Aggregate root: everything the purchase and return operations share.
///
/// # Invariants
/// - Every unit of the fleet `1..=fleet_size` is either in the pool or sold
///   through exactly one open transaction, never both.
/// - Transaction ids are strictly increasing and never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealershipState {
    pool: InventoryPool,
    ledger: Ledger,
    counter: TransactionIdCounter,
    fleet_size: u32,
    version: u64,
}

impl DealershipState {
    pub fn new(fleet_size: u32) -> Self {
        Self {
            pool: InventoryPool::with_fleet(fleet_size),
            ledger: Ledger::new(),
            counter: TransactionIdCounter::new(),
            fleet_size,
            version: 0,
        }
    }

    pub fn pool(&self) -> &InventoryPool {
        &self.pool
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn counter(&self) -> TransactionIdCounter {
        self.counter
    }

    pub fn fleet_size(&self) -> u32 {
        self.fleet_size
    }

    /// Verify the available/sold partition of the fleet.
    pub fn audit(&self) -> DomainResult<()> {
        let mut sold = BTreeSet::new();
        let mut ids = BTreeSet::new();
        let next = self.counter.peek_next();

        for transaction in &self.ledger {
            let unit = transaction.purchased_car_unit_id;
            if !sold.insert(unit) {
                return Err(DomainError::invariant(format!("unit {unit} sold twice")));
            }
            if self.pool.contains(unit) {
                return Err(DomainError::invariant(format!(
                    "unit {unit} is both sold and available"
                )));
            }
            if !ids.insert(transaction.id) {
                return Err(DomainError::invariant(format!(
                    "transaction id {} appears twice",
                    transaction.id
                )));
            }
            if transaction.id >= next {
                return Err(DomainError::invariant(format!(
                    "transaction id {} was never issued",
                    transaction.id
                )));
            }
        }

        let in_fleet = |unit: &UnitId| (1..=self.fleet_size).contains(&unit.get());
        if let Some(stray) = self.pool.iter().chain(sold.iter().copied()).find(|u| !in_fleet(u)) {
            return Err(DomainError::invariant(format!("unit {stray} is outside the fleet")));
        }

        let accounted = self.pool.len() + sold.len();
        if accounted != self.fleet_size as usize {
            return Err(DomainError::invariant(format!(
                "{accounted} units accounted for, fleet has {}",
                self.fleet_size
            )));
        }

        Ok(())
    }
}

impl Default for DealershipState {
    fn default() -> Self {
        Self::new(DEFAULT_FLEET_SIZE)
    }
}

/// Command: SellUnit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellUnit {
    pub model: ModelId,
    pub customer_name: String,
    /// Raw unit id as requested; validated against the pool.
    pub requested_unit: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ReturnTransaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnTransaction {
    pub transaction_id: i64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaleCommand {
    SellUnit(SellUnit),
    ReturnTransaction(ReturnTransaction),
}

/// Event: UnitSold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSold {
    pub transaction: Transaction,
    pub model: ModelId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: TransactionReturned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReturned {
    pub transaction: Transaction,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaleEvent {
    UnitSold(UnitSold),
    TransactionReturned(TransactionReturned),
}

impl Event for SaleEvent {
    fn event_type(&self) -> &'static str {
        match self {
            SaleEvent::UnitSold(_) => "sales.unit.sold",
            SaleEvent::TransactionReturned(_) => "sales.transaction.returned",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            SaleEvent::UnitSold(e) => e.occurred_at,
            SaleEvent::TransactionReturned(e) => e.occurred_at,
        }
    }
}

impl Aggregate for DealershipState {
    type Command = SaleCommand;
    type Event = SaleEvent;
    type Error = DomainError;

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            SaleEvent::UnitSold(e) => {
                let unit = e.transaction.purchased_car_unit_id;
                let taken = self.pool.take(unit);
                debug_assert!(taken.is_ok(), "{taken:?}");
                self.counter.record(e.transaction.id);
                self.ledger.push(e.transaction.clone());
            }
            SaleEvent::TransactionReturned(e) => {
                if let Some(closed) = self.ledger.remove(e.transaction.id) {
                    let released = self.pool.release(closed.purchased_car_unit_id);
                    debug_assert!(released.is_ok(), "{released:?}");
                }
            }
        }

        self.version += 1;
        debug_assert_eq!(self.audit(), Ok(()));
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            SaleCommand::SellUnit(cmd) => self.handle_sell(cmd),
            SaleCommand::ReturnTransaction(cmd) => self.handle_return(cmd),
        }
    }
}

impl DealershipState {
    fn handle_sell(&self, cmd: &SellUnit) -> DomainResult<Vec<SaleEvent>> {
        let unit = self.pool.available(cmd.requested_unit)?;

        Ok(vec![SaleEvent::UnitSold(UnitSold {
            transaction: Transaction {
                id: self.counter.peek_next(),
                customer_name: cmd.customer_name.clone(),
                purchased_car_unit_id: unit,
            },
            model: cmd.model,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_return(&self, cmd: &ReturnTransaction) -> DomainResult<Vec<SaleEvent>> {
        let transaction = TransactionId::from_raw(cmd.transaction_id)
            .and_then(|id| self.ledger.find(id))
            .ok_or(DomainError::TransactionNotFound(cmd.transaction_id))?;

        Ok(vec![SaleEvent::TransactionReturned(TransactionReturned {
            transaction: transaction.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }
}
