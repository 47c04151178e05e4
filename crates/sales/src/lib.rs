//! Sales domain module.
//!
//! Owns the in-memory bookkeeping of the dealership: the transaction ledger,
//! the transaction id counter, and the purchase/return operations that move
//! car units between the inventory pool and the ledger. No console or file
//! IO happens here; outcomes are returned to the caller and logged.

pub mod confirmation;
pub mod ledger;
pub mod purchase;
pub mod returns;
pub mod state;
pub mod transaction;

pub use confirmation::{ConfirmationService, DefaultConfirmationService};
pub use ledger::Ledger;
pub use purchase::{PurchaseBatch, PurchaseOperation, PurchaseReceipt};
pub use returns::{ReturnOperation, ReturnReceipt};
pub use state::{
    DEFAULT_FLEET_SIZE, DealershipState, ReturnTransaction, SaleCommand, SaleEvent, SellUnit,
    TransactionReturned, UnitSold,
};
pub use transaction::{Transaction, TransactionIdCounter};
