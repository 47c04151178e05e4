//! `dealership-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no console, no files).

pub mod aggregate;
pub mod error;
pub mod event;
pub mod id;

pub use aggregate::Aggregate;
pub use error::{DomainError, DomainResult};
pub use event::Event;
pub use id::{ModelId, TransactionId, UnitId};
