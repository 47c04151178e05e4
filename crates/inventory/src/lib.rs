//! Inventory domain module.
//!
//! Read-only catalog of car models plus the mutable pool of numbered car
//! units still available for sale. Pure domain logic (no IO).

pub mod catalog;
pub mod pool;

pub use catalog::{CarModel, Catalog};
pub use pool::InventoryPool;
