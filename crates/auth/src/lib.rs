//! `dealership-auth` — operator authentication for the dealership console.
//!
//! This crate is intentionally decoupled from the console and from storage:
//! credentials live in memory for the duration of one session.

pub mod operator;
pub mod user;

pub use operator::Operator;
pub use user::{AuthError, UserDirectory};
