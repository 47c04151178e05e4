//! `dealership-console` — the interactive front end.
//!
//! Owns all presentation: prompts, menus, retry loops and the final export.
//! The domain crates never touch stdin/stdout; everything here is generic
//! over `BufRead`/`Write` so sessions can be scripted in tests.

pub mod app;
pub mod config;
pub mod login;
pub mod prompt;
pub mod session;

pub use app::{Outcome, run};
pub use config::Args;
pub use login::{Welcome, authenticate};
pub use prompt::Prompter;
pub use session::Session;
