//! In-memory credential directory.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{info, warn};

use crate::Operator;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("username '{0}' already exists")]
    UsernameTaken(String),

    #[error("username cannot be empty")]
    EmptyUsername,
}

/// Username → password map.
///
/// Passwords are kept in plain text; this directory never leaves the process.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: HashMap<String, String>,
}

impl UserDirectory {
    /// Directory without any accounts.
    pub fn empty() -> Self {
        Self {
            users: HashMap::new(),
        }
    }

    /// Directory pre-registered with the `admin` and `john` accounts.
    pub fn with_defaults() -> Self {
        let mut directory = Self::empty();
        directory.users.insert("admin".to_string(), "password".to_string());
        directory.users.insert("john".to_string(), "doe".to_string());
        directory
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn login(&self, username: &str, password: &str) -> Result<Operator, AuthError> {
        match self.users.get(username) {
            Some(stored) if stored == password => {
                info!(username, "operator logged in");
                Ok(Operator::new(username))
            }
            _ => {
                warn!(username, "login failed");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Register a new account. Existing accounts are never overwritten.
    pub fn sign_up(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        if username.trim().is_empty() {
            return Err(AuthError::EmptyUsername);
        }
        if self.contains(username) {
            return Err(AuthError::UsernameTaken(username.to_string()));
        }
        self.users.insert(username.to_string(), password.to_string());
        info!(username, "operator registered");
        Ok(())
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_accounts_can_log_in() {
        let directory = UserDirectory::with_defaults();
        assert_eq!(directory.login("admin", "password").unwrap().username(), "admin");
        assert_eq!(directory.login("john", "doe").unwrap().to_string(), "john");
    }

    #[test]
    fn wrong_password_or_unknown_user_is_rejected() {
        let directory = UserDirectory::with_defaults();
        assert_eq!(
            directory.login("admin", "Password"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(directory.login("mallory", "x"), Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn sign_up_then_login() {
        let mut directory = UserDirectory::with_defaults();
        directory.sign_up("kim", "s3cret").unwrap();
        assert_eq!(directory.len(), 3);
        assert!(directory.login("kim", "s3cret").is_ok());
    }

    #[test]
    fn sign_up_never_overwrites_existing_accounts() {
        let mut directory = UserDirectory::with_defaults();
        assert_eq!(
            directory.sign_up("admin", "hijack"),
            Err(AuthError::UsernameTaken("admin".to_string()))
        );
        assert!(directory.login("admin", "password").is_ok());
        assert_eq!(directory.sign_up("  ", "x"), Err(AuthError::EmptyUsername));
    }
}
