//! Contracts for the two external services the dialogs talk to.
//!
//! Both traits return plain futures and carry no `Send` bound: the dialogs are
//! driven from a single cooperative task, the same way actix-web runs a handler.

use std::fmt;
use std::future::Future;

use crate::models::role::Role;
use crate::models::user::{NewUser, User, UserUpdate};

/// Source of assignable roles.
pub trait RoleDirectory {
    /// Fetch every assignable role. Order is significant and must be stable
    /// for a given backend state.
    fn get_all_roles(&self) -> impl Future<Output = Result<Vec<Role>, DirectoryError>>;
}

/// Persistence for user records.
pub trait UserStore {
    fn create(&self, user: NewUser) -> impl Future<Output = Result<(), StoreError>>;

    fn update(&self, id: &str, changes: UserUpdate) -> impl Future<Output = Result<(), StoreError>>;

    fn find_by_id(&self, id: &str) -> impl Future<Output = Result<Option<User>, StoreError>>;
}

/// A failed role fetch. Never shown to the end user, only logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryError(pub String);

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Role directory error: {}", self.0)
    }
}

impl From<sqlx::Error> for DirectoryError {
    fn from(e: sqlx::Error) -> Self {
        DirectoryError(e.to_string())
    }
}

/// A failed create/update. `message` is what the dialog shows, when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreError {
    pub message: Option<String>,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        StoreError { message: Some(message.into()) }
    }

    /// A failure that carries no human-readable message.
    pub fn silent() -> Self {
        StoreError { message: None }
    }

    /// The message to show, or `fallback` when the store gave none.
    pub fn message_or(&self, fallback: &str) -> String {
        match self.message.as_deref() {
            Some(m) if !m.trim().is_empty() => m.to_string(),
            _ => fallback.to_string(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(m) => write!(f, "User store error: {m}"),
            None => write!(f, "User store error"),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        let unique = e
            .as_database_error()
            .is_some_and(|db| db.is_unique_violation());
        if unique {
            StoreError::new("Username already exists")
        } else {
            log::error!("User store query failed: {e}");
            StoreError::silent()
        }
    }
}
