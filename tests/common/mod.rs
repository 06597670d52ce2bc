//! Shared test infrastructure: in-memory collaborators and fixtures.
//!
//! - `FakeDirectory` - role directory returning a canned result, counting calls
//! - `FakeStore` - user store recording every create/update, optionally failing

#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use userdesk::dialogs::{DirectoryError, RoleDirectory, StoreError, UserStore};
use userdesk::models::role::Role;
use userdesk::models::user::{NewUser, User, UserUpdate};

// ============================================================================
// FIXTURES
// ============================================================================

pub const ADMIN_ROLE_ID: &str = "1";
pub const USER_ROLE_ID: &str = "2";

/// `[{id:"1",name:"Admin"}, {id:"2",name:"User"}]`
pub fn admin_and_user_roles() -> Vec<Role> {
    vec![Role::new(ADMIN_ROLE_ID, "Admin"), Role::new(USER_ROLE_ID, "User")]
}

pub fn user_with_role(role: &str) -> User {
    User {
        id: "u-42".to_string(),
        username: "jdoe".to_string(),
        email: "jdoe@example.com".to_string(),
        full_name: "Jane Doe".to_string(),
        role: role.to_string(),
    }
}

// ============================================================================
// ROLE DIRECTORY
// ============================================================================

pub struct FakeDirectory {
    result: Mutex<Result<Vec<Role>, DirectoryError>>,
    calls: AtomicUsize,
}

impl FakeDirectory {
    pub fn with_roles(roles: Vec<Role>) -> Self {
        FakeDirectory {
            result: Mutex::new(Ok(roles)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        FakeDirectory {
            result: Mutex::new(Err(DirectoryError(message.to_string()))),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_roles(&self, roles: Vec<Role>) {
        *self.result.lock().unwrap() = Ok(roles);
    }

    pub fn set_failing(&self, message: &str) {
        *self.result.lock().unwrap() = Err(DirectoryError(message.to_string()));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RoleDirectory for FakeDirectory {
    async fn get_all_roles(&self) -> Result<Vec<Role>, DirectoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.lock().unwrap().clone()
    }
}

// ============================================================================
// USER STORE
// ============================================================================

#[derive(Default)]
pub struct FakeStore {
    users: Mutex<Vec<User>>,
    created: Mutex<Vec<NewUser>>,
    updated: Mutex<Vec<(String, UserUpdate)>>,
    failure: Mutex<Option<StoreError>>,
}

impl FakeStore {
    pub fn new() -> Self {
        FakeStore::default()
    }

    pub fn with_user(user: User) -> Self {
        let store = FakeStore::default();
        store.users.lock().unwrap().push(user);
        store
    }

    /// Make every following create/update fail with `error`.
    pub fn fail_with(&self, error: StoreError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn created(&self) -> Vec<NewUser> {
        self.created.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Vec<(String, UserUpdate)> {
        self.updated.lock().unwrap().clone()
    }

    fn check_failure(&self) -> Result<(), StoreError> {
        match self.failure.lock().unwrap().clone() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl UserStore for FakeStore {
    async fn create(&self, user: NewUser) -> Result<(), StoreError> {
        self.check_failure()?;
        self.created.lock().unwrap().push(user);
        Ok(())
    }

    async fn update(&self, id: &str, changes: UserUpdate) -> Result<(), StoreError> {
        self.check_failure()?;
        self.updated.lock().unwrap().push((id.to_string(), changes));
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }
}
