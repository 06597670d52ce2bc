use crate::dialogs::collaborators::{DirectoryError, RoleDirectory};
use crate::models::role::Role;

/// Holds the most recently loaded role collection.
///
/// A failed load keeps whatever was held before (empty until the first
/// success) and only logs; the form stays usable with the old list.
#[derive(Debug, Default)]
pub struct RoleLoader {
    roles: Vec<Role>,
}

/// What happened to a role-fetch result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
    /// The fetch belonged to an activation that is no longer current.
    Stale,
}

/// One in-flight role fetch, tied to the activation that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a role fetch must be completed with `roles_loaded`"]
pub struct RoleFetch {
    pub(crate) epoch: u64,
}

impl RoleFetch {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

impl RoleLoader {
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Ask the directory for roles. Does not touch any dialog state.
    pub async fn fetch<D: RoleDirectory>(directory: &D) -> Result<Vec<Role>, DirectoryError> {
        directory.get_all_roles().await
    }

    pub(crate) fn apply(&mut self, result: Result<Vec<Role>, DirectoryError>) -> LoadOutcome {
        match result {
            Ok(roles) => {
                log::debug!("Loaded {} roles", roles.len());
                self.roles = roles;
                LoadOutcome::Loaded
            }
            Err(e) => {
                log::error!("Failed to load roles: {e}");
                LoadOutcome::Failed
            }
        }
    }
}
