use std::future::Future;

use crate::auth::validate::{Field, FormRules};
use crate::dialogs::collaborators::{DirectoryError, RoleDirectory, StoreError, UserStore};
use crate::dialogs::loader::{LoadOutcome, RoleFetch, RoleLoader};
use crate::dialogs::reconcile::match_role_id;
use crate::dialogs::state::{DialogCore, DialogError, Submission, SubmitOutcome, SubmitTicket};
use crate::models::role::Role;
use crate::models::user::{FormFields, User, UserUpdate};

pub const UPDATE_FAILED: &str = "Failed to update user";

/// The "edit user" dialog for one target user.
///
/// Fields are reseeded from the user whenever the user or the loaded role
/// collection changes while open, so a late role list always wins.
#[derive(Debug)]
pub struct EditDialog {
    core: DialogCore,
    user: User,
}

impl EditDialog {
    pub fn new(user: User) -> Self {
        EditDialog {
            core: DialogCore::default(),
            user,
        }
    }

    pub fn core(&self) -> &DialogCore {
        &self.core
    }

    pub(crate) fn core_mut(&mut self) -> &mut DialogCore {
        &mut self.core
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn open(&mut self) -> Option<RoleFetch> {
        let fields = self.seed();
        self.core.open(fields)
    }

    pub fn close(&mut self) -> Result<(), DialogError> {
        self.core.close()
    }

    /// Switch the target user. Refused while a submission is in flight.
    pub fn set_user(&mut self, user: User) -> Result<(), DialogError> {
        if self.core.submitting() {
            return Err(DialogError::Busy);
        }
        self.user = user;
        if self.core.is_open() {
            self.reconcile();
        }
        Ok(())
    }

    pub fn roles_loaded(
        &mut self,
        fetch: RoleFetch,
        result: Result<Vec<Role>, DirectoryError>,
    ) -> LoadOutcome {
        let outcome = self.core.finish_load(fetch, result);
        if outcome != LoadOutcome::Stale {
            self.reconcile();
        }
        outcome
    }

    pub async fn load_roles<D: RoleDirectory>(&mut self, fetch: RoleFetch, directory: &D) -> LoadOutcome {
        let result = RoleLoader::fetch(directory).await;
        self.roles_loaded(fetch, result)
    }

    fn seed(&self) -> FormFields {
        FormFields::from_user(&self.user, match_role_id(&self.user.role, self.core.roles()))
    }

    fn reconcile(&mut self) {
        let fields = self.seed();
        self.core.reseed(fields);
    }

    /// Record a field edit. The edit form has no password field and does not
    /// strip whitespace from the username.
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), DialogError> {
        self.core.edit_field(field, value.to_string())
    }

    /// Validate and hand back `(user id, changes)` for the update call.
    pub fn begin_submit(&mut self) -> Result<Submission<(String, UserUpdate)>, DialogError> {
        let (ticket, fields) = self.core.begin_submit(FormRules::EDIT)?;
        Ok(Submission {
            ticket,
            payload: (self.user.id.clone(), UserUpdate::from_fields(&fields)),
        })
    }

    pub fn finish_submit(&mut self, ticket: SubmitTicket, result: Result<(), StoreError>) -> SubmitOutcome {
        self.core.finish_submit(ticket, result, UPDATE_FAILED)
    }

    pub async fn submit<S: UserStore>(&mut self, store: &S) -> Result<SubmitOutcome, DialogError> {
        self.submit_with(|id, changes| async move { store.update(&id, changes).await })
            .await
    }

    /// Submit through the host's `on_update(id, changes)` handler.
    pub async fn submit_with<F, Fut>(&mut self, on_update: F) -> Result<SubmitOutcome, DialogError>
    where
        F: FnOnce(String, UserUpdate) -> Fut,
        Fut: Future<Output = Result<(), StoreError>>,
    {
        let Submission { ticket, payload: (id, changes) } = self.begin_submit()?;
        let result = on_update(id, changes).await;
        Ok(self.finish_submit(ticket, result))
    }
}
