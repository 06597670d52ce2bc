use std::future::Future;

use crate::auth::validate::{strip_whitespace, Field, FormRules};
use crate::dialogs::collaborators::{DirectoryError, RoleDirectory, StoreError, UserStore};
use crate::dialogs::loader::{LoadOutcome, RoleFetch, RoleLoader};
use crate::dialogs::reconcile::default_role_id;
use crate::dialogs::state::{DialogCore, DialogError, Submission, SubmitOutcome, SubmitTicket};
use crate::models::role::Role;
use crate::models::user::{FormFields, NewUser};

pub const CREATE_FAILED: &str = "Failed to create user";

/// The "create user" dialog.
///
/// Read-only state (phase, fields, errors, roles) is reached through
/// [`CreateDialog::core`]; every mutation goes through the methods here.
#[derive(Debug, Default)]
pub struct CreateDialog {
    core: DialogCore,
}

impl CreateDialog {
    pub fn new() -> Self {
        CreateDialog::default()
    }

    pub fn core(&self) -> &DialogCore {
        &self.core
    }

    pub(crate) fn core_mut(&mut self) -> &mut DialogCore {
        &mut self.core
    }

    /// Activate with blank fields. Returns the role fetch to run, or `None`
    /// when the dialog was already open.
    pub fn open(&mut self) -> Option<RoleFetch> {
        self.core.open(FormFields::blank_with_password())
    }

    pub fn close(&mut self) -> Result<(), DialogError> {
        self.core.close()
    }

    /// Complete a role fetch. Stale results change nothing.
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

    /// Fetch and apply roles in one step.
    pub async fn load_roles<D: RoleDirectory>(&mut self, fetch: RoleFetch, directory: &D) -> LoadOutcome {
        let result = RoleLoader::fetch(directory).await;
        self.roles_loaded(fetch, result)
    }

    fn reconcile(&mut self) {
        let Some(current) = self.core.fields() else {
            return;
        };
        let mut fields = current.clone();
        fields.role_id = default_role_id(&fields.role_id, self.core.roles());
        self.core.reseed(fields);
    }

    /// Record a field edit. Whitespace typed into the username is dropped.
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), DialogError> {
        let value = match field {
            Field::Username => strip_whitespace(value),
            _ => value.to_string(),
        };
        self.core.edit_field(field, value)
    }

    pub fn begin_submit(&mut self) -> Result<Submission<NewUser>, DialogError> {
        let (ticket, fields) = self.core.begin_submit(FormRules::CREATE)?;
        Ok(Submission {
            ticket,
            payload: NewUser::from_fields(&fields),
        })
    }

    pub fn finish_submit(&mut self, ticket: SubmitTicket, result: Result<(), StoreError>) -> SubmitOutcome {
        self.core.finish_submit(ticket, result, CREATE_FAILED)
    }

    /// Submit through the default store.
    pub async fn submit<S: UserStore>(&mut self, store: &S) -> Result<SubmitOutcome, DialogError> {
        self.submit_with(|user| store.create(user)).await
    }

    /// Submit through a host-supplied handler instead of the store.
    pub async fn submit_with<F, Fut>(&mut self, handler: F) -> Result<SubmitOutcome, DialogError>
    where
        F: FnOnce(NewUser) -> Fut,
        Fut: Future<Output = Result<(), StoreError>>,
    {
        let Submission { ticket, payload } = self.begin_submit()?;
        let result = handler(payload).await;
        Ok(self.finish_submit(ticket, result))
    }
}
