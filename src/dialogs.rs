//! Create/edit user dialogs: role loading, field reconciliation, validation
//! and the submission state machine.
//!
//! Hosts drive a dialog with discrete events. The split calls
//! (`open` / `roles_loaded`, `begin_submit` / `finish_submit`) let a host run
//! the collaborator calls itself and interleave other events; `load_roles`
//! and `submit` do both halves in one await.

pub mod collaborators;
pub mod create;
pub mod edit;
pub mod loader;
pub mod reconcile;
pub mod state;

pub use collaborators::{DirectoryError, RoleDirectory, StoreError, UserStore};
pub use create::{CreateDialog, CREATE_FAILED};
pub use edit::{EditDialog, UPDATE_FAILED};
pub use loader::{LoadOutcome, RoleFetch, RoleLoader};
pub use state::{DialogCore, DialogError, Phase, Submission, SubmitOutcome, SubmitTicket};
