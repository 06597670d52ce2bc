//! Lifecycle shared by the create and edit dialogs.
//!
//! ```text
//! Closed --open--> LoadingRoles --roles--> Ready --submit--> Submitting
//!                                            ^                  |
//!                                            +---- failure -----+
//!                                 success --> Closed
//! ```
//!
//! Every activation gets a fresh epoch. Role-fetch and submit results carry
//! the epoch they were issued under and are dropped when it no longer matches.

use std::fmt;

use crate::auth::validate::{validate_user_form, ErrorMap, Field, FormRules};
use crate::dialogs::collaborators::StoreError;
use crate::dialogs::loader::{LoadOutcome, RoleFetch, RoleLoader};
use crate::dialogs::reconcile;
use crate::models::role::Role;
use crate::models::user::FormFields;

/// What an open dialog is doing right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Role fetch outstanding; role selection is disabled.
    LoadingRoles,
    /// Interactive. Holds the last submission failure, if any.
    Ready { submit_error: Option<String> },
    /// Store call outstanding; every input and close are disabled.
    Submitting,
}

#[derive(Debug)]
struct OpenDialog {
    epoch: u64,
    phase: Phase,
    fields: FormFields,
    errors: ErrorMap,
}

#[derive(Debug, Default)]
enum DialogState {
    #[default]
    Closed,
    Open(OpenDialog),
}

/// One in-flight store call, tied to the activation that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a submission must be completed with `finish_submit`"]
pub struct SubmitTicket {
    epoch: u64,
}

/// A validated payload ready to hand to the store.
#[derive(Debug)]
pub struct Submission<P> {
    pub ticket: SubmitTicket,
    pub payload: P,
}

/// Result of completing a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Stored; the dialog is closed and its fields are gone.
    Saved,
    /// The store refused; the message is shown as the top-level error.
    Failed(String),
    /// The dialog was closed or reopened meanwhile; nothing was changed.
    Discarded,
}

/// An operation the dialog cannot perform in its current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogError {
    Closed,
    Busy,
    UnknownRole(String),
    NoSuchField(Field),
    Invalid(ErrorMap),
}

impl fmt::Display for DialogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogError::Closed => write!(f, "Dialog is not open"),
            DialogError::Busy => write!(f, "Dialog is busy"),
            DialogError::UnknownRole(id) => write!(f, "Unknown role: {id}"),
            DialogError::NoSuchField(field) => write!(f, "Field not available: {}", field.as_str()),
            DialogError::Invalid(errors) => write!(f, "Form has {} invalid field(s)", errors.len()),
        }
    }
}

/// State machine, role collection and field values of one dialog instance.
#[derive(Debug, Default)]
pub struct DialogCore {
    state: DialogState,
    loader: RoleLoader,
    last_epoch: u64,
}

impl DialogCore {
    pub fn is_open(&self) -> bool {
        matches!(self.state, DialogState::Open(_))
    }

    pub fn phase(&self) -> Option<&Phase> {
        match &self.state {
            DialogState::Open(o) => Some(&o.phase),
            DialogState::Closed => None,
        }
    }

    /// Epoch of the current activation.
    pub fn epoch(&self) -> Option<u64> {
        match &self.state {
            DialogState::Open(o) => Some(o.epoch),
            DialogState::Closed => None,
        }
    }

    pub fn loading(&self) -> bool {
        matches!(self.phase(), Some(Phase::LoadingRoles))
    }

    pub fn submitting(&self) -> bool {
        matches!(self.phase(), Some(Phase::Submitting))
    }

    /// Text inputs and the close action.
    pub fn inputs_disabled(&self) -> bool {
        self.submitting()
    }

    pub fn role_select_disabled(&self) -> bool {
        self.loading() || self.submitting()
    }

    pub fn fields(&self) -> Option<&FormFields> {
        match &self.state {
            DialogState::Open(o) => Some(&o.fields),
            DialogState::Closed => None,
        }
    }

    pub fn errors(&self) -> Option<&ErrorMap> {
        match &self.state {
            DialogState::Open(o) => Some(&o.errors),
            DialogState::Closed => None,
        }
    }

    pub fn submit_error(&self) -> Option<&str> {
        match self.phase() {
            Some(Phase::Ready { submit_error }) => submit_error.as_deref(),
            _ => None,
        }
    }

    pub fn roles(&self) -> &[Role] {
        self.loader.roles()
    }

    /// Close the dialog, discarding its fields. Refused while submitting.
    pub fn close(&mut self) -> Result<(), DialogError> {
        if self.submitting() {
            return Err(DialogError::Busy);
        }
        if let DialogState::Open(o) = &self.state {
            log::debug!("Closing dialog (activation {})", o.epoch);
        }
        self.state = DialogState::Closed;
        Ok(())
    }

    /// Inactive to active. Returns `None` if already open; a fetch is issued
    /// only on the transition.
    pub(crate) fn open(&mut self, fields: FormFields) -> Option<RoleFetch> {
        if self.is_open() {
            return None;
        }
        self.last_epoch += 1;
        let epoch = self.last_epoch;
        self.state = DialogState::Open(OpenDialog {
            epoch,
            phase: Phase::LoadingRoles,
            fields,
            errors: ErrorMap::new(),
        });
        log::debug!("Opened dialog (activation {epoch})");
        Some(RoleFetch { epoch })
    }

    pub(crate) fn finish_load(
        &mut self,
        fetch: RoleFetch,
        result: Result<Vec<Role>, crate::dialogs::collaborators::DirectoryError>,
    ) -> LoadOutcome {
        let current = matches!(
            &self.state,
            DialogState::Open(o) if o.epoch == fetch.epoch && o.phase == Phase::LoadingRoles
        );
        if !current {
            log::debug!("Discarding role fetch from activation {}", fetch.epoch);
            return LoadOutcome::Stale;
        }
        let outcome = self.loader.apply(result);
        if let DialogState::Open(o) = &mut self.state {
            o.phase = Phase::Ready { submit_error: None };
        }
        outcome
    }

    /// Replace the field values and clear every displayed error.
    pub(crate) fn reseed(&mut self, fields: FormFields) {
        if let DialogState::Open(o) = &mut self.state {
            o.fields = fields;
            o.errors = ErrorMap::new();
            if let Phase::Ready { submit_error } = &mut o.phase {
                *submit_error = None;
            }
        }
    }

    pub(crate) fn edit_field(&mut self, field: Field, value: String) -> Result<(), DialogError> {
        let DialogState::Open(o) = &mut self.state else {
            return Err(DialogError::Closed);
        };
        match (&o.phase, field) {
            (Phase::Submitting, _) | (Phase::LoadingRoles, Field::RoleId) => {
                return Err(DialogError::Busy);
            }
            _ => {}
        }
        match field {
            Field::Username => o.fields.username = value,
            Field::Email => o.fields.email = value,
            Field::FullName => o.fields.full_name = value,
            Field::Password => match &mut o.fields.password {
                Some(password) => *password = value,
                None => return Err(DialogError::NoSuchField(Field::Password)),
            },
            Field::RoleId => {
                if !reconcile::is_selectable(&value, self.loader.roles()) {
                    return Err(DialogError::UnknownRole(value));
                }
                o.fields.role_id = value;
            }
        }
        Ok(())
    }

    /// Attach a message to `field` outside a validation pass. The next
    /// submit recomputes every error.
    pub(crate) fn flag_field(&mut self, field: Field, message: &str) {
        if let DialogState::Open(o) = &mut self.state {
            o.errors.record(field, Some(message.to_string()));
        }
    }

    /// Validate and, when clean, move to `Submitting`. Returns the fields to
    /// build the store payload from.
    pub(crate) fn begin_submit(
        &mut self,
        rules: FormRules,
    ) -> Result<(SubmitTicket, FormFields), DialogError> {
        let DialogState::Open(o) = &mut self.state else {
            return Err(DialogError::Closed);
        };
        if !matches!(o.phase, Phase::Ready { .. }) {
            return Err(DialogError::Busy);
        }
        let errors = validate_user_form(&o.fields, rules);
        if !errors.is_empty() {
            log::info!(
                "Submission rejected: {}",
                errors.fields().map(Field::as_str).collect::<Vec<_>>().join(", ")
            );
            o.errors = errors.clone();
            o.phase = Phase::Ready { submit_error: None };
            return Err(DialogError::Invalid(errors));
        }
        o.errors = ErrorMap::new();
        o.phase = Phase::Submitting;
        Ok((SubmitTicket { epoch: o.epoch }, o.fields.clone()))
    }

    pub(crate) fn finish_submit(
        &mut self,
        ticket: SubmitTicket,
        result: Result<(), StoreError>,
        fallback: &str,
    ) -> SubmitOutcome {
        let DialogState::Open(o) = &mut self.state else {
            log::debug!("Discarding submit result for a closed dialog");
            return SubmitOutcome::Discarded;
        };
        if o.epoch != ticket.epoch || o.phase != Phase::Submitting {
            log::debug!("Discarding submit result from activation {}", ticket.epoch);
            return SubmitOutcome::Discarded;
        }
        match result {
            Ok(()) => {
                self.state = DialogState::Closed;
                SubmitOutcome::Saved
            }
            Err(e) => {
                let message = e.message_or(fallback);
                log::warn!("Submission failed: {e}");
                o.phase = Phase::Ready { submit_error: Some(message.clone()) };
                SubmitOutcome::Failed(message)
            }
        }
    }
}
