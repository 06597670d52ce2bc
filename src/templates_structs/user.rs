use askama::Template;

use crate::auth::validate::{ErrorMap, Field};
use crate::dialogs::DialogCore;
use crate::models::role::Role;
use super::PageContext;

/// Per-field messages, flattened for the template.
#[derive(Debug, Default)]
pub struct FieldErrors {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
    pub role_id: Option<String>,
}

impl From<&ErrorMap> for FieldErrors {
    fn from(errors: &ErrorMap) -> Self {
        let get = |f: Field| errors.get(f).map(str::to_string);
        FieldErrors {
            username: get(Field::Username),
            email: get(Field::Email),
            password: get(Field::Password),
            full_name: get(Field::FullName),
            role_id: get(Field::RoleId),
        }
    }
}

#[derive(Template)]
#[template(path = "users/form.html")]
pub struct UserFormTemplate {
    pub ctx: PageContext,
    pub form_action: String,
    pub form_title: String,
    pub submit_label: String,
    pub show_password: bool,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role_id: String,
    pub roles: Vec<Role>,
    pub roles_loading: bool,
    pub inputs_disabled: bool,
    pub errors: FieldErrors,
    pub submit_error: Option<String>,
}

impl UserFormTemplate {
    /// Snapshot an open dialog. The password is never echoed back.
    pub fn from_dialog(
        ctx: PageContext,
        dialog: &DialogCore,
        form_action: String,
        form_title: &str,
        submit_label: &str,
    ) -> Self {
        let fields = dialog.fields().cloned().unwrap_or_default();
        UserFormTemplate {
            ctx,
            form_action,
            form_title: form_title.to_string(),
            submit_label: submit_label.to_string(),
            show_password: fields.password.is_some(),
            username: fields.username,
            email: fields.email,
            full_name: fields.full_name,
            role_id: fields.role_id,
            roles: dialog.roles().to_vec(),
            roles_loading: dialog.loading(),
            inputs_disabled: dialog.inputs_disabled(),
            errors: dialog.errors().map(FieldErrors::from).unwrap_or_default(),
            submit_error: dialog.submit_error().map(str::to_string),
        }
    }
}
