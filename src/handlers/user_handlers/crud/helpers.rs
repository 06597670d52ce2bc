use crate::auth::validate::Field;
use crate::dialogs::{CreateDialog, DialogCore, DialogError, EditDialog};
use crate::models::user::UserForm;
use crate::templates_structs::{PageContext, UserFormTemplate};

pub const ROLE_UNAVAILABLE: &str = "Selected role is not available";

/// Copy posted values into an open create dialog, field by field, as if typed.
///
/// Returns `false` when the posted role is not among the loaded roles; the
/// form should then be shown again instead of submitted.
pub fn apply_create_form(dialog: &mut CreateDialog, form: &UserForm) -> Result<bool, DialogError> {
    dialog.set_field(Field::Username, &form.username)?;
    dialog.set_field(Field::Email, &form.email)?;
    dialog.set_field(Field::Password, &form.password)?;
    dialog.set_field(Field::FullName, &form.full_name)?;
    apply_role(dialog.core_mut(), &form.role_id)
}

/// Copy posted values into an open edit dialog. Any posted password is ignored.
pub fn apply_edit_form(dialog: &mut EditDialog, form: &UserForm) -> Result<bool, DialogError> {
    dialog.set_field(Field::Username, &form.username)?;
    dialog.set_field(Field::Email, &form.email)?;
    dialog.set_field(Field::FullName, &form.full_name)?;
    apply_role(dialog.core_mut(), &form.role_id)
}

/// An unavailable role (e.g. the role fetch failed for this request) keeps the
/// reconciled selection and is reported next to the role select.
fn apply_role(core: &mut DialogCore, role_id: &str) -> Result<bool, DialogError> {
    match core.edit_field(Field::RoleId, role_id.to_string()) {
        Ok(()) => Ok(true),
        Err(DialogError::UnknownRole(id)) => {
            log::warn!("Posted role '{id}' is not among the loaded roles");
            core.flag_field(Field::RoleId, ROLE_UNAVAILABLE);
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

pub fn create_template(ctx: PageContext, dialog: &CreateDialog) -> UserFormTemplate {
    UserFormTemplate::from_dialog(ctx, dialog.core(), "/users".to_string(), "Create User", "Create User")
}

pub fn edit_template(ctx: PageContext, dialog: &EditDialog) -> UserFormTemplate {
    let action = format!("/users/{}", dialog.user().id);
    UserFormTemplate::from_dialog(ctx, dialog.core(), action, "Edit User", "Save Changes")
}
