use serde::{Deserialize, Serialize};

/// A stored user as seen by the edit dialog.
///
/// `role` holds the role *label* (a `Role::name`), not a role id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role: String,
}

/// Editable field values held by an open dialog.
///
/// `password` is `Some` only in the create flow. `role_id` is either empty or
/// the id of a role in the currently loaded collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub full_name: String,
    pub role_id: String,
}

impl FormFields {
    /// Empty values for the create dialog.
    pub fn blank_with_password() -> Self {
        FormFields {
            password: Some(String::new()),
            ..FormFields::default()
        }
    }

    /// Values copied from an existing user; the role id is filled in by reconciliation.
    pub fn from_user(user: &User, role_id: String) -> Self {
        FormFields {
            username: user.username.clone(),
            email: user.email.clone(),
            password: None,
            full_name: user.full_name.clone(),
            role_id,
        }
    }
}

/// Payload handed to `UserStore::create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role_id: Option<String>,
}

/// Payload handed to `UserStore::update`. The password is never part of an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub role_id: Option<String>,
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}

impl NewUser {
    pub fn from_fields(fields: &FormFields) -> Self {
        NewUser {
            username: fields.username.trim().to_string(),
            email: fields.email.trim().to_string(),
            password: fields.password.clone().unwrap_or_default(),
            full_name: fields.full_name.trim().to_string(),
            role_id: non_empty(&fields.role_id),
        }
    }
}

impl UserUpdate {
    pub fn from_fields(fields: &FormFields) -> Self {
        UserUpdate {
            username: fields.username.trim().to_string(),
            email: fields.email.trim().to_string(),
            full_name: fields.full_name.trim().to_string(),
            role_id: non_empty(&fields.role_id),
        }
    }
}

/// Form data posted by the create/edit user forms.
#[derive(Debug, Deserialize)]
pub struct UserForm {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub full_name: String,
    #[serde(default)]
    pub role_id: String,
    pub csrf_token: String,
}
