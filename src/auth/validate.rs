use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::models::user::FormFields;

/// `local@domain.tld`: no whitespace or '@' inside any of the three parts.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub const USERNAME_MIN_LEN: usize = 3;
pub const PASSWORD_MIN_LEN: usize = 6;

/// Names of the editable fields, also used as ErrorMap keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Username,
    Email,
    Password,
    FullName,
    RoleId,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::FullName => "fullName",
            Field::RoleId => "roleId",
        }
    }
}

/// Per-field validation messages. An absent key means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<Field, String>);

impl ErrorMap {
    pub fn new() -> Self {
        ErrorMap::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub(crate) fn record(&mut self, field: Field, message: Option<String>) {
        if let Some(message) = message {
            self.0.insert(field, message);
        }
    }
}

/// Which optional rules apply to a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormRules {
    pub require_password: bool,
    pub forbid_username_whitespace: bool,
}

impl FormRules {
    pub const CREATE: FormRules = FormRules {
        require_password: true,
        forbid_username_whitespace: true,
    };

    pub const EDIT: FormRules = FormRules {
        require_password: false,
        forbid_username_whitespace: false,
    };
}

/// Validate a whole user form. Every field is checked; each failing field
/// reports its first violated rule.
pub fn validate_user_form(fields: &FormFields, rules: FormRules) -> ErrorMap {
    let mut errors = ErrorMap::new();
    errors.record(
        Field::Username,
        validate_username(&fields.username, rules.forbid_username_whitespace),
    );
    errors.record(Field::Email, validate_email(&fields.email));
    if rules.require_password {
        let password = fields.password.as_deref().unwrap_or("");
        errors.record(Field::Password, validate_password(password));
    }
    errors.record(Field::FullName, validate_required(&fields.full_name, "Full name"));
    errors
}

/// Validate a username: required, at least 3 characters, optionally no whitespace.
pub fn validate_username(username: &str, forbid_whitespace: bool) -> Option<String> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Some("Username is required".to_string());
    }
    if trimmed.chars().count() < USERNAME_MIN_LEN {
        return Some(format!("Username must be at least {USERNAME_MIN_LEN} characters"));
    }
    if forbid_whitespace && username.chars().any(char::is_whitespace) {
        return Some("Username cannot contain spaces".to_string());
    }
    None
}

/// Validate an email: required and shaped like `local@domain.tld`.
pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Email is required".to_string());
    }
    if !EMAIL_SHAPE.is_match(trimmed) {
        return Some("Email is invalid".to_string());
    }
    None
}

/// Validate a password: min 6 chars on create.
pub fn validate_password(password: &str) -> Option<String> {
    let trimmed = password.trim();
    if trimmed.is_empty() {
        return Some("Password is required".to_string());
    }
    if trimmed.chars().count() < PASSWORD_MIN_LEN {
        return Some(format!("Password must be at least {PASSWORD_MIN_LEN} characters"));
    }
    None
}

/// Validate a required text field.
pub fn validate_required(value: &str, field_name: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some(format!("{field_name} is required"));
    }
    None
}

/// Remove every whitespace character, as the create form's username input does while typing.
pub fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}
