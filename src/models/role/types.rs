use serde::{Deserialize, Serialize};

/// An assignable role as returned by the role directory.
///
/// `id` is the identity. `name` is the human-readable label; it is what a
/// user record stores and what the edit dialog matches against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl Role {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Role {
            id: id.into(),
            name: name.into(),
            description: None,
            permissions: Vec::new(),
        }
    }
}
