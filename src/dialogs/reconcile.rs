//! Seeding of the role selection from a loaded role collection.

use crate::models::role::Role;

/// Role id for a user whose record stores a role *label*.
///
/// Picks the first role whose name equals `label` ignoring case, then the
/// first role, then `""` when there are no roles. This is the only place that
/// knows users reference roles by name.
pub fn match_role_id(label: &str, roles: &[Role]) -> String {
    let wanted = label.to_lowercase();
    roles
        .iter()
        .find(|r| r.name.to_lowercase() == wanted)
        .or_else(|| roles.first())
        .map(|r| r.id.clone())
        .unwrap_or_default()
}

/// Role id for the create form after a (re)load.
///
/// A current selection that is still present survives. Anything else, unset
/// or pointing into a stale collection, becomes the first role or `""`.
pub fn default_role_id(current: &str, roles: &[Role]) -> String {
    if !current.is_empty() && roles.iter().any(|r| r.id == current) {
        return current.to_string();
    }
    roles.first().map(|r| r.id.clone()).unwrap_or_default()
}

/// Whether `role_id` is acceptable as a selection against `roles`.
pub fn is_selectable(role_id: &str, roles: &[Role]) -> bool {
    role_id.is_empty() || roles.iter().any(|r| r.id == role_id)
}
