//! Role assignment in the employee editor.
//!
//! Leaders and above may place a company member at `employee` or
//! `leader`. `owner` and `admin` are never assignable from the editor.

use crate::AccessDenied;
use crewdesk_types::{Role, RoleCode, User};

/// Tiers the editor can hand out.
const ASSIGNABLE: [Role; 2] = [Role::Employee, Role::Leader];

/// Tiers `editor` may assign, lowest first.
///
/// ```
/// use crewdesk_auth::assignable_roles;
/// use crewdesk_types::{Role, User};
///
/// let owner = User::new("u1", Role::Owner, Some("c1"));
/// assert_eq!(assignable_roles(&owner), vec![Role::Employee, Role::Leader]);
///
/// let employee = User::new("u2", Role::Employee, Some("c1"));
/// assert!(assignable_roles(&employee).is_empty());
/// ```
#[must_use]
pub fn assignable_roles(editor: &User) -> Vec<Role> {
    match editor.role() {
        Some(role) if role.at_least(Role::Leader) => ASSIGNABLE.to_vec(),
        _ => Vec::new(),
    }
}

/// Returns `true` if `editor` may assign `target`.
#[must_use]
pub fn can_assign_role(editor: &User, target: Role) -> bool {
    assignable_roles(editor).contains(&target)
}

/// Hard-refusal form of [`can_assign_role`].
///
/// # Errors
///
/// Returns [`AccessDenied::RoleNotAssignable`] when the target tier is
/// not in [`assignable_roles`] for the editor.
pub fn require_assignable(editor: &User, target: Role) -> Result<(), AccessDenied> {
    if can_assign_role(editor, target) {
        Ok(())
    } else {
        Err(AccessDenied::RoleNotAssignable {
            user: editor.id.clone(),
            role: editor.role,
            target: RoleCode::from(target),
        })
    }
}
