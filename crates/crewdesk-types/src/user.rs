//! User identity.

use crate::{CompanyId, Role, RoleCode, UserId};
use serde::{Deserialize, Serialize};

/// An authenticated user as seen by access checks.
///
/// A `User` is identity plus tenant: who is acting ([`id`](Self::id)),
/// at which tier ([`role`](Self::role)), and for which company
/// ([`company_id`](Self::company_id)). Platform admins may have no
/// company.
///
/// Only `id`, `role` and `company_id` matter to the rule table. The
/// remaining fields are profile data carried for callers.
///
/// # Example
///
/// ```
/// use crewdesk_types::{Role, User};
///
/// let user = User::new("u1", Role::Leader, Some("c1"));
/// assert_eq!(user.role(), Some(Role::Leader));
/// assert_eq!(user.company_id.as_ref().map(|c| c.as_str()), Some("c1"));
///
/// // Unknown tiers survive deserialization and resolve to None.
/// let json = r#"{ "id": "u2", "role": 999, "companyId": "c1" }"#;
/// let odd: User = serde_json::from_str(json).unwrap();
/// assert_eq!(odd.role(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    pub role: RoleCode,
    #[serde(default, alias = "companyId")]
    pub company_id: Option<CompanyId>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, alias = "hourlyWage", skip_serializing_if = "Option::is_none")]
    pub hourly_wage: Option<u32>,
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl User {
    /// Creates a verified user with empty profile data.
    #[must_use]
    pub fn new(
        id: impl Into<UserId>,
        role: impl Into<RoleCode>,
        company_id: Option<impl Into<CompanyId>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            role: role.into(),
            company_id: company_id.map(Into::into),
            verified: true,
            age: None,
            hourly_wage: None,
            created_at: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Resolved tier, or `None` for an unknown role code.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role.resolve()
    }
}

/// Renders `user:<id>@<role>`, e.g. `user:u1@owner`; an unresolved
/// role code shows as `unknown(N)`.
impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.id, self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_resolves_role() {
        let user = User::new("u1", Role::Owner, Some("c1"));
        assert_eq!(user.role(), Some(Role::Owner));
        assert!(user.verified);
        assert_eq!(user.to_string(), "user:u1@owner");
    }

    #[test]
    fn admin_without_company() {
        let admin = User::new("a1", Role::Admin, None::<CompanyId>);
        assert!(admin.company_id.is_none());
    }

    #[test]
    fn deserializes_snake_and_camel_case() {
        let snake: User = serde_json::from_str(
            r#"{ "id": "u1", "name": "Jane", "role": 2, "company_id": "c1", "hourly_wage": 2000 }"#,
        )
        .expect("snake case");
        let camel: User = serde_json::from_str(
            r#"{ "id": "u1", "name": "Jane", "role": 2, "companyId": "c1", "hourlyWage": 2000 }"#,
        )
        .expect("camel case");
        assert_eq!(snake, camel);
        assert_eq!(snake.role(), Some(Role::Leader));
        assert_eq!(snake.hourly_wage, Some(2000));
    }

    #[test]
    fn unknown_role_code_is_kept() {
        let user: User =
            serde_json::from_str(r#"{ "id": "u1", "role": 0 }"#).expect("deserialize");
        assert_eq!(user.role, RoleCode(0));
        assert_eq!(user.role(), None);
        assert_eq!(user.to_string(), "user:u1@unknown(0)");
    }
}
