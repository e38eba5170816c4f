//! Permission policy trait.
//!
//! Defines [`PermissionPolicy`], the seam callers hold instead of the
//! free functions so that checks can be wrapped (audited, cached, faked
//! in tests) without touching call sites.
//!
//! # Architecture
//!
//! ```text
//! PermissionPolicy trait (crewdesk-auth)   <- abstract, no runtime deps
//!          │
//!          ├── StaticPolicy (crewdesk-auth)    <- the rule table, as-is
//!          │
//!          └── AuditedPolicy (crewdesk-runtime) <- wraps any policy, logs decisions
//! ```
//!
//! | Method | Surface |
//! |--------|---------|
//! | [`can_ticket`](PermissionPolicy::can_ticket) | ticket rule table |
//! | [`can_schedule`](PermissionPolicy::can_schedule) | schedule rule table |
//! | [`can_enter_section`](PermissionPolicy::can_enter_section) | navbar gating |
//! | [`can_assign_role`](PermissionPolicy::can_assign_role) | employee editor |

use crate::{
    AccessDenied, ParsedQuery, Query, ResourceAction, ResourceKind, ScheduleAction, Section,
    TicketAction,
};
use crewdesk_types::{Role, Schedule, Ticket, User};

/// Abstract permission policy.
///
/// # Implementors
///
/// - [`StaticPolicy`]: the built-in rule table
/// - `AuditedPolicy` (in `crewdesk-runtime`): logs every decision
/// - Custom impls for testing
///
/// # Example
///
/// ```
/// use crewdesk_auth::{PermissionPolicy, ScheduleAction, Section, TicketAction};
/// use crewdesk_types::{Role, Schedule, Ticket, User};
///
/// struct LockedDown;
///
/// impl PermissionPolicy for LockedDown {
///     fn can_ticket(&self, _: &User, _: TicketAction, _: Option<&Ticket>) -> bool {
///         false
///     }
///     fn can_schedule(&self, _: &User, _: ScheduleAction, _: Option<&Schedule>) -> bool {
///         false
///     }
///     fn can_enter_section(&self, _: &User, _: Section) -> bool {
///         false
///     }
///     fn can_assign_role(&self, _: &User, _: Role) -> bool {
///         false
///     }
/// }
///
/// let user = User::new("u1", Role::Owner, Some("c1"));
/// assert!(LockedDown.check_ticket(&user, TicketAction::Create, None).is_err());
/// ```
pub trait PermissionPolicy: Send + Sync {
    /// Check a ticket action.
    fn can_ticket(&self, user: &User, action: TicketAction, record: Option<&Ticket>) -> bool;

    /// Check a schedule action.
    fn can_schedule(&self, user: &User, action: ScheduleAction, record: Option<&Schedule>)
        -> bool;

    /// Check navbar section access.
    fn can_enter_section(&self, user: &User, section: Section) -> bool;

    /// Check whether `editor` may assign `target`.
    fn can_assign_role(&self, editor: &User, target: Role) -> bool;

    /// String-keyed check.
    ///
    /// # Default Implementation
    ///
    /// Parses the query and dispatches to [`can_ticket`](Self::can_ticket)
    /// or [`can_schedule`](Self::can_schedule). Unknown names are denied.
    fn can_query(&self, user: &User, query: &Query<'_>) -> bool {
        match query.parse() {
            Ok(ParsedQuery::Ticket(action, record)) => self.can_ticket(user, action, record),
            Ok(ParsedQuery::Schedule(action, record)) => self.can_schedule(user, action, record),
            Err(_) => false,
        }
    }

    /// Ticket check as a `Result`.
    ///
    /// # Errors
    ///
    /// [`AccessDenied::Forbidden`] when [`can_ticket`](Self::can_ticket)
    /// returns `false`.
    fn check_ticket(
        &self,
        user: &User,
        action: TicketAction,
        record: Option<&Ticket>,
    ) -> Result<(), AccessDenied> {
        if self.can_ticket(user, action, record) {
            Ok(())
        } else {
            Err(AccessDenied::forbidden(user, ResourceKind::Tickets, action.as_str()))
        }
    }

    /// Schedule check as a `Result`.
    ///
    /// # Errors
    ///
    /// [`AccessDenied::Forbidden`] when [`can_schedule`](Self::can_schedule)
    /// returns `false`.
    fn check_schedule(
        &self,
        user: &User,
        action: ScheduleAction,
        record: Option<&Schedule>,
    ) -> Result<(), AccessDenied> {
        if self.can_schedule(user, action, record) {
            Ok(())
        } else {
            Err(AccessDenied::forbidden(user, ResourceKind::Schedules, action.as_str()))
        }
    }
}

/// The built-in rule table with no side effects.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticPolicy;

impl PermissionPolicy for StaticPolicy {
    fn can_ticket(&self, user: &User, action: TicketAction, record: Option<&Ticket>) -> bool {
        crate::has_permission(user, action, record)
    }

    fn can_schedule(
        &self,
        user: &User,
        action: ScheduleAction,
        record: Option<&Schedule>,
    ) -> bool {
        crate::has_permission(user, action, record)
    }

    fn can_enter_section(&self, user: &User, section: Section) -> bool {
        crate::can_enter_section(user, section)
    }

    fn can_assign_role(&self, editor: &User, target: Role) -> bool {
        crate::can_assign_role(editor, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PermissivePolicy;

    impl PermissionPolicy for PermissivePolicy {
        fn can_ticket(&self, _: &User, _: TicketAction, _: Option<&Ticket>) -> bool {
            true
        }
        fn can_schedule(&self, _: &User, _: ScheduleAction, _: Option<&Schedule>) -> bool {
            true
        }
        fn can_enter_section(&self, _: &User, _: Section) -> bool {
            true
        }
        fn can_assign_role(&self, _: &User, _: Role) -> bool {
            true
        }
    }

    fn employee() -> User {
        User::new("u1", Role::Employee, Some("c1"))
    }

    #[test]
    fn static_policy_follows_table() {
        let policy = StaticPolicy;
        let user = employee();
        let own = Ticket::new("u1", Some("c1"));

        assert!(policy.can_ticket(&user, TicketAction::View, Some(&own)));
        assert!(!policy.can_ticket(&user, TicketAction::Close, Some(&own)));
        assert!(policy.can_schedule(&user, ScheduleAction::Create, None));
        assert!(!policy.can_schedule(&user, ScheduleAction::Finalize, None));
        assert!(!policy.can_enter_section(&user, Section::Management));
        assert!(!policy.can_assign_role(&user, Role::Employee));
    }

    #[test]
    fn default_can_query_dispatches() {
        let policy = StaticPolicy;
        let user = employee();
        let own = Ticket::new("u1", Some("c1"));

        assert!(policy.can_query(&user, &Query::new("tickets", "respond").with_record(&own)));
        assert!(!policy.can_query(&user, &Query::new("tickets", "archive").with_record(&own)));
        assert!(!policy.can_query(&user, &Query::new("payroll", "view")));
    }

    #[test]
    fn can_query_still_denies_unknown_names_when_permissive() {
        let policy = PermissivePolicy;
        let user = employee();
        assert!(policy.can_query(&user, &Query::new("schedules", "finalize")));
        assert!(!policy.can_query(&user, &Query::new("schedules", "close")));
    }

    #[test]
    fn default_check_wraps_can() {
        let policy = StaticPolicy;
        let user = employee();
        let err = policy
            .check_schedule(&user, ScheduleAction::Delete, None)
            .expect_err("denied");
        assert_eq!(err.status_code(), 403);
        assert!(PermissivePolicy
            .check_ticket(&user, TicketAction::Delete, None)
            .is_ok());
    }

    #[test]
    fn trait_object_works() {
        let policy: Box<dyn PermissionPolicy> = Box::new(StaticPolicy);
        let owner = User::new("u1", Role::Owner, Some("c1"));
        for action in ScheduleAction::ALL {
            assert!(policy.can_schedule(&owner, *action, None));
        }
    }
}
