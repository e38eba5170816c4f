//! Audited permission policy.

use crate::config::AuditConfig;
use crewdesk_auth::{
    PermissionPolicy, ResourceAction, ResourceKind, ScheduleAction, Section, StaticPolicy,
    TicketAction,
};
use crewdesk_types::{Role, Schedule, Ticket, User};

/// A [`PermissionPolicy`] that logs every decision of an inner policy.
///
/// Decisions are never changed; only the audit trail is added.
///
/// | Outcome | Level | When |
/// |---------|-------|------|
/// | allowed | `debug` | `audit.enabled` and `audit.log_allowed` |
/// | denied | `warn` | `audit.enabled` |
///
/// Each event carries `user` in its prefixed display form (`user:u1`),
/// the raw `role` code, `company`, `resource`, `action` and `has_record`.
///
/// # Example
///
/// ```
/// use crewdesk_auth::{PermissionPolicy, TicketAction};
/// use crewdesk_runtime::auth::AuditedPolicy;
/// use crewdesk_runtime::config::AuditConfig;
/// use crewdesk_types::{Role, Ticket, User};
///
/// let policy = AuditedPolicy::new(AuditConfig::default());
/// let employee = User::new("u1", Role::Employee, Some("c1"));
/// let ticket = Ticket::new("u2", Some("c1"));
///
/// // Denied, and logged at warn.
/// assert!(!policy.can_ticket(&employee, TicketAction::View, Some(&ticket)));
/// ```
#[derive(Debug, Clone)]
pub struct AuditedPolicy<P = StaticPolicy> {
    inner: P,
    audit: AuditConfig,
}

impl AuditedPolicy<StaticPolicy> {
    /// Audits the built-in rule table.
    #[must_use]
    pub fn new(audit: AuditConfig) -> Self {
        Self::wrap(StaticPolicy, audit)
    }
}

impl<P: PermissionPolicy> AuditedPolicy<P> {
    /// Audits an arbitrary policy.
    #[must_use]
    pub fn wrap(inner: P, audit: AuditConfig) -> Self {
        Self { inner, audit }
    }

    /// The wrapped policy.
    #[must_use]
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// The audit settings in effect.
    #[must_use]
    pub fn audit_config(&self) -> &AuditConfig {
        &self.audit
    }

    fn record_action(
        &self,
        user: &User,
        resource: ResourceKind,
        action: &str,
        has_record: bool,
        allowed: bool,
    ) {
        if !self.audit.enabled {
            return;
        }
        if allowed {
            if self.audit.log_allowed {
                tracing::debug!(
                    user = %user.id,
                    role = user.role.0,
                    company = ?user.company_id.as_ref().map(|c| c.as_str()),
                    resource = %resource,
                    action = action,
                    has_record,
                    "access allowed"
                );
            }
        } else {
            tracing::warn!(
                user = %user.id,
                role = user.role.0,
                company = ?user.company_id.as_ref().map(|c| c.as_str()),
                resource = %resource,
                action = action,
                has_record,
                "access denied"
            );
        }
    }
}

impl<P: PermissionPolicy> PermissionPolicy for AuditedPolicy<P> {
    fn can_ticket(&self, user: &User, action: TicketAction, record: Option<&Ticket>) -> bool {
        let allowed = self.inner.can_ticket(user, action, record);
        self.record_action(
            user,
            ResourceKind::Tickets,
            action.as_str(),
            record.is_some(),
            allowed,
        );
        allowed
    }

    fn can_schedule(
        &self,
        user: &User,
        action: ScheduleAction,
        record: Option<&Schedule>,
    ) -> bool {
        let allowed = self.inner.can_schedule(user, action, record);
        self.record_action(
            user,
            ResourceKind::Schedules,
            action.as_str(),
            record.is_some(),
            allowed,
        );
        allowed
    }

    fn can_enter_section(&self, user: &User, section: Section) -> bool {
        let allowed = self.inner.can_enter_section(user, section);
        if self.audit.enabled {
            if !allowed {
                tracing::warn!(
                    user = %user.id,
                    role = user.role.0,
                    section = %section,
                    required = %section.min_role(),
                    "section denied"
                );
            } else if self.audit.log_allowed {
                tracing::debug!(user = %user.id, section = %section, "section allowed");
            }
        }
        allowed
    }

    fn can_assign_role(&self, editor: &User, target: Role) -> bool {
        let allowed = self.inner.can_assign_role(editor, target);
        if self.audit.enabled {
            if !allowed {
                tracing::warn!(
                    user = %editor.id,
                    role = editor.role.0,
                    target = %target,
                    "role assignment denied"
                );
            } else if self.audit.log_allowed {
                tracing::debug!(user = %editor.id, target = %target, "role assignment allowed");
            }
        }
        allowed
    }
}
