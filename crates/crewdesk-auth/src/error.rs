//! Access denied error type.
//!
//! [`AccessDenied`] covers the three refusal surfaces:
//!
//! ```text
//! record actions   ──► Forbidden           (rule table)
//! navbar sections  ──► SectionDenied       (minimum tier)
//! employee editor  ──► RoleNotAssignable   (assignable tiers)
//! ```
//!
//! All three map to HTTP 403 at the boundary.

use crate::{ResourceKind, Section};
use crewdesk_types::{ErrorCode, Role, RoleCode, User, UserId};
use thiserror::Error;

/// Refusal of a user request.
///
/// # Example
///
/// ```
/// use crewdesk_auth::{AccessDenied, ResourceKind};
/// use crewdesk_types::{Role, User};
///
/// let user = User::new("u1", Role::Employee, Some("c1"));
/// let err = AccessDenied::forbidden(&user, ResourceKind::Tickets, "close");
///
/// assert_eq!(err.status_code(), 403);
/// assert_eq!(err.surface(), "record");
/// assert!(err.to_string().contains("close"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessDenied {
    /// The rule table does not allow the action.
    #[error("forbidden: {user} ({role}) may not {action} {resource}")]
    Forbidden {
        user: UserId,
        role: RoleCode,
        resource: ResourceKind,
        action: String,
    },

    /// The user's tier is below the section minimum.
    #[error("forbidden: {user} ({role}) may not enter {section}, requires {required}")]
    SectionDenied {
        user: UserId,
        role: RoleCode,
        section: Section,
        required: Role,
    },

    /// The editor may not grant the target tier.
    #[error("forbidden: {user} ({role}) may not assign role {target}")]
    RoleNotAssignable {
        user: UserId,
        role: RoleCode,
        target: RoleCode,
    },
}

impl AccessDenied {
    /// Builds a [`Self::Forbidden`] for `user`.
    #[must_use]
    pub fn forbidden(user: &User, resource: ResourceKind, action: impl Into<String>) -> Self {
        Self::Forbidden {
            user: user.id.clone(),
            role: user.role,
            resource,
            action: action.into(),
        }
    }

    /// HTTP status for the boundary.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        403
    }

    /// Which surface refused.
    #[must_use]
    pub fn surface(&self) -> &'static str {
        match self {
            Self::Forbidden { .. } => "record",
            Self::SectionDenied { .. } => "section",
            Self::RoleNotAssignable { .. } => "assignment",
        }
    }
}

impl ErrorCode for AccessDenied {
    fn code(&self) -> &'static str {
        match self {
            Self::Forbidden { .. } => "AUTH_FORBIDDEN",
            Self::SectionDenied { .. } => "AUTH_SECTION_DENIED",
            Self::RoleNotAssignable { .. } => "AUTH_ROLE_NOT_ASSIGNABLE",
        }
    }

    fn is_recoverable(&self) -> bool {
        false
    }
}
