//! JSON decision boundary.
//!
//! Request handlers receive loosely typed JSON. [`AccessQuery`] is that
//! payload; [`evaluate`] turns it into a [`Decision`] without ever
//! failing:
//!
//! ```text
//! AccessQuery { user, resource, action, record? }
//!        │
//!        ├── record decoded per resource (bad record → absent, warn)
//!        │
//!        ▼
//! PermissionPolicy::can_query  ──►  Decision { allowed, resource, action, reason }
//! ```

use crewdesk_auth::{explain_query, PermissionPolicy, Query, RecordRef, ResourceKind, Verdict};
use crewdesk_types::{Schedule, Ticket, User};
use serde::{Deserialize, Serialize};

/// A permission question as received over the wire.
///
/// # Example
///
/// ```
/// use crewdesk_runtime::query::AccessQuery;
///
/// let query: AccessQuery = serde_json::from_str(r#"{
///     "user": { "id": "u1", "role": 1, "companyId": "c1" },
///     "resource": "tickets",
///     "action": "view",
///     "record": { "id": "t1", "userId": "u1", "companyId": "c1" }
/// }"#).unwrap();
///
/// assert_eq!(query.resource, "tickets");
/// assert!(query.record.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessQuery {
    pub user: User,
    pub resource: String,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<serde_json::Value>,
}

impl AccessQuery {
    /// Creates a query without a record.
    #[must_use]
    pub fn new(user: User, resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            user,
            resource: resource.into(),
            action: action.into(),
            record: None,
        }
    }

    /// Attaches a raw record.
    #[must_use]
    pub fn with_record(mut self, record: serde_json::Value) -> Self {
        self.record = Some(record);
        self
    }
}

/// Outcome of an [`AccessQuery`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub allowed: bool,
    pub resource: String,
    pub action: String,
    pub reason: Verdict,
}

/// A record decoded from JSON, owned for the lifetime of one evaluation.
#[derive(Debug, Clone)]
enum DecodedRecord {
    Ticket(Ticket),
    Schedule(Schedule),
}

impl DecodedRecord {
    fn as_record_ref(&self) -> RecordRef<'_> {
        match self {
            Self::Ticket(ticket) => RecordRef::Ticket(ticket),
            Self::Schedule(schedule) => RecordRef::Schedule(schedule),
        }
    }
}

fn decode_record(kind: ResourceKind, value: &serde_json::Value) -> Option<DecodedRecord> {
    let decoded = match kind {
        ResourceKind::Tickets => {
            serde_json::from_value::<Ticket>(value.clone()).map(DecodedRecord::Ticket)
        }
        ResourceKind::Schedules => {
            serde_json::from_value::<Schedule>(value.clone()).map(DecodedRecord::Schedule)
        }
    };
    match decoded {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!(resource = %kind, error = %e, "malformed record treated as absent");
            None
        }
    }
}

/// Evaluates `query` against `policy`.
///
/// `allowed` is the policy's answer. `reason` explains it from the
/// built-in rule table; when a custom policy overrides the table,
/// `reason` is `granted` for an allow and `rule_denied` for a deny the
/// table would have granted.
///
/// ```
/// use crewdesk_auth::{StaticPolicy, Verdict};
/// use crewdesk_runtime::query::{evaluate, AccessQuery};
/// use crewdesk_types::{Role, User};
///
/// let owner = User::new("u1", Role::Owner, Some("c1"));
/// let decision = evaluate(&StaticPolicy, &AccessQuery::new(owner, "payroll", "view"));
///
/// assert!(!decision.allowed);
/// assert_eq!(decision.reason, Verdict::UnknownResource);
/// ```
#[must_use]
pub fn evaluate<P: PermissionPolicy + ?Sized>(policy: &P, query: &AccessQuery) -> Decision {
    let decoded = match (query.resource.parse::<ResourceKind>(), &query.record) {
        (Ok(kind), Some(value)) => decode_record(kind, value),
        _ => None,
    };

    let mut typed = Query::new(&query.resource, &query.action);
    typed.record = decoded.as_ref().map(DecodedRecord::as_record_ref);

    let allowed = policy.can_query(&query.user, &typed);
    let verdict = explain_query(&query.user, &typed);
    let reason = match (allowed, verdict.is_granted()) {
        (true, _) => Verdict::Granted,
        (false, false) => verdict,
        (false, true) => Verdict::RuleDenied,
    };

    Decision {
        allowed,
        resource: query.resource.clone(),
        action: query.action.clone(),
        reason,
    }
}
