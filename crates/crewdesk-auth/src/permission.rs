//! Permission checks.
//!
//! The evaluation order is the same for every entry point:
//!
//! 1. Resolve the user's role code; an unknown tier is denied.
//! 2. Look up the rule for `(role, action)`; no rule is denied.
//! 3. A literal rule answers directly and ignores the record.
//! 4. A predicate rule is denied without a record, otherwise evaluated.
//!
//! Two surfaces share that order:
//!
//! - Typed: [`has_permission`], [`explain`], [`allowed_actions`], [`require`]
//!   take a concrete record type and its action enum.
//! - Dynamic: [`check`] and [`explain_query`] take a [`Query`] with string
//!   resource/action names, for callers that only hold request data.
//!
//! # Example
//!
//! ```
//! use crewdesk_auth::{has_permission, TicketAction};
//! use crewdesk_types::{Role, Ticket, User};
//!
//! let employee = User::new("u1", Role::Employee, Some("c1"));
//! let own = Ticket::new("u1", Some("c1"));
//! let other = Ticket::new("u2", Some("c1"));
//!
//! assert!(has_permission(&employee, TicketAction::View, Some(&own)));
//! assert!(!has_permission(&employee, TicketAction::View, Some(&other)));
//! assert!(!has_permission::<Ticket>(&employee, TicketAction::View, None));
//! ```

use crate::{
    AccessDenied, ActionSet, ParseError, Resource, ResourceAction, ResourceKind, ScheduleAction,
    TicketAction, Verdict,
};
use crewdesk_types::{Schedule, Ticket, User};

/// Evaluates `action` on `R` for `user` and reports the reason.
#[must_use]
pub fn explain<R: Resource>(user: &User, action: R::Action, record: Option<&R>) -> Verdict {
    let Some(role) = user.role() else {
        return Verdict::UnknownRole;
    };
    match R::rule(role, action) {
        Some(rule) => rule.verdict(user, record),
        None => Verdict::NoRule,
    }
}

/// Returns `true` only if an explicit rule exists and allows the action.
#[must_use]
pub fn has_permission<R: Resource>(user: &User, action: R::Action, record: Option<&R>) -> bool {
    explain(user, action, record).is_granted()
}

/// The actions on `R` that `user` may take, given `record`.
///
/// ```
/// use crewdesk_auth::{allowed_actions, ActionSet};
/// use crewdesk_types::{Role, Ticket, User};
///
/// let leader = User::new("u1", Role::Leader, Some("c1"));
/// let colleague_ticket = Ticket::new("u2", Some("c1"));
///
/// assert_eq!(allowed_actions(&leader, Some(&colleague_ticket)), ActionSet::TICKETS);
/// assert_eq!(allowed_actions::<Ticket>(&leader, None), ActionSet::CREATE);
/// ```
#[must_use]
pub fn allowed_actions<R: Resource>(user: &User, record: Option<&R>) -> ActionSet {
    R::Action::ALL
        .iter()
        .filter(|action| has_permission(user, **action, record))
        .fold(ActionSet::empty(), |set, action| set | action.flag())
}

/// Hard-refusal form of [`has_permission`] for mutations.
///
/// # Errors
///
/// Returns [`AccessDenied::Forbidden`] whenever the check is not granted.
pub fn require<R: Resource>(
    user: &User,
    action: R::Action,
    record: Option<&R>,
) -> Result<(), AccessDenied> {
    if has_permission(user, action, record) {
        Ok(())
    } else {
        Err(AccessDenied::forbidden(user, R::KIND, action.as_str()))
    }
}

/// A borrowed record of any kind.
#[derive(Debug, Clone, Copy)]
pub enum RecordRef<'a> {
    Ticket(&'a Ticket),
    Schedule(&'a Schedule),
}

impl RecordRef<'_> {
    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Ticket(_) => ResourceKind::Tickets,
            Self::Schedule(_) => ResourceKind::Schedules,
        }
    }
}

impl<'a> From<&'a Ticket> for RecordRef<'a> {
    fn from(ticket: &'a Ticket) -> Self {
        Self::Ticket(ticket)
    }
}

impl<'a> From<&'a Schedule> for RecordRef<'a> {
    fn from(schedule: &'a Schedule) -> Self {
        Self::Schedule(schedule)
    }
}

/// A string-keyed permission query.
#[derive(Debug, Clone, Copy)]
pub struct Query<'a> {
    pub resource: &'a str,
    pub action: &'a str,
    pub record: Option<RecordRef<'a>>,
}

impl<'a> Query<'a> {
    #[must_use]
    pub fn new(resource: &'a str, action: &'a str) -> Self {
        Self {
            resource,
            action,
            record: None,
        }
    }

    #[must_use]
    pub fn with_record(mut self, record: impl Into<RecordRef<'a>>) -> Self {
        self.record = Some(record.into());
        self
    }

    /// Resolves names into a typed query.
    ///
    /// A record whose kind differs from the resource is dropped, so a
    /// predicate rule sees no record and denies.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] for an unknown resource, or an action the
    /// resource does not declare.
    pub fn parse(&self) -> Result<ParsedQuery<'a>, ParseError> {
        match self.resource.parse::<ResourceKind>()? {
            ResourceKind::Tickets => {
                let action = self.action.parse::<TicketAction>()?;
                let record = match self.record {
                    Some(RecordRef::Ticket(ticket)) => Some(ticket),
                    _ => None,
                };
                Ok(ParsedQuery::Ticket(action, record))
            }
            ResourceKind::Schedules => {
                let action = self.action.parse::<ScheduleAction>()?;
                let record = match self.record {
                    Some(RecordRef::Schedule(schedule)) => Some(schedule),
                    _ => None,
                };
                Ok(ParsedQuery::Schedule(action, record))
            }
        }
    }
}

/// A [`Query`] with resolved resource and action.
#[derive(Debug, Clone, Copy)]
pub enum ParsedQuery<'a> {
    Ticket(TicketAction, Option<&'a Ticket>),
    Schedule(ScheduleAction, Option<&'a Schedule>),
}

impl ParsedQuery<'_> {
    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Ticket(..) => ResourceKind::Tickets,
            Self::Schedule(..) => ResourceKind::Schedules,
        }
    }

    #[must_use]
    pub fn action_name(&self) -> &'static str {
        match self {
            Self::Ticket(action, _) => action.as_str(),
            Self::Schedule(action, _) => action.as_str(),
        }
    }
}

/// Evaluates a string-keyed query and reports the reason.
#[must_use]
pub fn explain_query(user: &User, query: &Query<'_>) -> Verdict {
    match query.parse() {
        Ok(ParsedQuery::Ticket(action, record)) => explain(user, action, record),
        Ok(ParsedQuery::Schedule(action, record)) => explain(user, action, record),
        Err(ParseError::UnknownResource(_)) => Verdict::UnknownResource,
        Err(ParseError::UnknownAction { .. }) => Verdict::UnknownAction,
    }
}

/// String-keyed form of [`has_permission`].
///
/// ```
/// use crewdesk_auth::{check, Query};
/// use crewdesk_types::{Role, Ticket, User};
///
/// let owner = User::new("u1", Role::Owner, Some("c1"));
/// let ticket = Ticket::new("u2", Some("c1"));
///
/// assert!(check(&owner, &Query::new("tickets", "close").with_record(&ticket)));
/// assert!(!check(&owner, &Query::new("tickets", "archive").with_record(&ticket)));
/// assert!(!check(&owner, &Query::new("payroll", "view")));
/// ```
#[must_use]
pub fn check(user: &User, query: &Query<'_>) -> bool {
    explain_query(user, query).is_granted()
}
