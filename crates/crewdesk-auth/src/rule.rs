//! Rule values and the ownership predicates they use.
//!
//! A [`Rule`] is either a literal answer for a role or a predicate over
//! the acting user and the target record. Evaluation never panics and
//! never errors: a predicate without a record is denied.

use crewdesk_types::{Owned, User};
use serde::{Deserialize, Serialize};

/// Predicate signature. Plain `fn` pointers keep rules `Copy`, `Send`
/// and `Sync` and rule out captured state.
pub type Predicate<R> = fn(&User, &R) -> bool;

/// A single entry of the rule table.
///
/// # Example
///
/// ```
/// use crewdesk_auth::Rule;
/// use crewdesk_types::{Role, Ticket, User};
///
/// let user = User::new("u1", Role::Employee, Some("c1"));
/// let own = Ticket::new("u1", Some("c1"));
///
/// let literal: Rule<Ticket> = Rule::Literal(true);
/// assert!(literal.evaluate(&user, None));
///
/// let owner_only: Rule<Ticket> = Rule::owner();
/// assert!(owner_only.evaluate(&user, Some(&own)));
/// assert!(!owner_only.evaluate(&user, None));
/// ```
pub enum Rule<R> {
    /// Unconditional answer; the record is ignored.
    Literal(bool),
    /// Record-dependent answer; denied when no record is supplied.
    Predicate {
        /// Short label shown in rule listings.
        name: &'static str,
        check: Predicate<R>,
    },
}

// Manual impls: derives would require `R: Clone`/`R: Debug`.
impl<R> Clone for Rule<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Rule<R> {}

impl<R> std::fmt::Debug for Rule<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Predicate { name, .. } => f.debug_tuple("Predicate").field(name).finish(),
        }
    }
}

impl<R> Rule<R> {
    /// Returns `true` if evaluation depends on the record.
    #[must_use]
    pub fn requires_record(&self) -> bool {
        matches!(self, Self::Predicate { .. })
    }

    /// `"true"`, `"false"`, or the predicate label.
    #[must_use]
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Literal(true) => "true",
            Self::Literal(false) => "false",
            Self::Predicate { name, .. } => *name,
        }
    }

    /// Evaluates the rule and reports why.
    #[must_use]
    pub fn verdict(&self, user: &User, record: Option<&R>) -> Verdict {
        match (self, record) {
            (Self::Literal(true), _) => Verdict::Granted,
            (Self::Literal(false), _) => Verdict::RuleDenied,
            (Self::Predicate { .. }, None) => Verdict::MissingRecord,
            (Self::Predicate { check, .. }, Some(record)) => {
                if check(user, record) {
                    Verdict::Granted
                } else {
                    Verdict::PredicateFailed
                }
            }
        }
    }

    /// Evaluates the rule.
    #[must_use]
    pub fn evaluate(&self, user: &User, record: Option<&R>) -> bool {
        self.verdict(user, record).is_granted()
    }
}

/// Why a check came out the way it did.
///
/// Only [`Verdict::Granted`] allows; every other variant is a denial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Granted,
    UnknownRole,
    UnknownResource,
    UnknownAction,
    NoRule,
    MissingRecord,
    PredicateFailed,
    RuleDenied,
}

impl Verdict {
    #[must_use]
    pub fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }

    /// Stable snake_case name, as serialized.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Granted => "granted",
            Self::UnknownRole => "unknown_role",
            Self::UnknownResource => "unknown_resource",
            Self::UnknownAction => "unknown_action",
            Self::NoRule => "no_rule",
            Self::MissingRecord => "missing_record",
            Self::PredicateFailed => "predicate_failed",
            Self::RuleDenied => "rule_denied",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<R: Owned> Rule<R> {
    /// Allowed when the user owns the record.
    #[must_use]
    pub fn owner() -> Self {
        Self::Predicate {
            name: "self",
            check: is_self,
        }
    }

    /// Allowed when the record belongs to the user's company.
    #[must_use]
    pub fn company() -> Self {
        Self::Predicate {
            name: "same company",
            check: same_company,
        }
    }

    /// Allowed for the owner or anyone in the record's company.
    #[must_use]
    pub fn owner_or_company() -> Self {
        Self::Predicate {
            name: "self or same company",
            check: self_or_same_company,
        }
    }

    /// Allowed only for records addressed to the platform.
    #[must_use]
    pub fn platform() -> Self {
        Self::Predicate {
            name: "no company",
            check: platform_scoped,
        }
    }
}

/// The user created or is assigned the record.
pub fn is_self<R: Owned>(user: &User, record: &R) -> bool {
    record.owner_id() == &user.id
}

/// The record belongs to the user's company.
///
/// Compares the optional tenants as-is: a user without a company
/// matches records without a company.
pub fn same_company<R: Owned>(user: &User, record: &R) -> bool {
    user.company_id.as_ref() == record.tenant_id()
}

/// [`is_self`] or [`same_company`].
pub fn self_or_same_company<R: Owned>(user: &User, record: &R) -> bool {
    is_self(user, record) || same_company(user, record)
}

/// The record is addressed to the platform rather than a company.
pub fn platform_scoped<R: Owned>(_user: &User, record: &R) -> bool {
    record.tenant_id().is_none()
}
