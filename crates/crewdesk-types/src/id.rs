//! Identifier types for CrewDesk.
//!
//! Identifiers are opaque strings on the wire. The backing store hands
//! out UUIDs, but the access rules only ever compare identifiers for
//! equality, so any non-empty string is accepted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an existing identifier.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Creates a fresh identifier backed by a random UUID v4.
            #[must_use]
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Returns the raw identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, ":{}"), self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Identifier of a [`User`](crate::User).
    ///
    /// # Example
    ///
    /// ```
    /// use crewdesk_types::UserId;
    ///
    /// let id = UserId::new("u1");
    /// assert_eq!(id.as_str(), "u1");
    /// assert_eq!(id.to_string(), "user:u1");
    /// ```
    UserId,
    "user"
);

string_id!(
    /// Identifier of a tenant company.
    ///
    /// A user's `company_id` and a record's `company_id` are compared with
    /// this type to decide "same company" rules.
    CompanyId,
    "company"
);

string_id!(
    /// Identifier of a help [`Ticket`](crate::Ticket).
    TicketId,
    "ticket"
);

string_id!(
    /// Identifier of a [`Schedule`](crate::Schedule) entry.
    ScheduleId,
    "schedule"
);

string_id!(
    /// Identifier of a [`TicketResponse`](crate::TicketResponse).
    ResponseId,
    "response"
);
