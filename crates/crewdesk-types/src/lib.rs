//! Core types for CrewDesk.
//!
//! This crate holds the data every other layer agrees on: identifiers,
//! the four role tiers, users and the records that access rules read.
//! It contains no access logic.
//!
//! # Crate Architecture
//!
//! ```text
//! crewdesk-types    : IDs, Role, User, records, ErrorCode  ◄── HERE
//!        ↑
//! crewdesk-auth     : rule table, has_permission, sections
//!        ↑
//! crewdesk-runtime  : config, audited policy, JSON boundary
//!        ↑
//! crewdesk-cli      : `crewdesk` binary
//! ```
//!
//! # Example
//!
//! ```
//! use crewdesk_types::{Owned, Role, Ticket, User};
//!
//! let user = User::new("u1", Role::Employee, Some("c1"));
//! let ticket = Ticket::new("u1", Some("c1"));
//!
//! assert_eq!(ticket.owner_id(), &user.id);
//! assert_eq!(ticket.tenant_id(), user.company_id.as_ref());
//!
//! // Identifiers display with their kind prefix.
//! assert_eq!(user.id.to_string(), "user:u1");
//! assert_eq!(user.to_string(), "user:u1@employee");
//! ```

mod error;
mod id;
mod record;
mod role;
mod user;

pub use error::{assert_error_code, assert_error_codes, ErrorCode};
pub use id::{CompanyId, ResponseId, ScheduleId, TicketId, UserId};
pub use record::{Company, Owned, Schedule, ScheduleCategory, Ticket, TicketResponse};
pub use role::{Role, RoleCode, RoleError};
pub use user::User;
