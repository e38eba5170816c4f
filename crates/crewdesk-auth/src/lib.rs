//! Role and ownership based permissions for Crewdesk.
//!
//! Every access decision in the app goes through this crate. It answers
//! one question: may this user take this action on this resource,
//! optionally given the specific record?
//!
//! # Model
//!
//! ```text
//! Decision = Rule(role, resource, action) evaluated on (user, record?)
//! ```
//!
//! | Piece | Type | Role |
//! |-------|------|------|
//! | [`ResourceKind`] | Enum | tickets, schedules |
//! | [`TicketAction`], [`ScheduleAction`] | Enums | closed action sets per kind |
//! | [`Rule`] | Enum | literal answer or ownership predicate |
//! | [`Resource`] | Trait | the table, per record type |
//! | [`PermissionPolicy`] | Trait | injectable seam for callers |
//!
//! # Crate Architecture
//!
//! ```text
//! crewdesk-types  (Role, User, Ticket, Schedule)
//!        ↑
//! crewdesk-auth   ◄── THIS CRATE
//! (rule table, has_permission, sections, role assignment)
//!        ↑
//! crewdesk-runtime (config, AuditedPolicy, JSON queries)
//!        ↑
//! crewdesk-cli
//! ```
//!
//! # Rules of evaluation
//!
//! - **Deny by default**: unknown role, resource, or action, or a
//!   missing rule, is a denial. Nothing here panics or errors.
//! - **Predicates need a record**: without one they deny.
//! - **Literals ignore the record**.
//!
//! # Example
//!
//! ```
//! use crewdesk_auth::{has_permission, ScheduleAction, TicketAction};
//! use crewdesk_types::{Role, Schedule, Ticket, User};
//!
//! let leader = User::new("u1", Role::Leader, Some("c1"));
//! let ticket = Ticket::new("u2", Some("c1"));
//!
//! assert!(has_permission(&leader, TicketAction::Close, Some(&ticket)));
//! assert!(has_permission::<Schedule>(&leader, ScheduleAction::Finalize, None));
//! ```

pub mod action;
pub mod assign;
pub mod error;
pub mod permission;
pub mod policy;
pub mod resource;
pub mod rule;
pub mod section;
mod table;

pub use action::ActionSet;
pub use assign::{assignable_roles, can_assign_role, require_assignable};
pub use error::AccessDenied;
pub use permission::{
    allowed_actions, check, explain, explain_query, has_permission, require, ParsedQuery, Query,
    RecordRef,
};
pub use policy::{PermissionPolicy, StaticPolicy};
pub use resource::{
    declared, ParseError, Resource, ResourceAction, ResourceKind, ScheduleAction, TicketAction,
};
pub use rule::{Rule, Verdict};
pub use section::{
    can_enter_section, require_section, visible_sections, Section, SectionError,
};
