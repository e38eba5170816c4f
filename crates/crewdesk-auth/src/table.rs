//! The role table.
//!
//! Written as exhaustive `match` arms over `(Role, Action)` so that a
//! new role or action fails to compile until every cell is decided.
//! `None` is an explicit "no rule" cell and is denied.
//!
//! # Tickets
//!
//! | Role | view | create | delete | close | respond |
//! |------|------|--------|--------|-------|---------|
//! | Admin | no company | false | no company | no company | no company |
//! | Owner | self or same company | true | same company | same company | self or same company |
//! | Leader | self or same company | true | same company | same company | self or same company |
//! | Employee | self | true | false | false | self |
//!
//! # Schedules
//!
//! | Role | view | create | delete | finalize |
//! |------|------|--------|--------|----------|
//! | Owner | true | true | true | true |
//! | Leader | true | true | true | true |
//! | Employee | true | true | false | false |
//! | Admin | no rule | no rule | no rule | no rule |

use crate::{Resource, ResourceKind, Rule, ScheduleAction, TicketAction};
use crewdesk_types::{Role, Schedule, Ticket};

impl Resource for Ticket {
    const KIND: ResourceKind = ResourceKind::Tickets;
    type Action = TicketAction;

    fn rule(role: Role, action: TicketAction) -> Option<Rule<Self>> {
        use TicketAction::{Close, Create, Delete, Respond, View};

        let rule = match (role, action) {
            // Admins only handle tickets addressed to the platform.
            (Role::Admin, View | Delete | Close | Respond) => Rule::platform(),
            (Role::Admin, Create) => Rule::Literal(false),

            (Role::Owner | Role::Leader, View | Respond) => Rule::owner_or_company(),
            (Role::Owner | Role::Leader, Create) => Rule::Literal(true),
            (Role::Owner | Role::Leader, Delete | Close) => Rule::company(),

            (Role::Employee, View | Respond) => Rule::owner(),
            (Role::Employee, Create) => Rule::Literal(true),
            (Role::Employee, Delete | Close) => Rule::Literal(false),
        };
        Some(rule)
    }
}

impl Resource for Schedule {
    const KIND: ResourceKind = ResourceKind::Schedules;
    type Action = ScheduleAction;

    fn rule(role: Role, action: ScheduleAction) -> Option<Rule<Self>> {
        use ScheduleAction::{Create, Delete, Finalize, View};

        match (role, action) {
            (Role::Owner | Role::Leader, View | Create | Delete | Finalize) => {
                Some(Rule::Literal(true))
            }
            (Role::Employee, View | Create) => Some(Rule::Literal(true)),
            (Role::Employee, Delete | Finalize) => Some(Rule::Literal(false)),
            // No schedule rules for admins; left open pending product review.
            (Role::Admin, _) => None,
        }
    }
}
