//! Resource kinds and their declared actions.
//!
//! Each resource kind has its own closed action enum, so an action that
//! a kind does not declare (`close` on schedules, `archive` anywhere)
//! cannot be expressed in typed code. String callers go through
//! [`FromStr`], where an undeclared action is a [`ParseError`] and the
//! check that wraps it denies.

use crate::{ActionSet, Rule};
use crewdesk_types::{ErrorCode, Role};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::str::FromStr;
use thiserror::Error;

/// A category of record subject to access checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Tickets,
    Schedules,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Tickets, ResourceKind::Schedules];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tickets => "tickets",
            Self::Schedules => "schedules",
        }
    }

    /// The actions this kind declares.
    #[must_use]
    pub fn declared_actions(self) -> ActionSet {
        match self {
            Self::Tickets => ActionSet::TICKETS,
            Self::Schedules => ActionSet::SCHEDULES,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tickets" | "ticket" => Ok(Self::Tickets),
            "schedules" | "schedule" => Ok(Self::Schedules),
            _ => Err(ParseError::UnknownResource(s.to_string())),
        }
    }
}

/// Failure to resolve a resource or action name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown resource '{0}'")]
    UnknownResource(String),

    #[error("action '{action}' is not declared for {resource}")]
    UnknownAction {
        resource: ResourceKind,
        action: String,
    },
}

impl ErrorCode for ParseError {
    fn code(&self) -> &'static str {
        match self {
            Self::UnknownResource(_) => "AUTH_UNKNOWN_RESOURCE",
            Self::UnknownAction { .. } => "AUTH_UNKNOWN_ACTION",
        }
    }

    fn is_recoverable(&self) -> bool {
        false
    }
}

/// An action belonging to one resource kind.
pub trait ResourceAction:
    Copy + Eq + Debug + std::fmt::Display + FromStr<Err = ParseError> + Send + Sync + 'static
{
    /// Every declared action, in table column order.
    const ALL: &'static [Self];

    /// Lowercase action name.
    fn as_str(self) -> &'static str;

    /// The matching [`ActionSet`] flag.
    fn flag(self) -> ActionSet;
}

/// A record type that has a row in the rule table.
///
/// Implemented for `Ticket` and `Schedule`.
pub trait Resource: Sized + 'static {
    /// Which kind this record is.
    const KIND: ResourceKind;

    /// The closed set of actions on this kind.
    type Action: ResourceAction;

    /// Looks up the rule for `(role, action)`. `None` means no rule,
    /// which every caller treats as denied.
    fn rule(role: Role, action: Self::Action) -> Option<Rule<Self>>;
}

macro_rules! resource_actions {
    (
        $(#[$meta:meta])*
        $name:ident for $kind:expr => { $($variant:ident => ($text:literal, $flag:ident)),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl ResourceAction for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }

            fn flag(self) -> ActionSet {
                match self {
                    $(Self::$variant => ActionSet::$flag),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(ParseError::UnknownAction {
                        resource: $kind,
                        action: s.to_string(),
                    }),
                }
            }
        }
    };
}

resource_actions! {
    /// Actions on help tickets.
    TicketAction for ResourceKind::Tickets => {
        View => ("view", VIEW),
        Create => ("create", CREATE),
        Delete => ("delete", DELETE),
        Close => ("close", CLOSE),
        Respond => ("respond", RESPOND),
    }
}

resource_actions! {
    /// Actions on schedule entries.
    ScheduleAction for ResourceKind::Schedules => {
        View => ("view", VIEW),
        Create => ("create", CREATE),
        Delete => ("delete", DELETE),
        Finalize => ("finalize", FINALIZE),
    }
}

/// Returns the declared action flags of `A` as one set.
#[must_use]
pub fn declared<A: ResourceAction>() -> ActionSet {
    A::ALL
        .iter()
        .fold(ActionSet::empty(), |set, action| set | action.flag())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_kind_parse() {
        assert_eq!("tickets".parse::<ResourceKind>(), Ok(ResourceKind::Tickets));
        assert_eq!("Schedules".parse::<ResourceKind>(), Ok(ResourceKind::Schedules));
        assert_eq!("ticket".parse::<ResourceKind>(), Ok(ResourceKind::Tickets));
        assert_eq!(
            "trainings".parse::<ResourceKind>(),
            Err(ParseError::UnknownResource("trainings".into()))
        );
    }

    #[test]
    fn declared_actions_match_enums() {
        assert_eq!(declared::<TicketAction>(), ResourceKind::Tickets.declared_actions());
        assert_eq!(
            declared::<ScheduleAction>(),
            ResourceKind::Schedules.declared_actions()
        );
    }

    #[test]
    fn undeclared_actions_fail_to_parse() {
        assert_eq!("close".parse::<TicketAction>(), Ok(TicketAction::Close));
        assert_eq!(
            "close".parse::<ScheduleAction>(),
            Err(ParseError::UnknownAction {
                resource: ResourceKind::Schedules,
                action: "close".into(),
            })
        );
        assert!("archive".parse::<TicketAction>().is_err());
        assert!("finalize".parse::<TicketAction>().is_err());
    }

    #[test]
    fn action_names_round_trip() {
        for action in TicketAction::ALL {
            assert_eq!(action.as_str().parse::<TicketAction>(), Ok(*action));
            assert_eq!(ActionSet::parse(action.as_str()), Some(action.flag()));
        }
        for action in ScheduleAction::ALL {
            assert_eq!(action.to_string().parse::<ScheduleAction>(), Ok(*action));
        }
    }

    #[test]
    fn parse_error_codes() {
        crewdesk_types::assert_error_codes(
            &[
                ParseError::UnknownResource("x".into()),
                ParseError::UnknownAction {
                    resource: ResourceKind::Tickets,
                    action: "archive".into(),
                },
            ],
            "AUTH_",
        );
    }
}
