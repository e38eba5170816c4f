//! Action sets.
//!
//! [`ActionSet`] is the bitflag form of the actions a resource kind
//! declares, or of the actions a user may take on a given record.
//! It is what a front end consults to decide which affordances to
//! render ("hide the Close item when `CLOSE` is absent").
//!
//! # Example
//!
//! ```
//! use crewdesk_auth::ActionSet;
//!
//! let declared = ActionSet::VIEW | ActionSet::CREATE | ActionSet::DELETE;
//! let granted = ActionSet::VIEW | ActionSet::CREATE;
//!
//! assert!(declared.contains(granted));
//! assert_eq!(declared - granted, ActionSet::DELETE);
//! assert_eq!(granted.to_string(), "VIEW | CREATE");
//! ```

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// A set of actions across all resource kinds.
    ///
    /// | Flag | Tickets | Schedules |
    /// |------|---------|-----------|
    /// | [`VIEW`](Self::VIEW) | yes | yes |
    /// | [`CREATE`](Self::CREATE) | yes | yes |
    /// | [`DELETE`](Self::DELETE) | yes | yes |
    /// | [`CLOSE`](Self::CLOSE) | yes | no |
    /// | [`RESPOND`](Self::RESPOND) | yes | no |
    /// | [`FINALIZE`](Self::FINALIZE) | no | yes |
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ActionSet: u8 {
        const VIEW     = 0b0000_0001;
        const CREATE   = 0b0000_0010;
        const DELETE   = 0b0000_0100;
        const CLOSE    = 0b0000_1000;
        const RESPOND  = 0b0001_0000;
        const FINALIZE = 0b0010_0000;
    }
}

impl ActionSet {
    /// Actions declared for tickets.
    pub const TICKETS: Self = Self::VIEW
        .union(Self::CREATE)
        .union(Self::DELETE)
        .union(Self::CLOSE)
        .union(Self::RESPOND);

    /// Actions declared for schedules.
    pub const SCHEDULES: Self = Self::VIEW
        .union(Self::CREATE)
        .union(Self::DELETE)
        .union(Self::FINALIZE);

    /// Lowercase action names in flag order.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.contains(Self::VIEW) {
            names.push("view");
        }
        if self.contains(Self::CREATE) {
            names.push("create");
        }
        if self.contains(Self::DELETE) {
            names.push("delete");
        }
        if self.contains(Self::CLOSE) {
            names.push("close");
        }
        if self.contains(Self::RESPOND) {
            names.push("respond");
        }
        if self.contains(Self::FINALIZE) {
            names.push("finalize");
        }
        names
    }

    /// Parses a single action name (case-insensitive).
    ///
    /// ```
    /// use crewdesk_auth::ActionSet;
    ///
    /// assert_eq!(ActionSet::parse("Close"), Some(ActionSet::CLOSE));
    /// assert_eq!(ActionSet::parse("archive"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "view" => Some(Self::VIEW),
            "create" => Some(Self::CREATE),
            "delete" => Some(Self::DELETE),
            "close" => Some(Self::CLOSE),
            "respond" => Some(Self::RESPOND),
            "finalize" => Some(Self::FINALIZE),
            _ => None,
        }
    }
}

impl std::fmt::Display for ActionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self.names().iter().map(|n| n.to_uppercase()).collect();
        if names.is_empty() {
            write!(f, "(none)")
        } else {
            write!(f, "{}", names.join(" | "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_sets() {
        assert!(ActionSet::TICKETS.contains(ActionSet::CLOSE | ActionSet::RESPOND));
        assert!(!ActionSet::TICKETS.contains(ActionSet::FINALIZE));
        assert!(ActionSet::SCHEDULES.contains(ActionSet::FINALIZE));
        assert!(!ActionSet::SCHEDULES.contains(ActionSet::CLOSE));
        assert_eq!(
            ActionSet::TICKETS & ActionSet::SCHEDULES,
            ActionSet::VIEW | ActionSet::CREATE | ActionSet::DELETE
        );
    }

    #[test]
    fn names_follow_flag_order() {
        let set = ActionSet::FINALIZE | ActionSet::VIEW;
        assert_eq!(set.names(), vec!["view", "finalize"]);
        assert!(ActionSet::empty().names().is_empty());
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(ActionSet::parse("VIEW"), Some(ActionSet::VIEW));
        assert_eq!(ActionSet::parse("archive"), None);
        assert_eq!(ActionSet::parse(""), None);
    }

    #[test]
    fn display_formatting() {
        assert_eq!(ActionSet::empty().to_string(), "(none)");
        assert_eq!(ActionSet::RESPOND.to_string(), "RESPOND");
        assert_eq!(
            (ActionSet::VIEW | ActionSet::CLOSE).to_string(),
            "VIEW | CLOSE"
        );
    }

    #[test]
    fn serde_roundtrip() {
        let set = ActionSet::VIEW | ActionSet::RESPOND;
        let json = serde_json::to_string(&set).expect("serialize");
        let parsed: ActionSet = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, set);
    }
}
