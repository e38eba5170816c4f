//! Navbar section gating.
//!
//! Each section has a minimum tier. A user sees and may enter a section
//! when their role is at least that tier; an unknown role sees nothing.
//!
//! | Section | Path | Minimum |
//! |---------|------|---------|
//! | Home | `/` | employee |
//! | Management | `/employees` | leader |
//! | Schedule | `/schedule` | employee |
//! | Training | `/training` | employee |
//! | Help | `/help` | employee |

use crate::AccessDenied;
use crewdesk_types::{ErrorCode, Role, User};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A top-level area of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    Management,
    Schedule,
    Training,
    Help,
}

impl Section {
    /// Navbar order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Management,
        Section::Schedule,
        Section::Training,
        Section::Help,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Management => "management",
            Self::Schedule => "schedule",
            Self::Training => "training",
            Self::Help => "help",
        }
    }

    /// Route the section lives under.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Management => "/employees",
            Self::Schedule => "/schedule",
            Self::Training => "/training",
            Self::Help => "/help",
        }
    }

    /// Lowest tier allowed in.
    #[must_use]
    pub fn min_role(self) -> Role {
        match self {
            Self::Management => Role::Leader,
            Self::Home | Self::Schedule | Self::Training | Self::Help => Role::Employee,
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure to resolve a section name or path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    #[error("unknown section '{0}'")]
    Unknown(String),
}

impl ErrorCode for SectionError {
    fn code(&self) -> &'static str {
        match self {
            Self::Unknown(_) => "AUTH_UNKNOWN_SECTION",
        }
    }

    fn is_recoverable(&self) -> bool {
        false
    }
}

impl FromStr for Section {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == needle || section.path() == needle)
            .ok_or_else(|| SectionError::Unknown(s.to_string()))
    }
}

/// Returns `true` if `user` may enter `section`.
///
/// ```
/// use crewdesk_auth::{can_enter_section, Section};
/// use crewdesk_types::{Role, User};
///
/// let employee = User::new("u1", Role::Employee, Some("c1"));
/// assert!(can_enter_section(&employee, Section::Schedule));
/// assert!(!can_enter_section(&employee, Section::Management));
/// ```
#[must_use]
pub fn can_enter_section(user: &User, section: Section) -> bool {
    user.role()
        .is_some_and(|role| role.at_least(section.min_role()))
}

/// Sections `user` may enter, in navbar order.
#[must_use]
pub fn visible_sections(user: &User) -> Vec<Section> {
    Section::ALL
        .into_iter()
        .filter(|section| can_enter_section(user, *section))
        .collect()
}

/// Hard-refusal form of [`can_enter_section`].
///
/// # Errors
///
/// Returns [`AccessDenied::SectionDenied`] when the user's tier is too low
/// or unknown.
pub fn require_section(user: &User, section: Section) -> Result<(), AccessDenied> {
    if can_enter_section(user, section) {
        Ok(())
    } else {
        Err(AccessDenied::SectionDenied {
            user: user.id.clone(),
            role: user.role,
            section,
            required: section.min_role(),
        })
    }
}
