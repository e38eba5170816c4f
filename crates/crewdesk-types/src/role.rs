//! Role tiers.
//!
//! A [`Role`] is one of four ranked tiers. Users carry a raw
//! [`RoleCode`] rather than a `Role` so that a record with an
//! out-of-range tier still deserializes; resolving such a code yields
//! `None`, and every access check treats `None` as denied.
//!
//! ```text
//! Employee (1) < Leader (2) < Owner (3) < Admin (4)
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Ranked role tier.
///
/// The derived `Ord` follows declaration order, so
/// `Role::Employee < Role::Admin`. Rules are still declared per role;
/// the ordering is only used for minimum-tier gates.
///
/// # Example
///
/// ```
/// use crewdesk_types::Role;
///
/// assert!(Role::Leader > Role::Employee);
/// assert_eq!(Role::from_code(3), Some(Role::Owner));
/// assert_eq!(Role::from_code(999), None);
/// assert_eq!("leader".parse::<Role>().ok(), Some(Role::Leader));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
#[repr(u8)]
pub enum Role {
    /// Regular staff member.
    Employee = 1,
    /// Shift leader inside a company.
    Leader = 2,
    /// Company owner.
    Owner = 3,
    /// Platform administrator, outside any single company.
    Admin = 4,
}

impl Role {
    /// Every tier, lowest first.
    pub const ALL: [Role; 4] = [Role::Employee, Role::Leader, Role::Owner, Role::Admin];

    /// Numeric wire code of this tier.
    #[must_use]
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Resolves a wire code. Unknown codes return `None`.
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Employee),
            2 => Some(Self::Leader),
            3 => Some(Self::Owner),
            4 => Some(Self::Admin),
            _ => None,
        }
    }

    /// Lowercase name of the tier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Leader => "leader",
            Self::Owner => "owner",
            Self::Admin => "admin",
        }
    }

    /// Returns `true` if this tier ranks at or above `min`.
    #[must_use]
    pub fn at_least(self, min: Role) -> bool {
        self >= min
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a role name or code that is not one of the four tiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleError {
    #[error("unknown role name '{0}'")]
    UnknownName(String),
    #[error("unknown role code {0}")]
    UnknownCode(i64),
}

impl crate::ErrorCode for RoleError {
    fn code(&self) -> &'static str {
        match self {
            Self::UnknownName(_) => "ROLE_UNKNOWN_NAME",
            Self::UnknownCode(_) => "ROLE_UNKNOWN_CODE",
        }
    }

    fn is_recoverable(&self) -> bool {
        false
    }
}

impl FromStr for Role {
    type Err = RoleError;

    /// Parses a tier name (case-insensitive) or its numeric code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return Self::from_code(code).ok_or(RoleError::UnknownCode(code));
        }
        match trimmed.to_lowercase().as_str() {
            "employee" => Ok(Self::Employee),
            "leader" => Ok(Self::Leader),
            "owner" => Ok(Self::Owner),
            "admin" => Ok(Self::Admin),
            _ => Err(RoleError::UnknownName(s.to_string())),
        }
    }
}

impl TryFrom<i64> for Role {
    type Error = RoleError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(RoleError::UnknownCode(code))
    }
}

impl From<Role> for i64 {
    fn from(role: Role) -> Self {
        role.code()
    }
}

/// Raw role code as stored on a user record.
///
/// Kept separate from [`Role`] so that unknown tiers survive
/// deserialization and are denied at check time instead of failing
/// the whole request.
///
/// ```
/// use crewdesk_types::{Role, RoleCode};
///
/// assert_eq!(RoleCode::from(Role::Leader).resolve(), Some(Role::Leader));
/// assert_eq!(RoleCode(999).resolve(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleCode(pub i64);

impl RoleCode {
    /// Resolves to a known tier, or `None`.
    #[must_use]
    pub fn resolve(self) -> Option<Role> {
        Role::from_code(self.0)
    }
}

impl From<Role> for RoleCode {
    fn from(role: Role) -> Self {
        Self(role.code())
    }
}

impl std::fmt::Display for RoleCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.resolve() {
            Some(role) => write!(f, "{role}"),
            None => write!(f, "unknown({})", self.0),
        }
    }
}
