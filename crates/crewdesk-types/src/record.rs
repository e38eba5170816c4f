//! Domain records.
//!
//! Records are owned and mutated by the data layer; access checks only
//! read their ownership fields through [`Owned`].

use crate::{CompanyId, ResponseId, ScheduleId, TicketId, UserId};
use serde::{Deserialize, Serialize};

/// Ownership fields shared by records that access rules inspect.
pub trait Owned {
    /// The creator or assignee.
    fn owner_id(&self) -> &UserId;

    /// The tenant the record belongs to. `None` means the record is
    /// addressed to the platform rather than a company.
    fn tenant_id(&self) -> Option<&CompanyId>;
}

/// A help ticket.
///
/// Tickets without a `company_id` are addressed to the platform
/// admins instead of a company's leadership. Only `user_id` is required
/// on the wire; a missing `id` is generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(default = "TicketId::generate")]
    pub id: TicketId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub closed: bool,
    #[serde(alias = "userId")]
    pub user_id: UserId,
    #[serde(default, alias = "companyId")]
    pub company_id: Option<CompanyId>,
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Ticket {
    /// Creates an open, empty ticket owned by `user_id`.
    #[must_use]
    pub fn new(user_id: impl Into<UserId>, company_id: Option<impl Into<CompanyId>>) -> Self {
        Self {
            id: TicketId::generate(),
            title: String::new(),
            content: String::new(),
            closed: false,
            user_id: user_id.into(),
            company_id: company_id.map(Into::into),
            created_at: None,
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Owned for Ticket {
    fn owner_id(&self) -> &UserId {
        &self.user_id
    }

    fn tenant_id(&self) -> Option<&CompanyId> {
        self.company_id.as_ref()
    }
}

/// Pay category of a scheduled shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ScheduleCategory {
    #[default]
    Paid = 1,
    Unpaid = 2,
}

impl TryFrom<u8> for ScheduleCategory {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Paid),
            2 => Ok(Self::Unpaid),
            other => Err(format!("unknown schedule category {other}")),
        }
    }
}

impl From<ScheduleCategory> for u8 {
    fn from(category: ScheduleCategory) -> Self {
        category as u8
    }
}

/// A scheduled shift for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default = "ScheduleId::generate")]
    pub id: ScheduleId,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub category: ScheduleCategory,
    #[serde(alias = "userId")]
    pub user_id: UserId,
    #[serde(default, alias = "companyId")]
    pub company_id: Option<CompanyId>,
}

impl Schedule {
    /// Creates a paid shift with empty bounds.
    #[must_use]
    pub fn new(user_id: impl Into<UserId>, company_id: Option<impl Into<CompanyId>>) -> Self {
        Self {
            id: ScheduleId::generate(),
            start: String::new(),
            end: String::new(),
            category: ScheduleCategory::Paid,
            user_id: user_id.into(),
            company_id: company_id.map(Into::into),
        }
    }
}

impl Owned for Schedule {
    fn owner_id(&self) -> &UserId {
        &self.user_id
    }

    fn tenant_id(&self) -> Option<&CompanyId> {
        self.company_id.as_ref()
    }
}

/// A reply posted on a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketResponse {
    pub id: ResponseId,
    pub content: String,
    #[serde(default)]
    pub name: String,
    #[serde(alias = "userId")]
    pub user_id: UserId,
    #[serde(alias = "ticketId")]
    pub ticket_id: TicketId,
    #[serde(default, alias = "companyId")]
    pub company_id: Option<CompanyId>,
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// A tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    /// Join code employees use to sign up.
    pub code: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}
