//! CrewDesk runtime layer.
//!
//! Everything around the rule table that needs I/O or process state:
//! layered configuration, the audit trail, and the JSON boundary used by
//! request handlers and the CLI.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  crewdesk-types : Role, User, Ticket, Schedule, ErrorCode   │
//! │  crewdesk-auth  : rule table, PermissionPolicy, sections    │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Runtime Layer (THIS CRATE)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  config/ : CrewdeskConfig, ConfigLoader, ConfigResolver     │
//! │  auth/   : AuditedPolicy                                    │
//! │  query   : AccessQuery, Decision, evaluate                  │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Frontend Layer                             │
//! │  (crewdesk-cli)                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! ## [`config`] - Configuration Management
//!
//! Defaults, global and project TOML files, `CREWDESK_*` environment
//! variables, then caller overrides through [`ConfigResolver`].
//!
//! ## [`auth`] - Audited Policy
//!
//! [`AuditedPolicy`] wraps a [`PermissionPolicy`](crewdesk_auth::PermissionPolicy)
//! and logs each decision with `tracing`.
//!
//! ## [`query`] - JSON Boundary
//!
//! [`evaluate`] answers an [`AccessQuery`] with a [`Decision`] and never
//! fails; malformed records are treated as absent.

pub mod auth;
pub mod config;
pub mod query;

pub use auth::AuditedPolicy;
pub use config::{
    AuditConfig, ConfigError, ConfigLoader, ConfigResolver, CrewdeskConfig, LoggingConfig,
    NoOpResolver,
};
pub use query::{evaluate, AccessQuery, Decision};
