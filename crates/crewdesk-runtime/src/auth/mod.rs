//! Runtime permission policies.
//!
//! Rule evaluation lives in `crewdesk-auth`. This module adds the
//! runtime concerns around it:
//!
//! - [`AuditedPolicy`]: wraps any [`PermissionPolicy`] and writes an
//!   audit trail through `tracing`
//!
//! # Architecture
//!
//! ```text
//! crewdesk-auth (trait + table)
//!     PermissionPolicy, StaticPolicy, AccessDenied
//!         ↓
//! crewdesk-runtime/auth (implementations)
//!     AuditedPolicy
//! ```

mod audited;

pub use audited::AuditedPolicy;

pub use crewdesk_auth::{AccessDenied, PermissionPolicy, StaticPolicy};
