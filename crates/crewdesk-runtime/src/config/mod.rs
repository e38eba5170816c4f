//! Configuration management with hierarchical layering.
//!
//! # Architecture
//!
//! Configuration is loaded from multiple sources with priority-based merging:
//!
//! ```text
//! Priority (highest to lowest):
//!
//! ┌─────────────────────────────────────────────┐
//! │  1. CLI flags (ConfigResolver)              │  Invocation override
//! ├─────────────────────────────────────────────┤
//! │  2. Environment Variables (CREWDESK_*)      │  Runtime override
//! ├─────────────────────────────────────────────┤
//! │  3. Project Config (.crewdesk/config.toml)  │  Project-specific
//! ├─────────────────────────────────────────────┤
//! │  4. Global Config (~/.crewdesk/config.toml) │  User defaults
//! ├─────────────────────────────────────────────┤
//! │  5. Default Values (compile-time)           │  Fallback
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Config Field | Type |
//! |----------|--------------|------|
//! | `CREWDESK_DEBUG` | `debug` | bool |
//! | `CREWDESK_AUDIT` | `audit.enabled` | bool |
//! | `CREWDESK_AUDIT_ALLOWED` | `audit.log_allowed` | bool |
//! | `CREWDESK_LOG_FILE` | `logging.file_path` (and enables `logging.file`) | PathBuf |
//! | `CREWDESK_LOG_LEVEL` | `logging.file_level` | String |
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.crewdesk/config.toml
//!
//! debug = false
//!
//! [audit]
//! enabled = true
//! log_allowed = false
//!
//! [logging]
//! file = true
//! file_path = "/var/log/crewdesk"
//! file_level = "info"
//! ```

mod error;
mod loader;
mod resolver;
mod types;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use resolver::{ConfigResolver, NoOpResolver};
pub use types::{AuditConfig, CrewdeskConfig, LoggingConfig};

/// Name of the global config directory under the home directory.
pub const GLOBAL_CONFIG_DIR: &str = ".crewdesk";

/// Default global config directory.
#[must_use]
pub fn default_config_dir() -> std::path::PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(GLOBAL_CONFIG_DIR)
}

/// Default global config file path.
#[must_use]
pub fn default_config_path() -> std::path::PathBuf {
    default_config_dir().join("config.toml")
}

/// Project config directory name.
pub const PROJECT_CONFIG_DIR: &str = ".crewdesk";

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = "config.toml";
