//! Configuration types.
//!
//! All types implement [`Default`] for compile-time fallback values.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure.
///
/// This is the unified configuration after merging all layers.
/// Every field is optional in a config file.
///
/// # Example
///
/// ```
/// use crewdesk_runtime::config::CrewdeskConfig;
///
/// let config = CrewdeskConfig::default();
/// assert!(!config.debug);
/// assert!(config.audit.enabled);
/// assert!(!config.audit.log_allowed);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CrewdeskConfig {
    /// Enable debug mode (debug-level terminal logging).
    pub debug: bool,

    /// Decision audit trail.
    pub audit: AuditConfig,

    /// File logging.
    pub logging: LoggingConfig,
}

impl CrewdeskConfig {
    /// Creates a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes to TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Deserializes from TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if deserialization fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Merges another config into this one.
    ///
    /// Values from `other` override values in `self` only if they
    /// differ from the default. This enables layered configuration.
    pub fn merge(&mut self, other: &Self) {
        let default = Self::default();

        if other.debug != default.debug {
            self.debug = other.debug;
        }

        self.audit.merge(&other.audit);
        self.logging.merge(&other.logging);
    }
}

/// Decision audit trail configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AuditConfig {
    /// Emit audit events at all. Disabling never changes decisions.
    pub enabled: bool,

    /// Also log allowed decisions (at debug). Denials are always logged
    /// while `enabled` is set.
    pub log_allowed: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_allowed: false,
        }
    }
}

impl AuditConfig {
    fn merge(&mut self, other: &Self) {
        let default = Self::default();

        if other.enabled != default.enabled {
            self.enabled = other.enabled;
        }
        if other.log_allowed != default.log_allowed {
            self.log_allowed = other.log_allowed;
        }
    }
}

/// File logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in addition to the terminal.
    pub file: bool,

    /// Directory for `crewdesk.log`. `None` uses the global config
    /// directory.
    pub file_path: Option<PathBuf>,

    /// Filter directive for the file layer (`info`, `debug`, ...).
    pub file_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: false,
            file_path: None,
            file_level: "info".into(),
        }
    }
}

impl LoggingConfig {
    fn merge(&mut self, other: &Self) {
        let default = Self::default();

        if other.file != default.file {
            self.file = other.file;
        }
        if other.file_path.is_some() {
            self.file_path = other.file_path.clone();
        }
        if other.file_level != default.file_level {
            self.file_level = other.file_level.clone();
        }
    }

    /// Directory the log file goes into.
    #[must_use]
    pub fn resolved_dir(&self) -> PathBuf {
        self.file_path
            .clone()
            .unwrap_or_else(super::default_config_dir)
    }
}
