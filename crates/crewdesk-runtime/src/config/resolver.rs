//! Configuration resolver trait for layered overrides.
//!
//! # Architecture
//!
//! ```text
//! ConfigLoader.load()  →  CrewdeskConfig (base)
//!                              │
//!                              ▼
//!                     ConfigResolver.apply()
//!                              │
//!                              ▼
//!                     CrewdeskConfig (final)
//! ```
//!
//! # Example
//!
//! ```
//! use crewdesk_runtime::config::{ConfigResolver, CrewdeskConfig};
//!
//! struct CliOverrides {
//!     debug: Option<bool>,
//! }
//!
//! impl ConfigResolver for CliOverrides {
//!     fn apply(&self, config: &mut CrewdeskConfig) {
//!         if let Some(d) = self.debug {
//!             config.debug = d;
//!         }
//!     }
//! }
//!
//! let mut config = CrewdeskConfig::default();
//! CliOverrides { debug: Some(true) }.apply(&mut config);
//! assert!(config.debug);
//! ```

use super::CrewdeskConfig;

/// Trait for applying configuration overrides.
///
/// Separates file/env loading from runtime overrides such as CLI flags.
pub trait ConfigResolver {
    /// Applies overrides to the given configuration.
    ///
    /// Only values that were explicitly given should be applied,
    /// preserving existing values for unspecified options.
    fn apply(&self, config: &mut CrewdeskConfig);
}

/// No-op resolver that makes no changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpResolver;

impl ConfigResolver for NoOpResolver {
    fn apply(&self, _config: &mut CrewdeskConfig) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_resolver_does_nothing() {
        let mut config = CrewdeskConfig::default();
        let original = config.clone();

        NoOpResolver.apply(&mut config);

        assert_eq!(config, original);
    }

    #[test]
    fn custom_resolver_only_touches_given_values() {
        struct AuditOff;

        impl ConfigResolver for AuditOff {
            fn apply(&self, config: &mut CrewdeskConfig) {
                config.audit.enabled = false;
            }
        }

        let mut config = CrewdeskConfig::default();
        config.debug = true;
        AuditOff.apply(&mut config);

        assert!(!config.audit.enabled);
        assert!(config.debug);
    }
}
