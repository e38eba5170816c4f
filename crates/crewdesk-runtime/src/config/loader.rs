//! Configuration loader with hierarchical merging.
//!
//! # Load Order
//!
//! 1. Default values (compile-time)
//! 2. Global config (`~/.crewdesk/config.toml`)
//! 3. Project config (`<project>/.crewdesk/config.toml`)
//! 4. Environment variables (`CREWDESK_*`)
//!
//! Each layer overrides the previous.

use super::{
    default_config_path, ConfigError, CrewdeskConfig, PROJECT_CONFIG_DIR, PROJECT_CONFIG_FILE,
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Helper macro for parsing boolean environment variables.
macro_rules! parse_env_bool {
    ($field:expr, $var:expr) => {
        if let Some(val) = $var.read() {
            $field = parse_bool(&val)
                .ok_or_else(|| ConfigError::invalid_env_var($var.name(), "expected bool"))?;
        }
    };
}

/// Configuration loader with builder pattern.
///
/// # Example
///
/// ```no_run
/// use crewdesk_runtime::config::ConfigLoader;
///
/// let config = ConfigLoader::new()
///     .with_project_root("/path/to/project")
///     .skip_env_vars()
///     .load()?;
/// # Ok::<(), crewdesk_runtime::config::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    /// Global config file path (defaults to ~/.crewdesk/config.toml).
    global_config_path: Option<PathBuf>,

    /// Project root directory.
    project_root: Option<PathBuf>,

    /// Environment source; the process environment unless overridden.
    env: EnvSource,

    skip_env: bool,
    skip_global: bool,
    skip_project: bool,
}

impl ConfigLoader {
    /// Creates a new loader with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom global config path.
    #[must_use]
    pub fn with_global_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.global_config_path = Some(path.into());
        self
    }

    /// Sets the project root directory.
    ///
    /// Project config will be loaded from `<project_root>/.crewdesk/config.toml`.
    #[must_use]
    pub fn with_project_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_root = Some(path.into());
        self
    }

    /// Reads environment overrides from `vars` instead of the process
    /// environment.
    #[must_use]
    pub fn with_env<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = EnvSource::Fixed(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Skips environment variable loading.
    #[must_use]
    pub fn skip_env_vars(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Skips global config loading.
    #[must_use]
    pub fn skip_global_config(mut self) -> Self {
        self.skip_global = true;
        self
    }

    /// Skips project config loading.
    #[must_use]
    pub fn skip_project_config(mut self) -> Self {
        self.skip_project = true;
        self
    }

    /// Loads and merges configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any config file exists but cannot be read
    /// or parsed, or an environment variable has an invalid value.
    /// Missing config files are silently ignored.
    pub fn load(&self) -> Result<CrewdeskConfig, ConfigError> {
        let mut config = CrewdeskConfig::default();

        if !self.skip_global {
            let global_path = self
                .global_config_path
                .clone()
                .unwrap_or_else(default_config_path);

            if let Some(global_config) = self.load_file(&global_path)? {
                debug!(path = %global_path.display(), "Loaded global config");
                config.merge(&global_config);
            }
        }

        if !self.skip_project {
            if let Some(ref project_root) = self.project_root {
                let project_config_path = project_root
                    .join(PROJECT_CONFIG_DIR)
                    .join(PROJECT_CONFIG_FILE);

                if let Some(project_config) = self.load_file(&project_config_path)? {
                    debug!(
                        path = %project_config_path.display(),
                        project = %project_root.display(),
                        "Loaded project config"
                    );
                    config.merge(&project_config);
                }
            }
        }

        if !self.skip_env {
            self.apply_env_vars(&mut config)?;
        }

        Ok(config)
    }

    /// Loads a config file, returning None if it doesn't exist.
    fn load_file(&self, path: &Path) -> Result<Option<CrewdeskConfig>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

        let config =
            CrewdeskConfig::from_toml(&content).map_err(|e| ConfigError::parse_toml(path, e))?;

        Ok(Some(config))
    }

    /// Applies environment variable overrides.
    fn apply_env_vars(&self, config: &mut CrewdeskConfig) -> Result<(), ConfigError> {
        let env = &self.env;
        let var = move |name: &'static str| EnvVar { name, source: env };

        parse_env_bool!(config.debug, var("CREWDESK_DEBUG"));
        parse_env_bool!(config.audit.enabled, var("CREWDESK_AUDIT"));
        parse_env_bool!(config.audit.log_allowed, var("CREWDESK_AUDIT_ALLOWED"));

        if let Some(val) = var("CREWDESK_LOG_FILE").read() {
            config.logging.file = true;
            config.logging.file_path = Some(PathBuf::from(val));
        }

        if let Some(val) = var("CREWDESK_LOG_LEVEL").read() {
            config.logging.file_level = val;
        }

        Ok(())
    }
}

/// Where environment overrides come from.
#[derive(Debug, Clone, Default)]
enum EnvSource {
    #[default]
    Process,
    Fixed(Vec<(String, String)>),
}

/// One named variable looked up in an [`EnvSource`].
struct EnvVar<'a> {
    name: &'static str,
    source: &'a EnvSource,
}

impl EnvVar<'_> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn read(&self) -> Option<String> {
        match self.source {
            EnvSource::Process => std::env::var(self.name).ok(),
            EnvSource::Fixed(vars) => vars
                .iter()
                .find(|(k, _)| k == self.name)
                .map(|(_, v)| v.clone()),
        }
    }
}

/// Parses a boolean from string.
///
/// Accepts: "true", "false", "1", "0", "yes", "no", "on", "off"
/// (case-insensitive).
fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
