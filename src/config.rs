//! # Router Configuration
//!
//! File-based configuration for the routing tables and the configuration gate.
//! The file is YAML (JSON is accepted too, being a subset):
//!
//! ```yaml
//! landing_path: /main
//! gate_timeout_ms: 10000
//! slow_match_threshold_us: 1000
//! detail:
//!   mount: transactionDetail
//! list:
//!   mount: transactionList
//! ```
//!
//! Every key is optional. Environment overrides from
//! [`RuntimeConfig`](crate::runtime_config::RuntimeConfig) are applied on top
//! with [`RouterConfig::apply_runtime`].

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::runtime_config::RuntimeConfig;

pub const DEFAULT_LANDING_PATH: &str = "/main";
pub const DEFAULT_GATE_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_SLOW_MATCH_THRESHOLD_US: u64 = 1_000;

/// Per-table settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// First URL segment the table is mounted under
    pub mount: String,
}

impl TableConfig {
    fn mounted_at(mount: &str) -> Self {
        Self {
            mount: mount.to_string(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::mounted_at("")
    }
}

/// Routing configuration loaded at start-up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Redirect target for under-specified URLs
    pub landing_path: String,
    /// Upper bound on configuration resolution before a render
    pub gate_timeout_ms: u64,
    /// Matches slower than this are logged at WARN
    pub slow_match_threshold_us: u64,
    pub detail: TableConfig,
    pub list: TableConfig,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            landing_path: DEFAULT_LANDING_PATH.to_string(),
            gate_timeout_ms: DEFAULT_GATE_TIMEOUT_MS,
            slow_match_threshold_us: DEFAULT_SLOW_MATCH_THRESHOLD_US,
            detail: TableConfig::mounted_at("transactionDetail"),
            list: TableConfig::mounted_at("transactionList"),
        }
    }
}

/// Invalid configuration values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("landing_path '{0}' must be an absolute path")]
    LandingPath(String),
    #[error("{table}.mount '{mount}' must be a single non-empty path segment")]
    Mount { table: &'static str, mount: String },
    #[error("detail and list tables cannot share mount '{0}'")]
    SharedMount(String),
    #[error("gate_timeout_ms must be greater than zero")]
    ZeroGateTimeout,
}

impl RouterConfig {
    /// Load from a YAML/JSON file and validate
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read, does not parse, or does not validate.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading router config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing router config {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("validating router config {}", path.display()))?;
        Ok(config)
    }

    /// Layer environment overrides on top of the file values
    #[must_use]
    pub fn apply_runtime(mut self, runtime: &RuntimeConfig) -> Self {
        if let Some(ms) = runtime.gate_timeout_ms {
            self.gate_timeout_ms = ms;
        }
        if let Some(path) = &runtime.landing_path {
            self.landing_path.clone_from(path);
        }
        self
    }

    /// # Errors
    ///
    /// See [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.landing_path.starts_with('/') {
            return Err(ConfigError::LandingPath(self.landing_path.clone()));
        }
        for (table, cfg) in [("detail", &self.detail), ("list", &self.list)] {
            let mount = cfg.mount.trim_matches('/');
            if mount.is_empty() || mount.contains('/') {
                return Err(ConfigError::Mount {
                    table,
                    mount: cfg.mount.clone(),
                });
            }
        }
        if self.detail.mount.trim_matches('/') == self.list.mount.trim_matches('/') {
            return Err(ConfigError::SharedMount(self.detail.mount.clone()));
        }
        if self.gate_timeout_ms == 0 {
            return Err(ConfigError::ZeroGateTimeout);
        }
        Ok(())
    }

    #[must_use]
    pub fn gate_timeout(&self) -> Duration {
        Duration::from_millis(self.gate_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = RouterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.gate_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: RouterConfig = serde_yaml::from_str("gate_timeout_ms: 250\n").unwrap();
        assert_eq!(config.gate_timeout_ms, 250);
        assert_eq!(config.landing_path, "/main");
        assert_eq!(config.list.mount, "transactionList");
    }

    #[test]
    fn test_rejects_relative_landing_path() {
        let config = RouterConfig {
            landing_path: "main".to_string(),
            ..RouterConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::LandingPath("main".to_string()))
        );
    }

    #[test]
    fn test_rejects_shared_mount() {
        let mut config = RouterConfig::default();
        config.list.mount = "/transactionDetail/".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SharedMount(_))
        ));
    }

    #[test]
    fn test_rejects_nested_mount() {
        let mut config = RouterConfig::default();
        config.detail.mount = "a/b".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Mount { table: "detail", .. })
        ));
    }

    #[test]
    fn test_runtime_overrides_win() {
        let runtime = RuntimeConfig {
            gate_timeout_ms: Some(42),
            landing_path: Some("/home".to_string()),
        };
        let config = RouterConfig::default().apply_runtime(&runtime);
        assert_eq!(config.gate_timeout_ms, 42);
        assert_eq!(config.landing_path, "/home");
    }
}
