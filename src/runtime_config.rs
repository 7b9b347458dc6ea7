//! # Runtime Configuration Module
//!
//! Environment variable overrides for the router, layered over the file-based
//! [`RouterConfig`](crate::config::RouterConfig).
//!
//! ## Environment Variables
//!
//! ### `TXROUTE_GATE_TIMEOUT_MS`
//!
//! Upper bound, in milliseconds, on configuration resolution before a view
//! renders. Accepts decimal (`2500`) or hexadecimal (`0x9c4`). Unparseable
//! values are ignored.
//!
//! ### `TXROUTE_LANDING_PATH`
//!
//! Redirect target for under-specified URLs (default `/main`).
//!
//! ## Usage
//!
//! ```rust
//! use txroute::config::RouterConfig;
//! use txroute::runtime_config::RuntimeConfig;
//!
//! let config = RouterConfig::default().apply_runtime(&RuntimeConfig::from_env());
//! println!("gate timeout: {:?}", config.gate_timeout());
//! ```

use std::env;

pub const GATE_TIMEOUT_VAR: &str = "TXROUTE_GATE_TIMEOUT_MS";
pub const LANDING_PATH_VAR: &str = "TXROUTE_LANDING_PATH";

/// Overrides read from the environment; `None` keeps the file value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub gate_timeout_ms: Option<u64>,
    pub landing_path: Option<String>,
}

impl RuntimeConfig {
    /// Load overrides from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load overrides through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let gate_timeout_ms = lookup(GATE_TIMEOUT_VAR).and_then(|val| {
            let val = val.trim();
            match val.strip_prefix("0x") {
                Some(hex) => u64::from_str_radix(hex, 16).ok(),
                None => val.parse().ok(),
            }
        });
        let landing_path = lookup(LANDING_PATH_VAR).filter(|p| !p.trim().is_empty());

        RuntimeConfig {
            gate_timeout_ms,
            landing_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_empty_environment() {
        assert_eq!(RuntimeConfig::from_lookup(lookup(&[])), RuntimeConfig::default());
    }

    #[test]
    fn test_decimal_and_hex_timeout() {
        let cfg = RuntimeConfig::from_lookup(lookup(&[(GATE_TIMEOUT_VAR, "2500")]));
        assert_eq!(cfg.gate_timeout_ms, Some(2500));
        let cfg = RuntimeConfig::from_lookup(lookup(&[(GATE_TIMEOUT_VAR, "0x10")]));
        assert_eq!(cfg.gate_timeout_ms, Some(16));
    }

    #[test]
    fn test_garbage_timeout_ignored() {
        let cfg = RuntimeConfig::from_lookup(lookup(&[(GATE_TIMEOUT_VAR, "soon")]));
        assert_eq!(cfg.gate_timeout_ms, None);
    }

    #[test]
    fn test_blank_landing_path_ignored() {
        let cfg = RuntimeConfig::from_lookup(lookup(&[(LANDING_PATH_VAR, "  ")]));
        assert_eq!(cfg.landing_path, None);
    }
}
