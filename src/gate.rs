//! # Configuration Gate
//!
//! Before a table's child view renders, the dashboard's system configuration
//! has to be resolved. This module defines the configuration document and the
//! resolver seam; the [`Navigator`](crate::navigator::Navigator) owns the
//! timeout and supersession policy around it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// System configuration handed to every rendered view
///
/// Unknown keys are preserved in `extra` so newer servers can add fields
/// without breaking older routers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemConfiguration {
    pub version: Option<String>,
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub user_department: Option<String>,
    pub show_active_thread: bool,
    pub show_application_stat: bool,
    pub enable_server_map_real_time: bool,
    pub send_usage: bool,
    pub edit_user_info: bool,
    pub open_source: bool,
    pub webhook_enable: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Why a configuration could not be resolved
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("reading configuration {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing configuration {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("configuration unavailable: {0}")]
    Unavailable(String),
}

/// Asynchronous source of [`SystemConfiguration`]
pub trait ConfigurationResolver: Send + Sync {
    fn resolve(&self) -> impl Future<Output = Result<SystemConfiguration, ResolveError>> + Send;
}

impl<R: ConfigurationResolver> ConfigurationResolver for Arc<R> {
    fn resolve(&self) -> impl Future<Output = Result<SystemConfiguration, ResolveError>> + Send {
        R::resolve(&**self)
    }
}

/// Resolver that always yields the same configuration
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    config: SystemConfiguration,
}

impl StaticResolver {
    #[must_use]
    pub fn new(config: SystemConfiguration) -> Self {
        Self { config }
    }
}

impl ConfigurationResolver for StaticResolver {
    fn resolve(&self) -> impl Future<Output = Result<SystemConfiguration, ResolveError>> + Send {
        let config = self.config.clone();
        async move { Ok(config) }
    }
}

/// Resolver that reads a JSON configuration document on every navigation
#[derive(Debug, Clone)]
pub struct FileResolver {
    path: PathBuf,
}

impl FileResolver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigurationResolver for FileResolver {
    fn resolve(&self) -> impl Future<Output = Result<SystemConfiguration, ResolveError>> + Send {
        let path = self.path.clone();
        async move {
            debug!(path = %path.display(), "Reading system configuration");
            let bytes = tokio::fs::read(&path).await.map_err(|source| ResolveError::Io {
                path: path.clone(),
                source,
            })?;
            serde_json::from_slice(&bytes).map_err(|source| ResolveError::Parse { path, source })
        }
    }
}
