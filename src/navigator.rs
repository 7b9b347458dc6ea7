//! # Navigator
//!
//! Runs a navigation end to end: route resolution, redirect handling and the
//! configuration gate.
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Host
//!     participant Nav as Navigator
//!     participant Router
//!     participant Gate as ConfigurationResolver
//!
//!     Host->>Nav: navigate("/transactionDetail/t1/1000/a1/s1")
//!     Nav->>Router: resolve(path)
//!     alt redirect entry
//!         Router-->>Nav: Redirect(/main)
//!         Nav-->>Host: Navigation::Redirected
//!     else no match
//!         Router-->>Nav: NotFound
//!         Nav-->>Host: NavigationError::NotFound
//!     else render entry
//!         Router-->>Nav: Render(match)
//!         Nav->>Gate: resolve() (bounded by gate timeout)
//!         alt newer navigation started
//!             Nav-->>Host: NavigationError::Superseded
//!         else resolved
//!             Gate-->>Nav: SystemConfiguration
//!             Nav-->>Host: Navigation::Rendered
//!         end
//!     end
//! ```
//!
//! Redirects are applied before the gate, so a redirected navigation never
//! fetches configuration. Each call to [`Navigator::navigate`] takes a new
//! generation number; a pending gate is abandoned as soon as a newer
//! navigation starts on the same navigator.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::gate::{ConfigurationResolver, ResolveError, SystemConfiguration};
use crate::router::{Resolution, RouteMatch, Router, ViewId};

/// A view ready to render
#[derive(Debug, Clone)]
pub struct RenderedView {
    /// Page hosting the table
    pub page: ViewId,
    /// Child view selected by the route entry
    pub view: ViewId,
    pub matched: RouteMatch,
    /// `None` when the table does not gate on configuration
    pub configuration: Option<Arc<SystemConfiguration>>,
}

/// Successful navigation outcome
#[derive(Debug, Clone)]
pub enum Navigation {
    Rendered(RenderedView),
    Redirected { to: Arc<str>, matched: RouteMatch },
}

#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    #[error("no route matches '{path}'")]
    NotFound { path: String },
    #[error("configuration gate failed: {0}")]
    Configuration(#[from] ResolveError),
    #[error("configuration gate timed out after {timeout:?}")]
    GateTimeout { timeout: Duration },
    #[error("navigation {generation} superseded by a newer navigation")]
    Superseded { generation: u64 },
}

/// Resolves paths and gates rendering on configuration
pub struct Navigator<R> {
    router: Arc<Router>,
    resolver: R,
    gate_timeout: Duration,
    generation: watch::Sender<u64>,
}

impl<R: ConfigurationResolver> Navigator<R> {
    pub fn new(router: Arc<Router>, resolver: R, gate_timeout: Duration) -> Self {
        let (generation, _) = watch::channel(0);
        Self {
            router,
            resolver,
            gate_timeout,
            generation,
        }
    }

    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Generation of the most recently started navigation
    #[must_use]
    pub fn current_generation(&self) -> u64 {
        *self.generation.borrow()
    }

    /// Navigate to a full application path
    ///
    /// # Errors
    ///
    /// See [`NavigationError`].
    pub async fn navigate(&self, path: &str) -> Result<Navigation, NavigationError> {
        let mut ticket = 0;
        self.generation.send_modify(|g| {
            *g += 1;
            ticket = *g;
        });

        let matched = match self.router.resolve(path) {
            Resolution::NotFound => {
                return Err(NavigationError::NotFound {
                    path: path.to_string(),
                })
            }
            Resolution::Redirect(matched) => {
                let to: Arc<str> = Arc::from(matched.redirect_target().unwrap_or_default());
                info!(path = %path, redirect_to = %to, generation = ticket, "Navigation redirected");
                return Ok(Navigation::Redirected { to, matched });
            }
            Resolution::Render(matched) => matched,
        };

        let Some(view) = matched.view() else {
            return Err(NavigationError::NotFound {
                path: path.to_string(),
            });
        };

        let configuration = if matched.resolve_configuration {
            Some(Arc::new(self.run_gate(ticket).await?))
        } else {
            None
        };

        info!(
            path = %path,
            page = %matched.page,
            view = %view,
            generation = ticket,
            "Navigation rendered"
        );
        Ok(Navigation::Rendered(RenderedView {
            page: matched.page,
            view,
            matched,
            configuration,
        }))
    }

    async fn run_gate(&self, ticket: u64) -> Result<SystemConfiguration, NavigationError> {
        let mut newer = self.generation.subscribe();

        tokio::select! {
            biased;

            _ = newer.wait_for(|g| *g != ticket) => {
                warn!(generation = ticket, "Configuration gate abandoned by newer navigation");
                Err(NavigationError::Superseded { generation: ticket })
            }
            resolved = tokio::time::timeout(self.gate_timeout, self.resolver.resolve()) => {
                match resolved {
                    Ok(Ok(configuration)) => Ok(configuration),
                    Ok(Err(err)) => {
                        warn!(generation = ticket, error = %err, "Configuration gate failed");
                        Err(err.into())
                    }
                    Err(_) => {
                        warn!(
                            generation = ticket,
                            timeout_ms = self.gate_timeout.as_millis(),
                            "Configuration gate timed out"
                        );
                        Err(NavigationError::GateTimeout {
                            timeout: self.gate_timeout,
                        })
                    }
                }
            }
        }
    }
}
