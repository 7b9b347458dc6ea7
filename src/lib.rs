//! # txroute
//!
//! Route tables and navigation for the transaction views of a trace
//! monitoring dashboard.
//!
//! ## Overview
//!
//! Two static tables map URL segments below a mount point to views:
//!
//! - **transaction detail** (`/transactionDetail/...`):
//!   `traceId/focusTimestamp/agentId/spanId[/viewType[/searchId]]` renders the
//!   detail contents; anything shorter redirects to `/main`.
//! - **transaction list** (`/transactionList/...`):
//!   `application/period/endTime` renders the empty state,
//!   `.../transactionInfo[/viewType]` renders the list; anything shorter
//!   redirects to `/main`.
//!
//! Before a view renders, the dashboard's system configuration is resolved
//! through a [`ConfigurationResolver`](gate::ConfigurationResolver). The
//! [`Navigator`](navigator::Navigator) bounds that step with a timeout and
//! abandons it when a newer navigation starts.
//!
//! ## Architecture
//!
//! - **[`router`]** - Patterns, tables, path normalisation and matching
//! - **[`gate`]** - System configuration document and resolvers
//! - **[`navigator`]** - Resolution + redirect + configuration gate
//! - **[`typed`]** - Typed detail/list parameters and path building
//! - **[`config`]** / **[`runtime_config`]** - File and environment configuration
//! - **[`telemetry`]** - `tracing` subscriber setup
//! - **[`cli`]** - The `txroute` command
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use txroute::config::RouterConfig;
//! use txroute::gate::StaticResolver;
//! use txroute::navigator::{Navigation, Navigator};
//! use txroute::router::Router;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let config = RouterConfig::default();
//! let router = Arc::new(Router::new(&config)?);
//! let navigator = Navigator::new(router, StaticResolver::default(), config.gate_timeout());
//!
//! match navigator.navigate("/transactionList/app1/5m/99999").await? {
//!     Navigation::Rendered(view) => println!("render {}", view.view),
//!     Navigation::Redirected { to, .. } => println!("redirect {to}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Unmatched paths
//!
//! A path longer than the longest pattern of its table, a path under an
//! unknown mount, or a malformed path (`a//b`, bad percent-encoding) resolves
//! to [`Resolution::NotFound`](router::Resolution::NotFound). It is never
//! truncated to fit a shorter pattern.

pub mod cli;
pub mod config;
pub mod gate;
pub mod navigator;
pub mod router;
pub mod runtime_config;
pub mod telemetry;
pub mod typed;

pub use config::RouterConfig;
pub use navigator::{Navigation, NavigationError, Navigator};
pub use router::{ParamId, Resolution, RouteMatch, RouteTable, Router, TableKind, ViewId};
