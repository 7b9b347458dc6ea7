//! # CLI Module
//!
//! Command-line access to the route tables.
//!
//! ## Commands
//!
//! ### `resolve`
//!
//! ```bash
//! txroute resolve /transactionDetail/t1/1000/a1/s1
//! txroute resolve --table list app1/5m/99999
//! ```
//!
//! Prints the selected entry, view or redirect target, and extracted
//! parameters as JSON. Unmatched paths print `{"outcome": "notFound"}`.
//!
//! ### `routes`
//!
//! ```bash
//! txroute routes --table detail
//! ```
//!
//! ### `navigate`
//!
//! ```bash
//! txroute navigate /transactionList/app1/5m/99999 --system-config config.json
//! ```
//!
//! Runs the configuration gate against the JSON document before reporting a
//! render. Redirects are reported without reading it.
//!
//! All commands accept `--config <FILE>` (or `TXROUTE_CONFIG`) for the router
//! configuration; see [`crate::config`].

mod commands;


pub use commands::{load_router_config, run_cli, Cli, Commands, ResolutionReport, TableArg};
