//! # Router Module
//!
//! Path matching and redirect resolution for the transaction detail and
//! transaction list route tables.
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Declaring the two static route tables
//! - Normalising incoming paths into decoded segments
//! - Selecting the first table entry whose pattern fully matches
//! - Extracting named parameters from the matched segments
//!
//! ## Matching
//!
//! Each table is scanned top-down in declaration order. Parameter slots accept
//! any single non-empty segment, so for these tables the segment count alone
//! decides the entry. Candidates longer than the longest pattern do not match
//! and resolve to [`Resolution::NotFound`].
//!
//! ## Example
//!
//! ```rust
//! use txroute::config::RouterConfig;
//! use txroute::router::{ParamId, Resolution, Router, TableKind};
//!
//! let router = Router::new(&RouterConfig::default()).unwrap();
//!
//! match router.resolve_in(TableKind::TransactionDetail, "t1/1000/a1/s1") {
//!     Resolution::Render(m) => assert_eq!(m.get_param(ParamId::TraceId), Some("t1")),
//!     other => panic!("unexpected {other:?}"),
//! }
//!
//! match router.resolve("/transactionDetail/t1/1000") {
//!     Resolution::Redirect(m) => assert_eq!(m.redirect_target(), Some("/main")),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

mod core;
mod params;
mod pattern;
mod table;
#[cfg(test)]
mod tests;

pub use core::{dump_table, Resolution, Router, TableKind};
pub use params::{ParamId, ParamVec, UnknownParam, MAX_INLINE_PARAMS};
pub use pattern::{Candidate, PathToken, RoutePattern};
pub use table::{
    RouteAction, RouteEntry, RouteMatch, RouteTable, RouteTableBuilder, TableError, ViewId,
};
