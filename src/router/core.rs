//! Router core: dispatches a URL to its table and reports the resolution.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::pattern::Candidate;
use super::table::{RouteMatch, RouteTable, TableError};
use crate::config::RouterConfig;

/// Which of the two dashboard tables to address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    TransactionDetail,
    TransactionList,
}

/// Outcome of resolving a path
#[derive(Debug, Clone)]
pub enum Resolution {
    /// A render entry was selected
    Render(RouteMatch),
    /// A redirect entry was selected; the target is `RouteMatch::redirect_target`
    Redirect(RouteMatch),
    /// No table or no entry matched (404)
    NotFound,
}

impl Resolution {
    fn from_match(m: Option<RouteMatch>) -> Self {
        match m {
            Some(m) if m.is_redirect() => Resolution::Redirect(m),
            Some(m) => Resolution::Render(m),
            None => Resolution::NotFound,
        }
    }

    #[must_use]
    pub fn route_match(&self) -> Option<&RouteMatch> {
        match self {
            Resolution::Render(m) | Resolution::Redirect(m) => Some(m),
            Resolution::NotFound => None,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolution::NotFound)
    }
}

/// Router owning the transaction detail and transaction list tables
///
/// Tables are built once from [`RouterConfig`] and never change afterwards;
/// share the router behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Router {
    detail: Arc<RouteTable>,
    list: Arc<RouteTable>,
    landing_path: Arc<str>,
    slow_match_threshold: Duration,
}

impl Router {
    /// Build both tables from configuration
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] if a table fails validation.
    pub fn new(config: &RouterConfig) -> Result<Self, TableError> {
        let detail = RouteTable::transaction_detail(&config.detail.mount, &config.landing_path)?;
        let list = RouteTable::transaction_list(&config.list.mount, &config.landing_path)?;
        Ok(Self::from_tables(
            detail,
            list,
            &config.landing_path,
            Duration::from_micros(config.slow_match_threshold_us),
        ))
    }

    /// Assemble a router from prebuilt tables
    #[must_use]
    pub fn from_tables(
        detail: RouteTable,
        list: RouteTable,
        landing_path: &str,
        slow_match_threshold: Duration,
    ) -> Self {
        let router = Self {
            detail: Arc::new(detail),
            list: Arc::new(list),
            landing_path: Arc::from(landing_path),
            slow_match_threshold,
        };

        info!(
            tables = 2,
            entries = router.detail.entries().len() + router.list.entries().len(),
            detail_mount = %router.detail.mount(),
            list_mount = %router.list.mount(),
            landing_path = %router.landing_path,
            "Routing tables loaded"
        );
        router
    }

    #[must_use]
    pub fn table(&self, kind: TableKind) -> &RouteTable {
        match kind {
            TableKind::TransactionDetail => &self.detail,
            TableKind::TransactionList => &self.list,
        }
    }

    /// Tables in dispatch order
    pub fn tables(&self) -> impl Iterator<Item = &RouteTable> {
        [&*self.detail, &*self.list].into_iter()
    }

    #[must_use]
    pub fn landing_path(&self) -> &str {
        &self.landing_path
    }

    /// Resolve a full application path such as `/transactionDetail/t1/1000/a1/s1`
    ///
    /// The first segment selects the table by its mount; the rest is matched
    /// against that table.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolution {
        debug!(path = %path, "Route match attempt");
        let start = Instant::now();

        let matched = Candidate::parse(path).and_then(|candidate| {
            let (mount, rest) = candidate.split_first()?;
            let table = self.tables().find(|t| t.mount() == mount)?;
            table.match_segments(rest)
        });

        self.report(path, start, Resolution::from_match(matched))
    }

    /// Resolve a path relative to one table's root, e.g. `t1/1000/a1/s1`
    #[must_use]
    pub fn resolve_in(&self, kind: TableKind, path: &str) -> Resolution {
        debug!(path = %path, table = ?kind, "Route match attempt");
        let start = Instant::now();

        let table = self.table(kind);
        let matched =
            Candidate::parse(path).and_then(|candidate| table.match_segments(candidate.segments()));

        self.report(path, start, Resolution::from_match(matched))
    }

    fn report(&self, path: &str, start: Instant, resolution: Resolution) -> Resolution {
        let duration = start.elapsed();

        match &resolution {
            Resolution::NotFound => {
                warn!(
                    path = %path,
                    duration_us = duration.as_micros(),
                    "No route matched"
                );
            }
            Resolution::Render(m) | Resolution::Redirect(m) => {
                if duration > self.slow_match_threshold {
                    warn!(
                        path = %path,
                        table = %m.table,
                        route_pattern = %m.entry.pattern,
                        duration_us = duration.as_micros(),
                        "Slow route matching detected"
                    );
                }
                info!(
                    path = %path,
                    table = %m.table,
                    route_pattern = %m.entry.pattern,
                    view = ?m.view(),
                    redirect_to = ?m.redirect_target(),
                    path_params = ?m.params,
                    duration_us = duration.as_micros(),
                    "Route matched"
                );
            }
        }
        resolution
    }

    /// All declared patterns, prefixed with their table mount
    ///
    /// e.g. `/transactionDetail/:traceId/:focusTimestamp/:agentId/:spanId`
    #[must_use]
    pub fn path_patterns(&self) -> Vec<String> {
        self.tables()
            .flat_map(|table| {
                table.entries().iter().map(move |entry| {
                    if entry.pattern.is_root() {
                        format!("/{}", table.mount())
                    } else {
                        format!("/{}/{}", table.mount(), entry.pattern)
                    }
                })
            })
            .collect()
    }

    /// Print all tables to stdout
    pub fn dump_routes(&self) {
        for table in self.tables() {
            dump_table(table);
        }
    }
}

/// Print one table to stdout
pub fn dump_table(table: &RouteTable) {
    println!(
        "[table] {} mount=/{} page={} resolve_configuration={} entries={}",
        table.name(),
        table.mount(),
        table.page(),
        table.resolves_configuration(),
        table.entries().len()
    );
    for entry in table.entries() {
        match entry.redirect_target() {
            Some(to) => println!("[route] {} -> redirect {to} (full match)", entry.pattern),
            None => {
                if let Some(view) = entry.view() {
                    println!("[route] {} -> {view}", entry.pattern);
                }
            }
        }
    }
}
