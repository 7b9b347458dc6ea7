//! Route tables: ordered entries pairing a pattern with a render or redirect action.
//!
//! Both dashboard tables follow the same shape. A page view hosts the table,
//! configuration is resolved before any child renders, and the child entries
//! are listed longest pattern first:
//!
//! | segments | transaction detail            | transaction list                  |
//! |----------|-------------------------------|-----------------------------------|
//! | 6        | detail contents               | -                                 |
//! | 5        | detail contents               | list bottom contents              |
//! | 4        | detail contents               | list bottom contents              |
//! | 3        | redirect `/main`              | list empty state                  |
//! | 2        | redirect `/main`              | redirect `/main`                  |
//! | 1        | redirect `/main`              | redirect `/main`                  |
//! | 0 (`''`) | redirect `/main`              | redirect `/main`                  |
//!
//! Tables are validated when built: no two entries may share a segment count,
//! and every redirect must target the landing path with a full match.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use super::params::{ParamId, ParamVec};
use super::pattern::RoutePattern;

/// Views a route entry can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewId {
    /// Page hosting the transaction detail table
    TransactionDetailPage,
    /// Call tree / timeline contents of one transaction
    TransactionDetailContents,
    /// Page hosting the transaction list table
    TransactionListPage,
    /// Populated transaction list (bottom pane)
    TransactionListBottomContents,
    /// Placeholder shown until a transaction is selected
    TransactionListEmpty,
}

impl ViewId {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ViewId::TransactionDetailPage => "transactionDetailPage",
            ViewId::TransactionDetailContents => "transactionDetailContents",
            ViewId::TransactionListPage => "transactionListPage",
            ViewId::TransactionListBottomContents => "transactionListBottomContents",
            ViewId::TransactionListEmpty => "transactionListEmpty",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happens when an entry is selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAction {
    /// Render the view under the table's page
    Render(ViewId),
    /// Navigate to `to` instead. `full_match` requires the candidate to be
    /// consumed completely by the pattern.
    Redirect { to: Arc<str>, full_match: bool },
}

/// A pattern and the action taken when it is selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: RoutePattern,
    pub action: RouteAction,
}

impl RouteEntry {
    #[must_use]
    pub fn render(pattern: RoutePattern, view: ViewId) -> Self {
        Self {
            pattern,
            action: RouteAction::Render(view),
        }
    }

    /// Full-match redirect to `to`
    #[must_use]
    pub fn redirect(pattern: RoutePattern, to: impl Into<Arc<str>>) -> Self {
        Self {
            pattern,
            action: RouteAction::Redirect {
                to: to.into(),
                full_match: true,
            },
        }
    }

    #[must_use]
    pub fn is_redirect(&self) -> bool {
        matches!(self.action, RouteAction::Redirect { .. })
    }

    #[must_use]
    pub fn view(&self) -> Option<ViewId> {
        match self.action {
            RouteAction::Render(view) => Some(view),
            RouteAction::Redirect { .. } => None,
        }
    }

    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        match &self.action {
            RouteAction::Redirect { to, .. } => Some(&**to),
            RouteAction::Render(_) => None,
        }
    }
}

/// Reasons a table fails validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("table '{table}': patterns '{first}' and '{second}' both have {count} segment(s)")]
    DuplicateSegmentCount {
        table: String,
        count: usize,
        first: String,
        second: String,
    },
    #[error("table '{table}': pattern '{pattern}' redirects to '{target}', expected landing path '{landing}'")]
    RedirectTarget {
        table: String,
        pattern: String,
        target: String,
        landing: String,
    },
    #[error("table '{table}': redirect for pattern '{pattern}' must require a full match")]
    PartialRedirect { table: String, pattern: String },
    #[error("table '{table}' has no entries")]
    Empty { table: String },
}

/// Result of matching a candidate against one table
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// Name of the table that produced the match
    pub table: Arc<str>,
    /// Page view hosting the table
    pub page: ViewId,
    /// Whether the table gates rendering on resolved configuration
    pub resolve_configuration: bool,
    /// Selected entry
    pub entry: Arc<RouteEntry>,
    /// Decoded parameter values in pattern order
    pub params: ParamVec,
}

impl RouteMatch {
    #[inline]
    #[must_use]
    pub fn get_param(&self, id: ParamId) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == id)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn is_redirect(&self) -> bool {
        self.entry.is_redirect()
    }

    #[must_use]
    pub fn view(&self) -> Option<ViewId> {
        self.entry.view()
    }

    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        self.entry.redirect_target()
    }
}

/// Immutable, validated route table
#[derive(Debug, Clone)]
pub struct RouteTable {
    name: Arc<str>,
    page: ViewId,
    mount: Cow<'static, str>,
    resolve_configuration: bool,
    entries: Vec<Arc<RouteEntry>>,
}

impl RouteTable {
    /// Start building a table hosted by `page`
    #[must_use]
    pub fn builder(name: &str, page: ViewId) -> RouteTableBuilder {
        RouteTableBuilder {
            name: Arc::from(name),
            page,
            mount: Cow::Owned(name.to_string()),
            resolve_configuration: false,
            landing_path: None,
            entries: Vec::new(),
        }
    }

    /// The transaction detail table
    ///
    /// # Errors
    ///
    /// Only fails if `landing_path` is empty, which leaves redirects without a target.
    pub fn transaction_detail(mount: &str, landing_path: &str) -> Result<Self, TableError> {
        use ParamId::*;

        let full = [TraceId, FocusTimestamp, AgentId, SpanId, ViewType, SearchId];
        let mut builder = Self::builder("transactionDetail", ViewId::TransactionDetailPage)
            .mount(mount)
            .resolve_configuration(true)
            .landing_path(landing_path);

        for len in (4..=full.len()).rev() {
            builder = builder.render(
                RoutePattern::params(&full[..len]),
                ViewId::TransactionDetailContents,
            );
        }
        for len in (1..4).rev() {
            builder = builder.redirect(RoutePattern::params(&full[..len]), landing_path);
        }
        builder.redirect(RoutePattern::root(), landing_path).build()
    }

    /// The transaction list table
    ///
    /// # Errors
    ///
    /// Only fails if `landing_path` is empty, which leaves redirects without a target.
    pub fn transaction_list(mount: &str, landing_path: &str) -> Result<Self, TableError> {
        use ParamId::*;

        let full = [Application, Period, EndTime, TransactionInfo, ViewType];
        let mut builder = Self::builder("transactionList", ViewId::TransactionListPage)
            .mount(mount)
            .resolve_configuration(true)
            .landing_path(landing_path)
            .render(
                RoutePattern::params(&full[..5]),
                ViewId::TransactionListBottomContents,
            )
            .render(
                RoutePattern::params(&full[..4]),
                ViewId::TransactionListBottomContents,
            )
            .render(RoutePattern::params(&full[..3]), ViewId::TransactionListEmpty);

        for len in (1..3).rev() {
            builder = builder.redirect(RoutePattern::params(&full[..len]), landing_path);
        }
        builder.redirect(RoutePattern::root(), landing_path).build()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn page(&self) -> ViewId {
        self.page
    }

    /// First URL segment under which the table is reachable
    #[must_use]
    pub fn mount(&self) -> &str {
        &self.mount
    }

    #[must_use]
    pub fn resolves_configuration(&self) -> bool {
        self.resolve_configuration
    }

    #[must_use]
    pub fn entries(&self) -> &[Arc<RouteEntry>] {
        &self.entries
    }

    /// Longest pattern in the table
    #[must_use]
    pub fn max_segments(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.pattern.segment_count())
            .max()
            .unwrap_or(0)
    }

    /// Select the first entry, in declaration order, whose pattern fully
    /// matches `segments`.
    ///
    /// Candidates longer than every pattern never match.
    #[must_use]
    pub fn match_segments<S: AsRef<str>>(&self, segments: &[S]) -> Option<RouteMatch> {
        for entry in &self.entries {
            if let Some(params) = entry.pattern.capture(segments) {
                debug!(
                    table = %self.name,
                    pattern = %entry.pattern,
                    segments = segments.len(),
                    "Table entry selected"
                );
                return Some(RouteMatch {
                    table: Arc::clone(&self.name),
                    page: self.page,
                    resolve_configuration: self.resolve_configuration,
                    entry: Arc::clone(entry),
                    params,
                });
            }
        }
        None
    }
}

/// Builder for [`RouteTable`]; entries keep their insertion order
#[derive(Debug)]
pub struct RouteTableBuilder {
    name: Arc<str>,
    page: ViewId,
    mount: Cow<'static, str>,
    resolve_configuration: bool,
    landing_path: Option<Arc<str>>,
    entries: Vec<RouteEntry>,
}

impl RouteTableBuilder {
    #[must_use]
    pub fn mount(mut self, mount: &str) -> Self {
        self.mount = Cow::Owned(mount.trim_matches('/').to_string());
        self
    }

    #[must_use]
    pub fn resolve_configuration(mut self, resolve: bool) -> Self {
        self.resolve_configuration = resolve;
        self
    }

    /// Landing path every redirect must target
    #[must_use]
    pub fn landing_path(mut self, path: &str) -> Self {
        self.landing_path = Some(Arc::from(path));
        self
    }

    #[must_use]
    pub fn render(mut self, pattern: RoutePattern, view: ViewId) -> Self {
        self.entries.push(RouteEntry::render(pattern, view));
        self
    }

    #[must_use]
    pub fn redirect(mut self, pattern: RoutePattern, to: &str) -> Self {
        self.entries.push(RouteEntry::redirect(pattern, to));
        self
    }

    #[must_use]
    pub fn entry(mut self, entry: RouteEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Validate and freeze the table
    ///
    /// # Errors
    ///
    /// See [`TableError`].
    pub fn build(self) -> Result<RouteTable, TableError> {
        let table = self.name.to_string();
        if self.entries.is_empty() {
            return Err(TableError::Empty { table });
        }

        for (i, entry) in self.entries.iter().enumerate() {
            let count = entry.pattern.segment_count();
            if let Some(earlier) = self.entries[..i]
                .iter()
                .find(|e| e.pattern.segment_count() == count)
            {
                return Err(TableError::DuplicateSegmentCount {
                    table,
                    count,
                    first: earlier.pattern.to_string(),
                    second: entry.pattern.to_string(),
                });
            }

            if let RouteAction::Redirect { to, full_match } = &entry.action {
                if !full_match {
                    return Err(TableError::PartialRedirect {
                        table,
                        pattern: entry.pattern.to_string(),
                    });
                }
                let landing = self.landing_path.as_deref().unwrap_or_default();
                if to.is_empty() || &**to != landing {
                    return Err(TableError::RedirectTarget {
                        table,
                        pattern: entry.pattern.to_string(),
                        target: to.to_string(),
                        landing: landing.to_string(),
                    });
                }
            }
        }

        Ok(RouteTable {
            name: self.name,
            page: self.page,
            mount: self.mount,
            resolve_configuration: self.resolve_configuration,
            entries: self.entries.into_iter().map(Arc::new).collect(),
        })
    }
}
