//! Typed view parameters.
//!
//! The matcher hands views raw string slots. The detail and list views need
//! some of them as numbers (timestamps, span ids); these structs do that
//! conversion once and can rebuild the canonical path for a set of values.

use serde::Serialize;
use std::num::ParseIntError;

use crate::router::{ParamId, RouteMatch};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    #[error("missing route parameter ':{0}'")]
    Missing(ParamId),
    #[error("route parameter ':{param}' has non-numeric value '{value}': {source}")]
    InvalidParam {
        param: ParamId,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

fn required(m: &RouteMatch, id: ParamId) -> Result<String, ParamError> {
    m.get_param(id)
        .map(str::to_string)
        .ok_or(ParamError::Missing(id))
}

fn numeric(m: &RouteMatch, id: ParamId) -> Result<i64, ParamError> {
    let value = m.get_param(id).ok_or(ParamError::Missing(id))?;
    value.parse().map_err(|source| ParamError::InvalidParam {
        param: id,
        value: value.to_string(),
        source,
    })
}

fn optional(m: &RouteMatch, id: ParamId) -> Option<String> {
    m.get_param(id).map(str::to_string)
}

/// Join a mount and segment values into an encoded path
fn join_path<'a>(mount: &str, segments: impl IntoIterator<Item = &'a str>) -> String {
    let mut path = format!("/{}", mount.trim_matches('/'));
    for segment in segments {
        path.push('/');
        path.push_str(&urlencoding::encode(segment));
    }
    path
}

/// Parameters of the transaction detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailParams {
    pub trace_id: String,
    pub focus_timestamp: i64,
    pub agent_id: String,
    pub span_id: i64,
    pub view_type: Option<String>,
    pub search_id: Option<String>,
}

impl TryFrom<&RouteMatch> for DetailParams {
    type Error = ParamError;

    fn try_from(m: &RouteMatch) -> Result<Self, Self::Error> {
        Ok(Self {
            trace_id: required(m, ParamId::TraceId)?,
            focus_timestamp: numeric(m, ParamId::FocusTimestamp)?,
            agent_id: required(m, ParamId::AgentId)?,
            span_id: numeric(m, ParamId::SpanId)?,
            view_type: optional(m, ParamId::ViewType),
            search_id: optional(m, ParamId::SearchId),
        })
    }
}

impl DetailParams {
    /// Canonical path under `mount`. A search id without a view type is dropped,
    /// since the pattern cannot express it.
    #[must_use]
    pub fn to_path(&self, mount: &str) -> String {
        let focus = self.focus_timestamp.to_string();
        let span = self.span_id.to_string();
        let mut segments = vec![
            self.trace_id.as_str(),
            focus.as_str(),
            self.agent_id.as_str(),
            span.as_str(),
        ];
        if let Some(view_type) = &self.view_type {
            segments.push(view_type);
            if let Some(search_id) = &self.search_id {
                segments.push(search_id);
            }
        }
        join_path(mount, segments)
    }
}

/// Parameters of the transaction list views
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub application: String,
    pub period: String,
    pub end_time: i64,
    pub transaction_info: Option<String>,
    pub view_type: Option<String>,
}

impl TryFrom<&RouteMatch> for ListParams {
    type Error = ParamError;

    fn try_from(m: &RouteMatch) -> Result<Self, Self::Error> {
        Ok(Self {
            application: required(m, ParamId::Application)?,
            period: required(m, ParamId::Period)?,
            end_time: numeric(m, ParamId::EndTime)?,
            transaction_info: optional(m, ParamId::TransactionInfo),
            view_type: optional(m, ParamId::ViewType),
        })
    }
}

impl ListParams {
    /// Canonical path under `mount`. A view type without transaction info is dropped.
    #[must_use]
    pub fn to_path(&self, mount: &str) -> String {
        let end_time = self.end_time.to_string();
        let mut segments = vec![
            self.application.as_str(),
            self.period.as_str(),
            end_time.as_str(),
        ];
        if let Some(info) = &self.transaction_info {
            segments.push(info);
            if let Some(view_type) = &self.view_type {
                segments.push(view_type);
            }
        }
        join_path(mount, segments)
    }
}
