//! Parameter slot names shared by every route table.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Longest pattern in either table has six parameter slots.
pub const MAX_INLINE_PARAMS: usize = 6;

/// Extracted parameters in pattern order.
///
/// Stack-allocated: no route pattern carries more than [`MAX_INLINE_PARAMS`] slots.
pub type ParamVec = SmallVec<[(ParamId, String); MAX_INLINE_PARAMS]>;

/// The fixed set of named parameter slots a route pattern may use
///
/// The serialized form (`traceId`, `focusTimestamp`, ...) is the name used in
/// pattern strings such as `:traceId/:focusTimestamp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamId {
    /// Transaction (trace) identifier
    TraceId,
    /// Epoch-millis timestamp the detail view is focused on
    FocusTimestamp,
    /// Agent that recorded the span
    AgentId,
    /// Span identifier inside the trace
    SpanId,
    /// Sub-view selector (call tree, timeline, ...)
    ViewType,
    /// Search identifier carried over from the list view
    SearchId,
    /// Application name (usually `name@serviceType`)
    Application,
    /// Look-back period (`5m`, `1h`, ...)
    Period,
    /// End of the queried time range, epoch millis
    EndTime,
    /// Encoded selected-transaction descriptor
    TransactionInfo,
}

impl ParamId {
    /// Every slot, in declaration order.
    pub const ALL: [ParamId; 10] = [
        ParamId::TraceId,
        ParamId::FocusTimestamp,
        ParamId::AgentId,
        ParamId::SpanId,
        ParamId::ViewType,
        ParamId::SearchId,
        ParamId::Application,
        ParamId::Period,
        ParamId::EndTime,
        ParamId::TransactionInfo,
    ];

    /// Slot name as written in a route pattern
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ParamId::TraceId => "traceId",
            ParamId::FocusTimestamp => "focusTimestamp",
            ParamId::AgentId => "agentId",
            ParamId::SpanId => "spanId",
            ParamId::ViewType => "viewType",
            ParamId::SearchId => "searchId",
            ParamId::Application => "application",
            ParamId::Period => "period",
            ParamId::EndTime => "endTime",
            ParamId::TransactionInfo => "transactionInfo",
        }
    }

    /// Look a slot up by its pattern name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == name)
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a pattern names a slot outside [`ParamId::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route parameter ':{0}'")]
pub struct UnknownParam(pub String);

impl FromStr for ParamId {
    type Err = UnknownParam;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownParam(s.to_string()))
    }
}
