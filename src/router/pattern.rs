//! Route patterns and candidate path normalisation.
//!
//! A pattern is written the way the dashboard declares it: slash-separated
//! segments where `:name` is a parameter slot and anything else is a literal.
//! The empty string is the root pattern and has zero segments.
//!
//! Incoming paths go through [`Candidate::parse`] before they are compared
//! against a pattern:
//!
//! 1. Query string and fragment are dropped.
//! 2. Leading and trailing `/` are trimmed.
//! 3. The rest is split on `/` and every segment is percent-decoded.
//!
//! An empty interior segment (`a//b`) or a segment that does not decode to
//! UTF-8 makes the candidate malformed, which callers treat as "no match".

use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

use super::params::{ParamId, ParamVec, UnknownParam};

/// One token of a [`RoutePattern`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathToken {
    /// Segment that must match exactly
    Literal(Cow<'static, str>),
    /// Slot that accepts any single non-empty segment
    Param(ParamId),
}

impl PathToken {
    fn accepts(&self, segment: &str) -> bool {
        match self {
            PathToken::Literal(lit) => *lit == segment,
            PathToken::Param(_) => !segment.is_empty(),
        }
    }
}

/// Ordered sequence of literal and parameter tokens
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RoutePattern {
    tokens: Vec<PathToken>,
}

impl RoutePattern {
    /// The root pattern `''`
    #[must_use]
    pub fn root() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Pattern made only of parameter slots, in the given order
    #[must_use]
    pub fn params(ids: &[ParamId]) -> Self {
        Self {
            tokens: ids.iter().copied().map(PathToken::Param).collect(),
        }
    }

    /// Parse a pattern such as `:traceId/:focusTimestamp` or `''`
    ///
    /// # Errors
    ///
    /// Returns [`UnknownParam`] when a `:name` slot is not one of [`ParamId::ALL`].
    pub fn parse(pattern: &str) -> Result<Self, UnknownParam> {
        let trimmed = pattern.trim_matches('/');
        if trimmed.is_empty() {
            return Ok(Self::root());
        }

        let tokens = trimmed
            .split('/')
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) => name.parse().map(PathToken::Param),
                None => Ok(PathToken::Literal(Cow::Owned(segment.to_string()))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { tokens })
    }

    #[must_use]
    pub fn tokens(&self) -> &[PathToken] {
        &self.tokens
    }

    /// Number of path segments this pattern consumes
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Parameter slots in pattern order
    pub fn param_ids(&self) -> impl Iterator<Item = ParamId> + '_ {
        self.tokens.iter().filter_map(|t| match t {
            PathToken::Param(id) => Some(*id),
            PathToken::Literal(_) => None,
        })
    }

    /// Structural full match: same segment count and every token accepts its
    /// segment. Returns the captured parameters on success.
    #[must_use]
    pub fn capture<S: AsRef<str>>(&self, segments: &[S]) -> Option<ParamVec> {
        if segments.len() != self.tokens.len() {
            return None;
        }

        let mut params = ParamVec::new();
        for (token, segment) in self.tokens.iter().zip(segments) {
            let segment = segment.as_ref();
            if !token.accepts(segment) {
                return None;
            }
            if let PathToken::Param(id) = token {
                params.push((*id, segment.to_string()));
            }
        }
        Some(params)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tokens.is_empty() {
            return f.write_str("''");
        }
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            match token {
                PathToken::Literal(lit) => f.write_str(lit)?,
                PathToken::Param(id) => write!(f, ":{id}")?,
            }
        }
        Ok(())
    }
}

/// A normalised incoming path, split into decoded segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    segments: SmallVec<[Cow<'a, str>; 8]>,
}

impl<'a> Candidate<'a> {
    /// Normalise a raw path. Returns `None` for malformed paths.
    #[must_use]
    pub fn parse(raw: &'a str) -> Option<Self> {
        let path = raw.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_matches('/');

        let mut segments = SmallVec::new();
        if path.is_empty() {
            return Some(Self { segments });
        }

        for segment in path.split('/') {
            if segment.is_empty() {
                return None;
            }
            segments.push(urlencoding::decode(segment).ok()?);
        }
        Some(Self { segments })
    }

    #[must_use]
    pub fn segments(&self) -> &[Cow<'a, str>] {
        &self.segments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Split off the first segment, returning it and the remaining candidate
    #[must_use]
    pub fn split_first(&self) -> Option<(&str, &[Cow<'a, str>])> {
        self.segments
            .split_first()
            .map(|(head, rest)| (&**head, rest))
    }
}
