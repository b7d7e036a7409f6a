//! Dotted key paths for addressing values inside nested dictionaries
//!
//! A `KeyPath` is an ordered list of string segments produced by splitting
//! an input like `"targets.MASK.size"` on `.`. Splitting is purely lexical:
//! consecutive separators produce empty segments, and the empty string
//! parses to a single empty segment (a key literally named `""`), never to
//! a zero-segment path. A zero-segment path exists only via
//! [`KeyPath::empty`] or tail decomposition.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between key path segments
pub const SEPARATOR: char = '.';

/// An ordered, immutable sequence of key segments
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a dotted string into a key path
    ///
    /// `"targets.MASK.size"` becomes `["targets", "MASK", "size"]`. The
    /// empty string becomes a single empty segment.
    pub fn parse(input: &str) -> Self {
        Self {
            segments: input.split(SEPARATOR).map(str::to_string).collect(),
        }
    }

    /// A path with no segments
    ///
    /// Getting through it is always a miss and setting through it is always
    /// a no-op.
    pub fn empty() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Build a path directly from segments
    pub fn from_segments(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// The segments in traversal order
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Strip off the first segment and return it together with the
    /// remaining path
    ///
    /// Returns `None` when the path has no segments. The original path is
    /// left untouched.
    pub fn head_and_tail(&self) -> Option<(&str, KeyPath)> {
        let (head, tail) = self.segments.split_first()?;
        Some((
            head.as_str(),
            KeyPath {
                segments: tail.to_vec(),
            },
        ))
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
