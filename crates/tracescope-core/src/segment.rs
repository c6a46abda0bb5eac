//! Numeric segments and clamping.
//!
//! A [`Segment`] is the closed interval a draggable marker is allowed to
//! occupy. The interval is owned by the embedding view (it tracks the
//! visible part of the timeline) and is re-fetched on every clamp, so it
//! is a plain copyable value rather than a handle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed numeric interval `[from, to]`.
///
/// Used both as a valid drag domain and as a span of pixels or
/// timestamps. The bounds are not validated: a segment with
/// `from > to` is representable and [`Segment::clamp`] degenerates to a
/// constant for it (see below), which matches how a transiently inverted
/// viewport behaves in the embedding layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: f64,
    pub to: f64,
}

impl Segment {
    /// Creates a new segment from its two bounds.
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Returns the length of the segment (`to - from`).
    ///
    /// Negative for an inverted segment.
    pub fn length(&self) -> f64 {
        self.to - self.from
    }

    /// Returns `true` if `x` lies within the closed interval.
    pub fn contains(&self, x: f64) -> bool {
        self.from <= x && x <= self.to
    }

    /// Constrains `x` to the closed interval.
    ///
    /// Computed as `max(from, min(x, to))`, so for a well-formed segment
    /// the result is `x` when inside, and the nearer bound otherwise. The
    /// bounds are read fresh from this snapshot each call; callers that
    /// need the current domain re-fetch the segment first.
    ///
    /// For an inverted segment (`from > to`) every input collapses to
    /// `from`. Documented edge case, not an error.
    pub fn clamp(&self, x: f64) -> f64 {
        self.from.max(x.min(self.to))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.from, self.to)
    }
}
