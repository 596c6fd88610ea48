// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 chronospan contributors

//! Span implementation: the interval algebra.
//!
//! This module provides:
//! - [`Span<T>`]: generic interval over any [`TimePoint`]
//! - [`UtcSpan`]: alias for `Span<DateTime<Utc>>`
//! - [`complement_within`] / [`intersect_all`]: list-level operations

use crate::point::TimePoint;
use chrono::{DateTime, Utc};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// Represents the span between two points in time.
///
/// A `Span` is defined by two endpoints of type `T`, where `T`
/// implements the [`TimePoint`] trait. Endpoints may be supplied in
/// either order; they are stored sorted, so `start() <= end()` holds on
/// every observation. A degenerate span (`start == end`) is legal and
/// behaves consistently in every operation.
///
/// Spans are plain `Copy` values: a copy is fully independent of its
/// source.
///
/// # Examples
///
/// ```
/// use chronospan::Span;
/// use chrono::{TimeZone, Utc};
///
/// let a = Utc.with_ymd_and_hms(2020, 1, 31, 0, 0, 0).unwrap();
/// let b = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
///
/// // Reversed arguments are normalized.
/// let span = Span::new(a, b);
/// assert_eq!(span.start(), b);
/// assert_eq!(span.end(), a);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span<T: TimePoint> {
    start: T,
    end: T,
}

/// UTC span alias.
pub type UtcSpan = Span<DateTime<Utc>>;

impl<T: TimePoint> Span<T> {
    /// Creates a new span between two time points.
    ///
    /// The endpoints may be given in either order.
    pub fn new(a: T, b: T) -> Self {
        Span {
            start: a.min_point(b),
            end: a.max_point(b),
        }
    }

    /// The earlier endpoint.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// The later endpoint.
    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    /// The length of the span as `end - start`.
    pub fn duration(&self) -> T::Duration {
        self.end.difference(&self.start)
    }

    /// Whether the span is degenerate (zero length).
    #[inline]
    pub fn is_instant(&self) -> bool {
        self.start == self.end
    }

    // ── relational predicates ─────────────────────────────────────────

    /// Whether `point` lies between `start()` and `end()`.
    ///
    /// With `inclusive`, the boundaries themselves count as inside.
    pub fn has(&self, point: T, inclusive: bool) -> bool {
        if inclusive {
            point >= self.start && point <= self.end
        } else {
            point > self.start && point < self.end
        }
    }

    /// Whether both spans share the same start and end.
    ///
    /// Equivalent to `==`.
    pub fn same(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }

    /// Whether both spans start at the same point.
    pub fn starts_with(&self, other: &Self) -> bool {
        self.start == other.start
    }

    /// Whether both spans end at the same point.
    pub fn ends_with(&self, other: &Self) -> bool {
        self.end == other.end
    }

    /// Whether this span is strictly shorter than `other`.
    pub fn shorter(&self, other: &Self) -> bool {
        self.duration() < other.duration()
    }

    /// Whether this span is shorter than or as long as `other`.
    pub fn shorter_eq(&self, other: &Self) -> bool {
        self.duration() <= other.duration()
    }

    /// Whether this span is strictly longer than `other`.
    pub fn longer(&self, other: &Self) -> bool {
        self.duration() > other.duration()
    }

    /// Whether this span is longer than or as long as `other`.
    pub fn longer_eq(&self, other: &Self) -> bool {
        self.duration() >= other.duration()
    }

    /// Whether this span lies strictly inside `other`.
    ///
    /// Strict on both ends: a span is never `within` an identical span
    /// (use [`same`](Self::same) or [`within_or_same`](Self::within_or_same)).
    pub fn within(&self, other: &Self) -> bool {
        self.start > other.start && self.end < other.end
    }

    /// Whether this span lies strictly inside `other`, or equals it.
    pub fn within_or_same(&self, other: &Self) -> bool {
        self.within(other) || self.same(other)
    }

    /// Whether this span is a strict superset of `other`.
    ///
    /// Dual of [`within`](Self::within): strict on both ends.
    pub fn encloses(&self, other: &Self) -> bool {
        self.start < other.start && self.end > other.end
    }

    /// Whether the two spans share no point at all.
    ///
    /// Spans that merely touch at an endpoint are NOT disjoint.
    pub fn disjoint(&self, other: &Self) -> bool {
        self.end < other.start || other.end < self.start
    }

    /// Whether the two spans share at least one point.
    ///
    /// `a.overlaps(&b) == !a.disjoint(&b)` for all spans.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.common(other).is_some()
    }

    // ── set-like operations ───────────────────────────────────────────

    /// Returns the overlapping sub-span, or `None` if there is none.
    ///
    /// Boundaries are inclusive: spans that touch at a single point
    /// have a degenerate common part.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronospan::Span;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let jan = Span::new(
    ///     Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
    ///     Utc.with_ymd_and_hms(2020, 1, 31, 0, 0, 0).unwrap(),
    /// );
    /// let mid = Span::new(
    ///     Utc.with_ymd_and_hms(2020, 1, 15, 0, 0, 0).unwrap(),
    ///     Utc.with_ymd_and_hms(2020, 2, 15, 0, 0, 0).unwrap(),
    /// );
    ///
    /// let shared = jan.common(&mid).unwrap();
    /// assert_eq!(shared.start(), mid.start());
    /// assert_eq!(shared.end(), jan.end());
    /// ```
    pub fn common(&self, other: &Self) -> Option<Self> {
        if self.disjoint(other) {
            return None;
        }

        if self.same(other) {
            return Some(*other);
        }

        if self.encloses(other) {
            return Some(*other);
        }

        if self.within(other) {
            return Some(*self);
        }

        if self.has(other.start, true) && other.has(self.end, true) {
            return Some(Self::new(other.start, self.end));
        }

        if self.has(other.end, true) && other.has(self.start, true) {
            return Some(Self::new(self.start, other.end));
        }

        // Unreachable given the disjoint guard above.
        None
    }

    /// Merges two spans into their hull, if they share a point.
    ///
    /// Merging with a disjoint span is a no-op returning a copy of
    /// `self`; the union of disjoint spans is not a single span, and
    /// this method never fails.
    pub fn merge(&self, other: &Self) -> Self {
        if self.disjoint(other) {
            return *self;
        }

        self.merge_outer(other)
    }

    /// Unconditional hull of two spans.
    ///
    /// `[min(starts), max(ends)]` regardless of overlap; the result of
    /// merging disjoint spans covers the gap between them. Use
    /// [`merge`](Self::merge) for the union-only-if-touching behavior.
    pub fn merge_outer(&self, other: &Self) -> Self {
        Self::new(
            self.start.min_point(other.start),
            self.end.max_point(other.end),
        )
    }

    /// Returns the span strictly between two disjoint spans.
    ///
    /// `None` when the spans touch or overlap:
    /// `a.gap(&b).is_none() == !a.disjoint(&b)`.
    pub fn gap(&self, other: &Self) -> Option<Self> {
        if self.end < other.start {
            return Some(Self::new(self.end, other.start));
        }

        if other.end < self.start {
            return Some(Self::new(other.end, self.start));
        }

        None
    }

    /// Splits the span in two at `point`.
    ///
    /// Returns `[start, point]` and `[point, end]`, or an empty vector
    /// when `point` lies outside the span. Splitting at a boundary is
    /// allowed and yields one degenerate half.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronospan::Span;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let jan = Span::new(
    ///     Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
    ///     Utc.with_ymd_and_hms(2020, 1, 31, 0, 0, 0).unwrap(),
    /// );
    /// let mid = Utc.with_ymd_and_hms(2020, 1, 15, 0, 0, 0).unwrap();
    ///
    /// let halves = jan.split(mid);
    /// assert_eq!(halves.len(), 2);
    /// assert_eq!(halves[0].end(), mid);
    /// assert_eq!(halves[1].start(), mid);
    ///
    /// let outside = Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap();
    /// assert!(jan.split(outside).is_empty());
    /// ```
    pub fn split(&self, point: T) -> Vec<Self> {
        if !self.has(point, true) {
            return Vec::new();
        }

        vec![Self::new(self.start, point), Self::new(point, self.end)]
    }
}

// Display implementation
impl<T: TimePoint + fmt::Display> fmt::Display for Span<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

// Serde support for Span<T>.
//
// Deserialization routes through `Span::new`, so the start <= end
// invariant survives hand-written input with swapped fields.
#[cfg(feature = "serde")]
impl<T: TimePoint + Serialize> Serialize for Span<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Span", 2)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: TimePoint + Deserialize<'de>> Deserialize<'de> for Span<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw<T> {
            start: T,
            end: T,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Span::new(raw.start, raw.end))
    }
}

/// Returns the gaps (complement) of `spans` within the bounding `outer` span.
///
/// Given a sorted, non-overlapping list of sub-spans and a bounding
/// span, this returns the time NOT covered by any sub-span. Spans are
/// treated as half-open here: a sub-span touching the cursor leaves no
/// gap. Runs in O(n) with a single pass.
///
/// # Arguments
/// * `outer` - The bounding span
/// * `spans` - Sorted, non-overlapping sub-spans within `outer`
///
/// # Returns
/// The complement spans (gaps) in chronological order.
pub fn complement_within<T: TimePoint>(outer: Span<T>, spans: &[Span<T>]) -> Vec<Span<T>> {
    let mut gaps = Vec::new();
    let mut cursor = outer.start();
    for s in spans {
        if s.start() > cursor {
            gaps.push(Span::new(cursor, s.start()));
        }
        if s.end() > cursor {
            cursor = s.end();
        }
    }
    if cursor < outer.end() {
        gaps.push(Span::new(cursor, outer.end()));
    }
    gaps
}

/// Returns the intersection of two sorted, non-overlapping span lists.
///
/// Uses an O(n+m) merge-walk. Spans are treated as half-open here:
/// lists that merely touch contribute no overlap.
///
/// # Arguments
/// * `a` - First sorted, non-overlapping span list
/// * `b` - Second sorted, non-overlapping span list
///
/// # Returns
/// Spans where both `a` and `b` overlap, in chronological order.
pub fn intersect_all<T: TimePoint>(a: &[Span<T>], b: &[Span<T>]) -> Vec<Span<T>> {
    let mut result = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        let start = a[i].start().max_point(b[j].start());
        let end = a[i].end().min_point(b[j].end());
        if start < end {
            result.push(Span::new(start, end));
        }
        if a[i].end() <= b[j].end() {
            i += 1;
        } else {
            j += 1;
        }
    }
    result
}
