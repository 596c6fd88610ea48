// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 chronospan contributors

//! Time-point abstraction.
//!
//! [`TimePoint`] is the capability a [`Span`](crate::Span) endpoint must
//! provide: comparison, min/max, and duration arithmetic. The span
//! algebra never does date math of its own; everything routes through
//! this trait and the implementing type's own arithmetic.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

/// Trait for types that represent a point in time.
///
/// Types implementing this trait can be used as the endpoints of a
/// [`Span<T>`](crate::Span) and provide basic duration arithmetic.
pub trait TimePoint: Copy + Clone + PartialEq + PartialOrd + Sized {
    /// The duration type used for arithmetic operations.
    ///
    /// Must be comparable so spans can be ordered by length.
    type Duration: PartialOrd;

    /// Compute the difference between two time points (`self - other`).
    fn difference(&self, other: &Self) -> Self::Duration;

    /// Add a duration to this time point.
    fn add_duration(&self, duration: Self::Duration) -> Self;

    /// Subtract a duration from this time point.
    fn sub_duration(&self, duration: Self::Duration) -> Self;

    /// Element-wise minimum.
    #[inline]
    fn min_point(self, other: Self) -> Self {
        if self <= other {
            self
        } else {
            other
        }
    }

    /// Element-wise maximum.
    #[inline]
    fn max_point(self, other: Self) -> Self {
        if self >= other {
            self
        } else {
            other
        }
    }
}

impl TimePoint for DateTime<Utc> {
    type Duration = TimeDelta;

    #[inline]
    fn difference(&self, other: &Self) -> Self::Duration {
        *self - *other
    }

    #[inline]
    fn add_duration(&self, duration: Self::Duration) -> Self {
        *self + duration
    }

    #[inline]
    fn sub_duration(&self, duration: Self::Duration) -> Self {
        *self - duration
    }
}

impl TimePoint for NaiveDateTime {
    type Duration = TimeDelta;

    #[inline]
    fn difference(&self, other: &Self) -> Self::Duration {
        *self - *other
    }

    #[inline]
    fn add_duration(&self, duration: Self::Duration) -> Self {
        *self + duration
    }

    #[inline]
    fn sub_duration(&self, duration: Self::Duration) -> Self {
        *self - duration
    }
}
