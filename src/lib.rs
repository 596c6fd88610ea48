// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 chronospan contributors

//! Date-interval value type.
//!
//! A [`Span<T>`] is the span between two points in time, always
//! observed with `start() <= end()` regardless of the order the
//! endpoints were supplied in. The interval algebra — containment,
//! overlap, common part, merge, gap, split — is generic over any
//! [`TimePoint`]; [`UtcSpan`] is the primary instantiation and carries
//! a calendar-unit layer that delegates all date arithmetic to chrono.
//!
//! # Core types
//!
//! - [`Span<T>`] — generic interval over any [`TimePoint`].
//! - [`UtcSpan`] — type alias for `Span<DateTime<Utc>>`.
//! - [`TimePoint`] — trait for points in time usable with [`Span`].
//! - [`Unit`] — calendar units for [`UtcSpan::shift`] and
//!   [`UtcSpan::duration_in`].
//! - [`Precision`] — endpoint normalization (whole seconds vs full
//!   sub-second precision).
//! - [`Clock`] — injectable "now" source ([`SystemClock`],
//!   [`FixedClock`]).
//! - [`SpanError`] — parse failures from [`UtcSpan::parse`].
//!
//! # Total by design
//!
//! Every query about the relation between spans returns a well-defined
//! value: merging disjoint spans is a documented no-op, splitting
//! outside a span yields an empty list, and absent overlaps or gaps
//! are `None`. The only fallible operation in the crate is parsing
//! endpoint strings.
//!
//! # Example
//!
//! ```
//! use chronospan::Span;
//! use chrono::{TimeZone, Utc};
//!
//! let jan = Span::new(
//!     Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2020, 1, 31, 0, 0, 0).unwrap(),
//! );
//! let late = Span::new(
//!     Utc.with_ymd_and_hms(2020, 1, 15, 0, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2020, 2, 15, 0, 0, 0).unwrap(),
//! );
//!
//! assert!(jan.overlaps(&late));
//! let shared = jan.common(&late).unwrap();
//! assert_eq!(shared.start(), late.start());
//! assert_eq!(shared.end(), jan.end());
//! ```

mod calendar;
mod clock;
mod error;
mod point;
mod span;
mod unit;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::Precision;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::SpanError;
pub use point::TimePoint;
pub use span::{complement_within, intersect_all, Span, UtcSpan};
pub use unit::Unit;
