// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 chronospan contributors

//! UTC constructors and whole-unit spans.
//!
//! This is the convenience layer over the span algebra: endpoint
//! precision handling, RFC 3339 parsing, clock-based construction, and
//! named constructors covering a whole day, week, month, year, decade
//! or century. All calendar normalization delegates to chrono.

use crate::clock::Clock;
use crate::error::SpanError;
use crate::span::Span;
use chrono::{
    DateTime, Datelike, Days, Months, NaiveDate, NaiveTime, TimeZone, Timelike, Utc,
};

/// Endpoint precision for UTC span construction.
///
/// [`Precision::Second`] (the default) normalizes endpoints to whole
/// seconds at construction time; [`Precision::Full`] keeps sub-second
/// precision, so endpoint equality comparisons see nanoseconds.
/// The choice affects construction only, never the algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// Truncate endpoints to whole seconds.
    #[default]
    Second,
    /// Keep endpoints exactly as given.
    Full,
}

impl Precision {
    /// Applies this precision to a single endpoint.
    pub fn truncate(self, point: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Precision::Second => point.with_nanosecond(0).unwrap_or(point),
            Precision::Full => point,
        }
    }
}

impl Span<DateTime<Utc>> {
    /// Creates a UTC span with endpoints truncated to whole seconds.
    ///
    /// Use [`Span::new`] or [`utc_with`](Self::utc_with) with
    /// [`Precision::Full`] to keep sub-second precision.
    pub fn utc(a: DateTime<Utc>, b: DateTime<Utc>) -> Self {
        Self::utc_with(a, b, Precision::Second)
    }

    /// Creates a UTC span with explicit endpoint precision.
    pub fn utc_with(a: DateTime<Utc>, b: DateTime<Utc>, precision: Precision) -> Self {
        Span::new(precision.truncate(a), precision.truncate(b))
    }

    /// Parses two RFC 3339 strings into a span.
    ///
    /// Endpoints are truncated to whole seconds; parse failures
    /// propagate as [`SpanError::Parse`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chronospan::Span;
    ///
    /// let span = Span::parse("2020-01-15T08:30:00Z", "2020-01-01T00:00:00Z").unwrap();
    /// assert!(span.start() < span.end());
    ///
    /// assert!(Span::parse("not a date", "2020-01-01T00:00:00Z").is_err());
    /// ```
    pub fn parse(a: &str, b: &str) -> Result<Self, SpanError> {
        let a = DateTime::parse_from_rfc3339(a)?.with_timezone(&Utc);
        let b = DateTime::parse_from_rfc3339(b)?.with_timezone(&Utc);
        Ok(Self::utc(a, b))
    }

    /// A degenerate span at the clock's current instant.
    ///
    /// The clock is read once and shared by both endpoints, so the
    /// result is always zero-length.
    pub fn instant(clock: &impl Clock) -> Self {
        let now = clock.now();
        Self::utc(now, now)
    }

    /// Creates a span where each missing endpoint defaults to "now".
    ///
    /// The clock is read once per missing endpoint: with two `None`
    /// arguments and a clock that advances between reads the result is
    /// a non-degenerate span. Use [`instant`](Self::instant) for a
    /// single shared reading.
    pub fn from_optional(
        a: Option<DateTime<Utc>>,
        b: Option<DateTime<Utc>>,
        clock: &impl Clock,
        precision: Precision,
    ) -> Self {
        let a = a.unwrap_or_else(|| clock.now());
        let b = b.unwrap_or_else(|| clock.now());
        Self::utc_with(a, b, precision)
    }

    // ── whole-unit constructors ───────────────────────────────────────

    /// The whole calendar day containing `date`.
    ///
    /// Runs from 00:00:00 to the last representable moment of the day,
    /// normalized per `precision` (23:59:59 at [`Precision::Second`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use chronospan::{Precision, Span};
    /// use chrono::{TimeZone, Utc};
    ///
    /// let noon = Utc.with_ymd_and_hms(2020, 6, 15, 12, 30, 0).unwrap();
    /// let day = Span::day(noon, Precision::Second);
    /// assert_eq!(day.start(), Utc.with_ymd_and_hms(2020, 6, 15, 0, 0, 0).unwrap());
    /// assert_eq!(day.end(), Utc.with_ymd_and_hms(2020, 6, 15, 23, 59, 59).unwrap());
    /// ```
    pub fn day(date: DateTime<Utc>, precision: Precision) -> Self {
        let d = date.date_naive();
        Self::utc_with(at_start(d), at_end(d), precision)
    }

    /// The whole Monday-to-Sunday week containing `date`.
    pub fn week(date: DateTime<Utc>, precision: Precision) -> Self {
        let monday =
            date.date_naive() - Days::new(u64::from(date.weekday().num_days_from_monday()));
        Self::utc_with(at_start(monday), at_end(monday + Days::new(6)), precision)
    }

    /// The whole calendar month containing `date`.
    pub fn month(date: DateTime<Utc>, precision: Precision) -> Self {
        let first = first_of_month(date.year(), date.month());
        Self::utc_with(at_start(first), at_end(last_of_month(first)), precision)
    }

    /// The whole calendar year containing `date`.
    pub fn year(date: DateTime<Utc>, precision: Precision) -> Self {
        Self::year_range(date.year(), date.year(), precision)
    }

    /// The whole decade containing `date` (2020-01-01 to 2029-12-31).
    pub fn decade(date: DateTime<Utc>, precision: Precision) -> Self {
        let first = date.year() - date.year().rem_euclid(10);
        Self::year_range(first, first + 9, precision)
    }

    /// The whole century containing `date` (2001-01-01 to 2100-12-31).
    pub fn century(date: DateTime<Utc>, precision: Precision) -> Self {
        let first = date.year() - (date.year() - 1).rem_euclid(100);
        Self::year_range(first, first + 99, precision)
    }

    /// The whole current day according to `clock`.
    pub fn today(clock: &impl Clock, precision: Precision) -> Self {
        Self::day(clock.now(), precision)
    }

    /// The whole previous day according to `clock`.
    pub fn yesterday(clock: &impl Clock, precision: Precision) -> Self {
        Self::day(clock.now() - Days::new(1), precision)
    }

    /// The whole next day according to `clock`.
    pub fn tomorrow(clock: &impl Clock, precision: Precision) -> Self {
        Self::day(clock.now() + Days::new(1), precision)
    }

    fn year_range(first: i32, last: i32, precision: Precision) -> Self {
        let start =
            NaiveDate::from_ymd_opt(first, 1, 1).expect("year out of chrono's representable range");
        let end =
            NaiveDate::from_ymd_opt(last, 12, 31).expect("year out of chrono's representable range");
        Self::utc_with(at_start(start), at_end(end), precision)
    }
}

fn at_start(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

fn at_end(date: NaiveDate) -> DateTime<Utc> {
    let last_moment = NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999)
        .expect("23:59:59.999999999 is a valid wall-clock time");
    Utc.from_utc_datetime(&date.and_time(last_moment))
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("the first of a real month always exists")
}

fn last_of_month(first: NaiveDate) -> NaiveDate {
    first
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .expect("month arithmetic out of chrono's representable range")
}
