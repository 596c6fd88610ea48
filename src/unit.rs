// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 chronospan contributors

//! Calendar-unit arithmetic for UTC spans.
//!
//! [`Unit`] names the calendar units a [`UtcSpan`](crate::UtcSpan) can
//! be shifted by or measured in. All arithmetic delegates to chrono:
//! second through week shifts are fixed [`TimeDelta`]s, month and year
//! shifts use chrono's [`Months`] with its end-of-month clamping
//! semantics.

use crate::span::Span;
use chrono::{DateTime, Datelike, Months, TimeDelta, Utc};
use std::fmt;

/// A calendar unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
            Unit::Year => "year",
        };
        f.write_str(label)
    }
}

impl Span<DateTime<Utc>> {
    /// Shifts both endpoints by `count` units.
    ///
    /// A negative `count` shifts backwards. Both endpoints move by the
    /// same calendar delta, so the span keeps its length in calendar
    /// terms; elapsed seconds may differ across month and year shifts
    /// (month-length variance, end-of-month clamping).
    ///
    /// # Examples
    ///
    /// ```
    /// use chronospan::{Span, Unit};
    /// use chrono::{TimeZone, Utc};
    ///
    /// let jan = Span::new(
    ///     Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
    ///     Utc.with_ymd_and_hms(2020, 1, 31, 0, 0, 0).unwrap(),
    /// );
    /// let feb = jan.shift(Unit::Month, 1);
    /// assert_eq!(feb.start(), Utc.with_ymd_and_hms(2020, 2, 1, 0, 0, 0).unwrap());
    /// // Jan 31 clamps to Feb 29 in a leap year.
    /// assert_eq!(feb.end(), Utc.with_ymd_and_hms(2020, 2, 29, 0, 0, 0).unwrap());
    /// ```
    pub fn shift(&self, unit: Unit, count: i64) -> Self {
        Span::new(
            shift_point(self.start(), unit, count),
            shift_point(self.end(), unit, count),
        )
    }

    /// The number of whole units between `start()` and `end()`.
    ///
    /// Seconds through weeks count elapsed time. Months and years count
    /// full calendar units: a span from Jan 15 to Mar 14 holds one
    /// whole month.
    pub fn duration_in(&self, unit: Unit) -> i64 {
        match unit {
            Unit::Second => self.duration().num_seconds(),
            Unit::Minute => self.duration().num_minutes(),
            Unit::Hour => self.duration().num_hours(),
            Unit::Day => self.duration().num_days(),
            Unit::Week => self.duration().num_weeks(),
            Unit::Month => whole_months(self.start(), self.end()),
            Unit::Year => whole_months(self.start(), self.end()) / 12,
        }
    }
}

fn shift_point(point: DateTime<Utc>, unit: Unit, count: i64) -> DateTime<Utc> {
    match unit {
        Unit::Second => point + TimeDelta::seconds(count),
        Unit::Minute => point + TimeDelta::minutes(count),
        Unit::Hour => point + TimeDelta::hours(count),
        Unit::Day => point + TimeDelta::days(count),
        Unit::Week => point + TimeDelta::weeks(count),
        Unit::Month => add_months(point, count),
        Unit::Year => add_months(point, count * 12),
    }
}

fn add_months(point: DateTime<Utc>, count: i64) -> DateTime<Utc> {
    let months = Months::new(count.unsigned_abs() as u32);
    let shifted = if count >= 0 {
        point.checked_add_months(months)
    } else {
        point.checked_sub_months(months)
    };
    shifted.expect("month arithmetic out of chrono::DateTime<Utc> representable range")
}

/// Full calendar months elapsed from `start` to `end` (`start <= end`).
fn whole_months(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let mut months =
        (end.year() as i64 - start.year() as i64) * 12 + (end.month() as i64 - start.month() as i64);
    // The field difference overshoots by one when the last month is not
    // yet complete.
    if months > 0 && add_months(start, months) > end {
        months -= 1;
    }
    months
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn dt(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
    }

    #[test]
    fn shift_fixed_units_moves_both_endpoints() {
        let span = Span::new(dt(2020, 1, 1, 0), dt(2020, 1, 2, 0));

        let by_hours = span.shift(Unit::Hour, 6);
        assert_eq!(by_hours.start(), dt(2020, 1, 1, 6));
        assert_eq!(by_hours.end(), dt(2020, 1, 2, 6));

        let by_weeks = span.shift(Unit::Week, 2);
        assert_eq!(by_weeks.start(), dt(2020, 1, 15, 0));
        assert_eq!(by_weeks.end(), dt(2020, 1, 16, 0));

        // Fixed-delta shifts preserve elapsed duration exactly.
        assert_eq!(by_hours.duration(), span.duration());
        assert_eq!(by_weeks.duration(), span.duration());
    }

    #[test]
    fn shift_negative_count_goes_backwards() {
        let span = Span::new(dt(2020, 3, 10, 0), dt(2020, 3, 20, 0));
        let back = span.shift(Unit::Day, -9);

        assert_eq!(back.start(), dt(2020, 3, 1, 0));
        assert_eq!(back.end(), dt(2020, 3, 11, 0));
        assert_eq!(span.shift(Unit::Day, -9).shift(Unit::Day, 9), span);
    }

    #[test]
    fn shift_months_clamps_to_month_end() {
        let span = Span::new(dt(2020, 1, 1, 0), dt(2020, 1, 31, 0));
        let feb = span.shift(Unit::Month, 1);

        assert_eq!(feb.start(), dt(2020, 2, 1, 0));
        assert_eq!(feb.end(), dt(2020, 2, 29, 0));
    }

    #[test]
    fn shift_years_lands_on_same_date() {
        let span = Span::new(dt(2020, 6, 1, 0), dt(2020, 6, 30, 0));
        let next = span.shift(Unit::Year, 1);

        assert_eq!(next.start(), dt(2021, 6, 1, 0));
        assert_eq!(next.end(), dt(2021, 6, 30, 0));

        // Feb 29 clamps to Feb 28 on non-leap years.
        let leap_day = Span::new(dt(2020, 2, 29, 0), dt(2020, 2, 29, 12));
        let clamped = leap_day.shift(Unit::Year, 1);
        assert_eq!(clamped.start(), dt(2021, 2, 28, 0));
    }

    #[test]
    fn duration_in_fixed_units() {
        let span = Span::new(dt(2020, 1, 1, 0), dt(2020, 1, 15, 12));

        assert_eq!(span.duration_in(Unit::Second), 14 * 86_400 + 12 * 3_600);
        assert_eq!(span.duration_in(Unit::Minute), 14 * 1_440 + 12 * 60);
        assert_eq!(span.duration_in(Unit::Hour), 14 * 24 + 12);
        assert_eq!(span.duration_in(Unit::Day), 14);
        assert_eq!(span.duration_in(Unit::Week), 2);
    }

    #[test]
    fn duration_in_months_counts_whole_months() {
        // Jan 15 .. Mar 14: the second month is one day short.
        let almost_two = Span::new(dt(2020, 1, 15, 0), dt(2020, 3, 14, 0));
        assert_eq!(almost_two.duration_in(Unit::Month), 1);

        let exactly_two = Span::new(dt(2020, 1, 15, 0), dt(2020, 3, 15, 0));
        assert_eq!(exactly_two.duration_in(Unit::Month), 2);

        let same_month = Span::new(dt(2020, 1, 1, 0), dt(2020, 1, 31, 0));
        assert_eq!(same_month.duration_in(Unit::Month), 0);
    }

    #[test]
    fn duration_in_years() {
        let short = Span::new(dt(2020, 3, 1, 0), dt(2021, 2, 28, 0));
        assert_eq!(short.duration_in(Unit::Year), 0);

        let full = Span::new(dt(2020, 3, 1, 0), dt(2021, 3, 1, 0));
        assert_eq!(full.duration_in(Unit::Year), 1);

        let decade = Span::new(dt(2010, 1, 1, 0), dt(2020, 1, 1, 0));
        assert_eq!(decade.duration_in(Unit::Year), 10);
    }

    #[test]
    fn unit_display_labels() {
        assert_eq!(Unit::Second.to_string(), "second");
        assert_eq!(Unit::Month.to_string(), "month");
        assert_eq!(Unit::Year.to_string(), "year");
    }
}
