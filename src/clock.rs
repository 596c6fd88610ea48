// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 chronospan contributors

//! Injectable "now" source.
//!
//! Reading the wall clock is the only non-deterministic operation in
//! the crate, so it sits behind the [`Clock`] trait: production code
//! uses [`SystemClock`], tests use [`FixedClock`].

use chrono::{DateTime, Utc};

/// A source of the current time.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a fixed instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
