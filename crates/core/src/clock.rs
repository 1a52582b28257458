//! Calendar source for time-derived values (e.g. a person's age).
//!
//! Domain types never read the wall clock directly. They ask a [`Clock`], so
//! tests and callers can pin the reference year.

use chrono::{Datelike, Local};

/// Source of the current calendar year.
pub trait Clock {
    /// The calendar year "now" is in.
    fn current_year(&self) -> i32;
}

/// Wall-clock backed [`Clock`] (local time zone).
///
/// Every call reads the clock again; nothing is cached.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// A clock frozen at a fixed year: `FixedClock(2024)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn current_year(&self) -> i32 {
        (**self).current_year()
    }
}
