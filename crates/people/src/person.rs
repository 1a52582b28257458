use core::cmp::{Ordering, Reverse};

use serde::{Deserialize, Serialize};

use bookshop_core::{Clock, SystemClock, ValueObject};

/// A person, ordered by age, then surname, then first name.
///
/// Age is never stored: it is recomputed from a [`Clock`] on every call. The
/// [`Ord`] impl needs no clock because both sides of a comparison are aged
/// against the same year, so "younger first" is "later birth year first".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    first_name: String,
    surname: String,
    birth_year: i32,
}

impl Person {
    pub fn new(first_name: impl Into<String>, surname: impl Into<String>, birth_year: i32) -> Self {
        Self {
            first_name: first_name.into(),
            surname: surname.into(),
            birth_year,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn birth_year(&self) -> i32 {
        self.birth_year
    }

    /// Age in whole years according to the system clock.
    pub fn age(&self) -> i64 {
        self.age_at(&SystemClock)
    }

    /// Age in whole years according to `clock`. May be negative for birth
    /// years in the future. Computed in `i64`, so any pair of `i32` years fits.
    pub fn age_at(&self, clock: &dyn Clock) -> i64 {
        i64::from(clock.current_year()) - i64::from(self.birth_year)
    }

    /// `"{first_name} {surname} ({age} lat)"` with the age taken from `clock`.
    pub fn render_at(&self, clock: &dyn Clock) -> String {
        format!(
            "{} {} ({} lat)",
            self.first_name,
            self.surname,
            self.age_at(clock)
        )
    }

    /// Same ordering as [`Ord::cmp`], spelled out through ages at `clock`.
    pub fn cmp_at(&self, other: &Person, clock: &dyn Clock) -> Ordering {
        self.age_at(clock)
            .cmp(&other.age_at(clock))
            .then_with(|| self.surname.cmp(&other.surname))
            .then_with(|| self.first_name.cmp(&other.first_name))
    }

    fn sort_key(&self) -> (Reverse<i32>, &str, &str) {
        (Reverse(self.birth_year), self.surname.as_str(), self.first_name.as_str())
    }
}

impl ValueObject for Person {}

impl Ord for Person {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Person {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl core::fmt::Display for Person {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.render_at(&SystemClock))
    }
}
