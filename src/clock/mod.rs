//! Source of the current time for `@DATE@` style tags.

mod timezone;

use chrono::{NaiveDateTime, Utc};

pub use timezone::Timezone;

/// Supplies "now" to tag substitution.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock, read in the configured timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    pub timezone: Timezone,
}

impl SystemClock {
    pub fn new(timezone: Timezone) -> Self {
        SystemClock { timezone }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        self.timezone.wall_clock(Utc::now())
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
