//! Time source and deadline timers.
//!
//! Everything time-dependent (the simulated submission delay, the success
//! acknowledgment window, the "not in the past" date rule) reads time through
//! [`Clock`] so tests can drive it by hand with [`ManualClock`].

use std::cell::Cell;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};

/// A source of monotonic time and of the current calendar date.
pub trait Clock {
    /// Monotonic "now", used for timers.
    fn now(&self) -> Instant;
    /// Today's local calendar date, used for date validation.
    fn today(&self) -> NaiveDate;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    start: Instant,
    elapsed: Cell<Duration>,
    today: Cell<NaiveDate>,
}

impl ManualClock {
    /// Creates a clock frozen at an arbitrary instant on the given date.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            start: Instant::now(),
            elapsed: Cell::new(Duration::ZERO),
            today: Cell::new(today),
        }
    }

    /// Moves monotonic time forward. The calendar date is unaffected.
    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }

    /// Changes the calendar date.
    pub fn set_today(&self, today: NaiveDate) {
        self.today.set(today);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.start + self.elapsed.get()
    }

    fn today(&self) -> NaiveDate {
        self.today.get()
    }
}

/// A one-shot, cancellable deadline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    due: Option<Instant>,
}

impl Timer {
    /// Arms (or re-arms) the timer to fire `after` from `now`.
    pub fn arm(&mut self, now: Instant, after: Duration) {
        self.due = Some(now + after);
    }

    /// Disarms the timer without firing it.
    pub fn cancel(&mut self) {
        self.due = None;
    }

    /// Returns `true` while the timer is armed and has not fired.
    pub fn is_armed(&self) -> bool {
        self.due.is_some()
    }

    /// Fires the timer if its deadline has been reached.
    ///
    /// Returns `true` exactly once per arming; the timer is disarmed when it fires.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}
