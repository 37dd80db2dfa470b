//! # Auto-Advance Timer
//!
//! The carousel never spawns threads or registers callbacks with a runtime.
//! Instead the controller owns a `TimerHandle` value and the host loop asks
//! it, between input events, whether a tick is due. Time comes from an
//! injected `Clock`, so tests drive the timer with `ManualClock` instead of
//! sleeping.
//!
//! ```text
//!  Idle ──arm(interval)──▶ AutoAdvancing ──tick──▶ AutoAdvancing
//!   ▲                          │
//!   └──── cancel / teardown ───┘
//! ```
//!
//! Cancelling is dropping the handle: once the `Option<TimerHandle>` is
//! `None` there is nothing left that could fire.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source.
pub trait Clock {
    /// Time elapsed since this clock's origin.
    fn now(&self) -> Duration;
}

/// Wall clock backed by `Instant`.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Virtual clock that only moves when told to.
///
/// Clones share the same time, so a test keeps one clone and hands the other
/// to the controller.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Observable state of a controller's timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    AutoAdvancing { interval: Duration },
}

/// An armed recurring timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerHandle {
    interval: Duration,
    deadline: Duration,
}

impl TimerHandle {
    /// Arms a timer whose first tick is one `interval` after `now`.
    ///
    /// `interval` must be non-zero; callers normalize with
    /// [`normalize_interval`] first. A deadline past `Duration::MAX`
    /// saturates and never falls due.
    pub fn arm(interval: Duration, now: Duration) -> Self {
        debug_assert!(!interval.is_zero());
        Self {
            interval,
            deadline: now.checked_add(interval).unwrap_or(Duration::MAX),
        }
    }

    /// True once the deadline has saturated at `Duration::MAX`.
    pub fn is_unreachable(&self) -> bool {
        self.deadline == Duration::MAX
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Consumes one tick if its deadline has passed and schedules the next.
    ///
    /// Call repeatedly to drain every tick that fell due since the last poll.
    pub fn take_due(&mut self, now: Duration) -> bool {
        if !self.is_unreachable() && now >= self.deadline {
            self.deadline = self.deadline.saturating_add(self.interval);
            true
        } else {
            false
        }
    }
}

/// Zero means "disabled", same as absent.
pub fn normalize_interval(interval: Option<Duration>) -> Option<Duration> {
    interval.filter(|i| !i.is_zero())
}
