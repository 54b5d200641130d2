//! Timer scheduling port.

use std::time::Duration;

/// Handle for a pending single-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerToken(pub u64);

/// Source of time for a scheduler.
pub trait Clock {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;

    /// Block (or jump, for virtual clocks) until `instant` has been reached.
    fn wait_until(&mut self, instant: Duration);
}

/// Single-threaded scheduler of single-shot timers.
pub trait Scheduler {
    /// Arm a timer that fires once after `delay`.
    fn schedule(&mut self, delay: Duration) -> TimerToken;

    /// Disarm a pending timer. Returns false when it already fired or was cancelled.
    fn cancel(&mut self, token: TimerToken) -> bool;

    /// Wait for the earliest pending timer and return it.
    ///
    /// With a `deadline`, timers due after it are left pending, the clock is
    /// moved to the deadline and `None` is returned.
    fn next_fired(&mut self, deadline: Option<Duration>) -> Option<TimerToken>;

    /// Current time on the scheduler's clock.
    fn elapsed(&self) -> Duration;
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn schedule(&mut self, delay: Duration) -> TimerToken {
        (**self).schedule(delay)
    }

    fn cancel(&mut self, token: TimerToken) -> bool {
        (**self).cancel(token)
    }

    fn next_fired(&mut self, deadline: Option<Duration>) -> Option<TimerToken> {
        (**self).next_fired(deadline)
    }

    fn elapsed(&self) -> Duration {
        (**self).elapsed()
    }
}
