//! Single-threaded timer queue backed by a `Clock`.

use std::collections::BTreeSet;
use std::time::Duration;

use crate::ports::{Clock, Scheduler, TimerToken};

/// Pending single-shot timers ordered by due time, then by arming order.
#[derive(Debug)]
pub struct TimerQueue<C: Clock> {
    clock: C,
    next_token: u64,
    pending: BTreeSet<(Duration, TimerToken)>,
}

impl<C: Clock> TimerQueue<C> {
    pub fn new(clock: C) -> Self {
        Self { clock, next_token: 0, pending: BTreeSet::new() }
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl<C: Clock> Scheduler for TimerQueue<C> {
    fn schedule(&mut self, delay: Duration) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.pending.insert((self.clock.now() + delay, token));
        token
    }

    fn cancel(&mut self, token: TimerToken) -> bool {
        let entry = self.pending.iter().find(|(_, pending)| *pending == token).copied();
        match entry {
            Some(entry) => self.pending.remove(&entry),
            None => false,
        }
    }

    fn next_fired(&mut self, deadline: Option<Duration>) -> Option<TimerToken> {
        let next = self.pending.first().copied();
        match (next, deadline) {
            (Some((due, _)), Some(limit)) if due > limit => {
                self.clock.wait_until(limit);
                None
            }
            (Some(entry), _) => {
                self.pending.remove(&entry);
                self.clock.wait_until(entry.0);
                Some(entry.1)
            }
            (None, Some(limit)) => {
                self.clock.wait_until(limit);
                None
            }
            (None, None) => None,
        }
    }

    fn elapsed(&self) -> Duration {
        self.clock.now()
    }
}
