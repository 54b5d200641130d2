//! Timer-driven runtime for the presentation sequence.

use std::time::Duration;

use super::machine::{self, Cursor, PhaseView, Transition};
use super::table::PhaseTable;
use super::timing::SequenceTiming;
use crate::ports::{PhaseChange, PhaseRenderer, Scheduler, TimerToken};

/// A sequence that has not been started yet.
pub struct PhaseSequencer {
    table: PhaseTable,
    timing: SequenceTiming,
    renderer: Option<Box<dyn PhaseRenderer>>,
}

impl PhaseSequencer {
    pub fn new(table: PhaseTable, timing: SequenceTiming) -> Self {
        Self { table, timing, renderer: None }
    }

    pub fn with_renderer(mut self, renderer: impl PhaseRenderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Start the sequence on `scheduler`.
    ///
    /// `on_complete` runs exactly once, on the transition into `Done`. Dropping
    /// the returned sequence cancels its pending timer, after which neither
    /// transitions nor the completion signal can happen.
    pub fn start<S, F>(self, mut scheduler: S, on_complete: F) -> ActiveSequence<S>
    where
        S: Scheduler,
        F: FnOnce() + 'static,
    {
        let pending = machine::hold(Cursor::NotStarted, &self.timing)
            .map(|delay| scheduler.schedule(delay));

        ActiveSequence {
            table: self.table,
            timing: self.timing,
            renderer: self.renderer,
            scheduler,
            cursor: Cursor::NotStarted,
            pending,
            on_complete: Some(Box::new(on_complete)),
        }
    }
}

/// A started sequence bound to its scheduler.
pub struct ActiveSequence<S: Scheduler> {
    table: PhaseTable,
    timing: SequenceTiming,
    renderer: Option<Box<dyn PhaseRenderer>>,
    scheduler: S,
    cursor: Cursor,
    pending: Option<TimerToken>,
    on_complete: Option<Box<dyn FnOnce()>>,
}

impl<S: Scheduler> ActiveSequence<S> {
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn current(&self) -> Option<PhaseView<'_>> {
        self.cursor.view(&self.table)
    }

    pub fn is_done(&self) -> bool {
        self.cursor == Cursor::Done
    }

    /// Time on the scheduler's clock.
    pub fn elapsed(&self) -> Duration {
        self.scheduler.elapsed()
    }

    /// Deliver a fired timer. Tokens other than the pending one belong to
    /// other components; they are left untouched and `None` is returned.
    pub fn on_timer(&mut self, token: TimerToken) -> Option<Transition> {
        if self.pending != Some(token) {
            return None;
        }
        self.pending = None;

        let step = machine::transition(self.cursor, &self.table, &self.timing);
        self.cursor = step.cursor;
        tracing::debug!(
            cursor = ?self.cursor,
            elapsed_ms = u64::try_from(self.elapsed().as_millis()).unwrap_or(u64::MAX),
            "phase transition"
        );

        if let Some(renderer) = self.renderer.as_mut() {
            let change = PhaseChange {
                cursor: self.cursor,
                view: self.cursor.view(&self.table),
                animated: self.cursor.animates(),
            };
            renderer.render(&change);
        }

        if let Some(delay) = step.delay {
            self.pending = Some(self.scheduler.schedule(delay));
        }

        if step.completed
            && let Some(on_complete) = self.on_complete.take()
        {
            on_complete();
        }

        Some(step)
    }

    /// Fire every timer due at or before `deadline`.
    ///
    /// Stops early and hands back a fired timer that belongs to another
    /// component on the same scheduler. Call again to resume.
    pub fn run_until(&mut self, deadline: Duration) -> Option<TimerToken> {
        self.drive(Some(deadline))
    }

    /// Drive the sequence until the completion signal has fired.
    ///
    /// Foreign timers are handed back the same way as in `run_until`.
    pub fn run_to_completion(&mut self) -> Option<TimerToken> {
        self.drive(None)
    }

    fn drive(&mut self, deadline: Option<Duration>) -> Option<TimerToken> {
        while !self.is_done() {
            let token = self.scheduler.next_fired(deadline)?;
            if self.on_timer(token).is_none() {
                return Some(token);
            }
        }
        None
    }

    /// Tear the sequence down, cancelling any pending timer.
    pub fn dispose(self) {}
}

impl<S: Scheduler> Drop for ActiveSequence<S> {
    fn drop(&mut self) {
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel(token);
            tracing::debug!(cursor = ?self.cursor, "sequence disposed before completion");
        }
    }
}
