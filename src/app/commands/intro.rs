//! Intro command: play the presentation sequence until it signals readiness.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::adapters::{ManualClock, SystemClock, TimerQueue};
use crate::app::AppContext;
use crate::domain::AppError;
use crate::domain::intro::{PhaseSequencer, PhaseTable, SequenceTiming};
use crate::ports::{Clock, PhaseRenderer};

/// Options for the intro command.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntroOptions {
    /// Run on virtual time instead of sleeping.
    pub instant: bool,
    /// Fill an empty flag phase from the embedded nations roster.
    pub nations: bool,
}

/// Result of a completed presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroOutcome {
    pub vignettes: usize,
    pub flags: usize,
    pub elapsed: Duration,
    pub completed: bool,
}

/// Execute the intro command, rendering through `renderer`.
pub fn execute<R>(
    ctx: &AppContext,
    options: IntroOptions,
    renderer: R,
) -> Result<IntroOutcome, AppError>
where
    R: PhaseRenderer + 'static,
{
    let table = ctx.phase_table(options.nations)?;
    let timing = ctx.config().intro.timing();

    if options.instant {
        Ok(play(table, timing, renderer, ManualClock::new()))
    } else {
        Ok(play(table, timing, renderer, SystemClock::new()))
    }
}

fn play<R, C>(table: PhaseTable, timing: SequenceTiming, renderer: R, clock: C) -> IntroOutcome
where
    R: PhaseRenderer + 'static,
    C: Clock,
{
    let vignettes = table.vignettes.len();
    let flags = table.flags.len();
    let expected_ms =
        timing.total(&table).and_then(|total| u64::try_from(total.as_millis()).ok());
    tracing::debug!(vignettes, flags, expected_ms, "starting intro");

    let ready = Rc::new(Cell::new(false));
    let signal = Rc::clone(&ready);

    let mut queue = TimerQueue::new(clock);
    let mut sequence = PhaseSequencer::new(table, timing)
        .with_renderer(renderer)
        .start(&mut queue, move || signal.set(true));
    sequence.run_to_completion();
    let elapsed = sequence.elapsed();
    sequence.dispose();

    IntroOutcome { vignettes, flags, elapsed, completed: ready.get() }
}
