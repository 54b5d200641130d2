//! Pure transition function for the presentation sequence.
//!
//! The cursor only moves forward:
//! `NotStarted -> InVignette(0..V) -> InFlags(0..F) -> Done`, with `Settling`
//! standing in for the flag phase when the flag table is empty and a trailing
//! hold is configured.

use std::time::Duration;

use super::table::{FlagEntry, PhaseTable, VignetteEntry};
use super::timing::SequenceTiming;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    NotStarted,
    InVignette(usize),
    InFlags(usize),
    /// Blank hold after the last vignette when there are no flags.
    Settling,
    Done,
}

/// Entry currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseView<'a> {
    Vignette(&'a VignetteEntry),
    Flag(&'a FlagEntry),
}

/// Result of letting the current cursor's hold elapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub cursor: Cursor,
    /// Delay before the next transition; `None` once the sequence is done.
    pub delay: Option<Duration>,
    /// True only for the step that enters `Done`.
    pub completed: bool,
}

impl Cursor {
    /// Whether entering this cursor animates. Flag changes are instantaneous.
    pub fn animates(self) -> bool {
        matches!(self, Cursor::InVignette(_))
    }

    pub fn view(self, table: &PhaseTable) -> Option<PhaseView<'_>> {
        match self {
            Cursor::InVignette(index) => table.vignette(index).map(PhaseView::Vignette),
            Cursor::InFlags(index) => table.flag(index).map(PhaseView::Flag),
            Cursor::NotStarted | Cursor::Settling | Cursor::Done => None,
        }
    }
}

/// How long `cursor` is held before its next transition.
pub fn hold(cursor: Cursor, timing: &SequenceTiming) -> Option<Duration> {
    match cursor {
        Cursor::NotStarted => Some(timing.lead_in),
        Cursor::InVignette(_) => Some(timing.vignette_hold),
        Cursor::InFlags(_) => Some(timing.flag_hold),
        Cursor::Settling => Some(timing.empty_flag_hold),
        Cursor::Done => None,
    }
}

/// Advance `cursor` after its hold has elapsed.
pub fn transition(cursor: Cursor, table: &PhaseTable, timing: &SequenceTiming) -> Transition {
    if cursor == Cursor::Done {
        return Transition { cursor, delay: None, completed: false };
    }

    let next = successor(cursor, table, timing);
    Transition { cursor: next, delay: hold(next, timing), completed: next == Cursor::Done }
}

fn successor(cursor: Cursor, table: &PhaseTable, timing: &SequenceTiming) -> Cursor {
    match cursor {
        Cursor::NotStarted if !table.vignettes.is_empty() => Cursor::InVignette(0),
        Cursor::NotStarted => after_vignettes(table, timing),
        Cursor::InVignette(index) if index + 1 < table.vignettes.len() => {
            Cursor::InVignette(index + 1)
        }
        Cursor::InVignette(_) => after_vignettes(table, timing),
        Cursor::InFlags(index) if index + 1 < table.flags.len() => Cursor::InFlags(index + 1),
        Cursor::InFlags(_) | Cursor::Settling | Cursor::Done => Cursor::Done,
    }
}

fn after_vignettes(table: &PhaseTable, timing: &SequenceTiming) -> Cursor {
    if !table.flags.is_empty() {
        Cursor::InFlags(0)
    } else if timing.empty_flag_hold.is_zero() {
        Cursor::Done
    } else {
        Cursor::Settling
    }
}
