//! Terminal rendering for the presentation sequence.

use std::io::Write;

use crate::domain::intro::PhaseView;
use crate::ports::{PhaseChange, PhaseRenderer};

const CLEAR_LINE: &str = "\r\x1b[2K";

/// Writes one line per vignette and redraws a single line in place for flags.
pub struct TerminalPhaseRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalPhaseRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PhaseRenderer for TerminalPhaseRenderer<W> {
    fn render(&mut self, change: &PhaseChange<'_>) {
        let written = match change.view {
            Some(PhaseView::Vignette(entry)) => {
                writeln!(self.out, "{}  [{}]  {}", CLEAR_LINE, entry.icon, entry.caption)
            }
            Some(PhaseView::Flag(entry)) => {
                write!(self.out, "{}  [{}]  {}", CLEAR_LINE, entry.image_key, entry.label)
            }
            None => write!(self.out, "{}", CLEAR_LINE),
        };

        // Write failures are logged and ignored.
        if let Err(err) = written.and_then(|_| self.out.flush()) {
            tracing::debug!(error = %err, "terminal renderer write failed");
        }
    }
}
