use std::time::Duration;

use super::table::PhaseTable;

/// Hold durations for each phase of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceTiming {
    /// Pause between start and the first vignette.
    pub lead_in: Duration,
    /// How long each vignette stays on screen.
    pub vignette_hold: Duration,
    /// How long each flag stays on screen.
    pub flag_hold: Duration,
    /// Blank hold before completion when there are no flags. Zero completes
    /// right after the last vignette.
    pub empty_flag_hold: Duration,
}

impl Default for SequenceTiming {
    fn default() -> Self {
        Self {
            lead_in: Duration::from_millis(500),
            vignette_hold: Duration::from_millis(1000),
            flag_hold: Duration::from_millis(100),
            empty_flag_hold: Duration::from_millis(500),
        }
    }
}

impl SequenceTiming {
    /// Time from start until the completion signal for `table`, or `None`
    /// when it does not fit in a `Duration`.
    pub fn total(&self, table: &PhaseTable) -> Option<Duration> {
        let vignettes = scaled(self.vignette_hold, table.vignettes.len())?;
        let tail = if table.flags.is_empty() {
            self.empty_flag_hold
        } else {
            scaled(self.flag_hold, table.flags.len())?
        };
        self.lead_in.checked_add(vignettes)?.checked_add(tail)
    }
}

fn scaled(hold: Duration, count: usize) -> Option<Duration> {
    hold.checked_mul(u32::try_from(count).ok()?)
}
