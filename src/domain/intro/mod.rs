//! Presentation Phase Sequencer.
//!
//! A forward-only state machine that shows a few slow vignettes followed by a
//! fast run of flags, then signals completion exactly once. Timing policy lives
//! in the pure `machine` module; `sequencer` binds it to a `Scheduler`.

pub mod machine;
pub mod sequencer;
pub mod table;
pub mod timing;

pub use machine::{Cursor, PhaseView, Transition, hold, transition};
pub use sequencer::{ActiveSequence, PhaseSequencer};
pub use table::{FlagEntry, PhaseTable, VignetteEntry};
pub use timing::SequenceTiming;
