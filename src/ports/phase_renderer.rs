//! Rendering collaborator for the presentation sequence.

use crate::domain::intro::{Cursor, PhaseView};

/// A cursor change handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChange<'a> {
    pub cursor: Cursor,
    /// Entry to show, or `None` to clear the screen.
    pub view: Option<PhaseView<'a>>,
    /// Whether the change should animate in.
    pub animated: bool,
}

/// Port for displaying the sequence's current entry.
pub trait PhaseRenderer {
    fn render(&mut self, change: &PhaseChange<'_>);
}

/// Renderer that displays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl PhaseRenderer for NoopRenderer {
    fn render(&mut self, _change: &PhaseChange<'_>) {}
}
