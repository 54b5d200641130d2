use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::intro::{Cursor, PhaseView};
use crate::ports::{PhaseChange, PhaseRenderer};

/// One change observed by `RecordingRenderer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFrame {
    pub cursor: Cursor,
    pub label: Option<String>,
    pub animated: bool,
}

/// Renderer that records every change; clones share the same log.
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    frames: Rc<RefCell<Vec<RecordedFrame>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<RecordedFrame> {
        self.frames.borrow().clone()
    }
}

impl PhaseRenderer for RecordingRenderer {
    fn render(&mut self, change: &PhaseChange<'_>) {
        let label = change.view.map(|view| match view {
            PhaseView::Vignette(entry) => entry.caption.clone(),
            PhaseView::Flag(entry) => entry.label.clone(),
        });
        self.frames.borrow_mut().push(RecordedFrame {
            cursor: change.cursor,
            label,
            animated: change.animated,
        });
    }
}
