use super::input::FrameInput;
use crate::kernel::{BlockId, ExecutionSink, Model, Step};

/// What one frame changed. Mostly for logs and tests; the model already holds the result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub spawned: Option<BlockId>,
    pub disposed: Vec<BlockId>,
    pub run: Option<Vec<Step>>,
}

/// Applies one frame of input to the model.
///
/// Holds the only drag owner and the only focused block, so "one block dragged" and "one
/// duration field visible" cannot be violated by the model's contents.
#[derive(Debug, Default)]
pub struct Controller {
    drag: Option<BlockId>,
    focus: Option<BlockId>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dragged(&self) -> Option<BlockId> {
        self.drag
    }

    /// Block whose duration field is visible and receives keystrokes.
    pub fn focused(&self) -> Option<BlockId> {
        self.focus
    }

    pub fn update(
        &mut self,
        model: &mut Model,
        input: &FrameInput,
        sink: &mut dyn ExecutionSink,
    ) -> FrameReport {
        let mut report = FrameReport::default();
        let cursor = input.cursor;

        if !input.held {
            if let Some(id) = self.drag.take() {
                tracing::debug!(block = %id, "drag released");
            }
        }

        // Buttons win over blocks resting on them.
        if input.pressed {
            if let Some(index) = model.button_at(cursor) {
                report.spawned = model.spawn(index);
                if input.held {
                    self.drag = report.spawned;
                }
            }
        }

        if input.held && self.drag.is_none() {
            if let Some(id) = model.block_at(cursor) {
                tracing::debug!(block = %id, "drag started");
                self.drag = Some(id);
            }
        }

        if let Some(id) = self.drag {
            match model.block_mut(id) {
                Some(block) => block.rect.center_on(cursor),
                None => self.drag = None,
            }
        }

        self.focus = if input.held {
            None
        } else {
            model.block_at(cursor)
        };
        if let Some(id) = self.focus {
            if let Some(block) = model.block_mut(id) {
                for edit in &input.edits {
                    block.duration.apply(*edit);
                }
            }
        }

        if !input.held {
            report.disposed = model.dispose_trashed();
            if let Some(id) = self.focus {
                if report.disposed.contains(&id) {
                    self.focus = None;
                }
            }
        }

        if input.pressed && model.run_button().contains(cursor) {
            report.run = Some(model.execute(sink));
        }

        report
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/controller.rs"]
mod tests;
