use super::geom::Rect;
use super::instruction::{BlockId, Direction, DurationField, InstructionBlock};

/// Fixed palette button. Pressing it queues a block built from this template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveButton {
    pub name: String,
    pub motors: Vec<usize>,
    pub direction: Direction,
    pub duration: String,
    pub rect: Rect,
}

impl MoveButton {
    pub fn new(
        name: impl Into<String>,
        motors: Vec<usize>,
        direction: Direction,
        duration: impl Into<String>,
        rect: Rect,
    ) -> Self {
        Self {
            name: name.into(),
            motors,
            direction,
            duration: duration.into(),
            rect,
        }
    }

    /// New block laid exactly over the button, so a press-and-drag pulls it out.
    pub fn spawn(&self, id: BlockId, duration_max_len: usize) -> InstructionBlock {
        InstructionBlock {
            id,
            name: self.name.clone(),
            motors: self.motors.clone(),
            direction: self.direction,
            duration: DurationField::new(&self.duration, duration_max_len),
            rect: self.rect,
        }
    }
}
