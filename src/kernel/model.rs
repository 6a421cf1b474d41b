use super::button::MoveButton;
use super::geom::{Point, Rect};
use super::instruction::{BlockId, InstructionBlock};
use super::robot::Robot;
use super::sink::{ExecutionSink, Step};
use crate::config::BuilderConfig;

/// Everything on the canvas: the fixed palette and zones plus the instruction queue.
///
/// Queue order is insertion order until a run, which re-sorts it by horizontal position. Later
/// blocks are drawn on top and win hit tests.
#[derive(Debug)]
pub struct Model {
    robot: Robot,
    buttons: Vec<MoveButton>,
    dock: Rect,
    trash: Rect,
    run_button: Rect,
    instructions: Vec<InstructionBlock>,
    next_id: u64,
    duration_max_len: usize,
}

impl Model {
    pub fn new(config: &BuilderConfig) -> Self {
        Self {
            robot: Robot::new(config.robot_motors.clone()),
            buttons: config.buttons.clone(),
            dock: config.dock,
            trash: config.trash,
            run_button: config.run_button,
            instructions: Vec::new(),
            next_id: 1,
            duration_max_len: config.duration_max_len,
        }
    }

    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    pub fn buttons(&self) -> &[MoveButton] {
        &self.buttons
    }

    pub fn dock(&self) -> Rect {
        self.dock
    }

    pub fn trash(&self) -> Rect {
        self.trash
    }

    pub fn run_button(&self) -> Rect {
        self.run_button
    }

    pub fn instructions(&self) -> &[InstructionBlock] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn block(&self, id: BlockId) -> Option<&InstructionBlock> {
        self.instructions.iter().find(|b| b.id == id)
    }

    pub fn block_mut(&mut self, id: BlockId) -> Option<&mut InstructionBlock> {
        self.instructions.iter_mut().find(|b| b.id == id)
    }

    pub fn button_at(&self, p: Point) -> Option<usize> {
        self.buttons.iter().position(|b| b.rect.contains(p))
    }

    /// Topmost block under `p`.
    pub fn block_at(&self, p: Point) -> Option<BlockId> {
        self.instructions
            .iter()
            .rev()
            .find(|b| b.rect.contains(p))
            .map(|b| b.id)
    }

    /// Queue a block from button `index`. Returns `None` for an unknown button.
    pub fn spawn(&mut self, index: usize) -> Option<BlockId> {
        let button = self.buttons.get(index)?;
        let id = BlockId(self.next_id);
        self.next_id += 1;
        let block = button.spawn(id, self.duration_max_len);
        tracing::info!(block = %id, name = %block.name, "instruction queued");
        self.instructions.push(block);
        Some(id)
    }

    /// Remove every block lying over the trash zone's top-left corner.
    pub fn dispose_trashed(&mut self) -> Vec<BlockId> {
        let corner = self.trash.top_left();
        let mut removed = Vec::new();
        self.instructions.retain(|b| {
            if b.rect.contains(corner) {
                removed.push(b.id);
                false
            } else {
                true
            }
        });
        for id in &removed {
            tracing::info!(block = %id, "instruction discarded");
        }
        removed
    }

    /// Order the queue left to right and hand it to `sink`. Blocks sharing an `x` keep their
    /// queue order.
    pub fn execute(&mut self, sink: &mut dyn ExecutionSink) -> Vec<Step> {
        self.instructions.sort_by_key(|b| b.rect.x);
        let program: Vec<Step> = self
            .instructions
            .iter()
            .map(|b| Step {
                block: b.id,
                name: b.name.clone(),
                direction: b.direction,
                motor_indices: b.motors.clone(),
                motors: self.robot.resolve(&b.motors),
                duration: b.duration.value().to_string(),
            })
            .collect();
        sink.execute(&program);
        program
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/model.rs"]
mod tests;
