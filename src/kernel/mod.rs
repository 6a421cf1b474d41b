//! Headless builder core: robot, buttons, the instruction queue and the run action.

pub mod button;
pub mod geom;
pub mod instruction;
pub mod model;
pub mod robot;
pub mod sink;

pub use button::MoveButton;
pub use geom::{Point, Rect};
pub use instruction::{BlockId, Direction, DurationField, InstructionBlock, TextEdit};
pub use model::Model;
pub use robot::Robot;
pub use sink::{ExecutionSink, RunLog, Step};
