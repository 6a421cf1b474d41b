//! Builder configuration: canvas geometry, palette and timing.
//!
//! Everything is fixed in code; there is no config file and no environment lookup.

use crate::kernel::{Direction, MoveButton, Point, Rect};
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct BuilderConfig {
    /// Logical canvas size. The viewport scales it onto the terminal.
    pub canvas_width: i32,
    pub canvas_height: i32,
    pub frame_rate: u32,
    pub duration_max_len: usize,
    pub duration_prompt: String,
    pub dock: Rect,
    pub trash: Rect,
    pub run_button: Rect,
    /// Vertical line separating the palette from the workspace.
    pub divider_x: i32,
    /// Where the focused block's duration field is shown.
    pub readout: Point,
    /// Top-left of the last run's listing.
    pub run_output: Point,
    pub robot_motors: Vec<u8>,
    pub buttons: Vec<MoveButton>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 800,
            frame_rate: 60,
            duration_max_len: 45,
            duration_prompt: "duration: ".to_string(),
            dock: Rect::new(120, 100, 20, 60),
            trash: Rect::new(10, 750, 40, 40),
            run_button: Rect::new(700, 750, 80, 40),
            divider_x: 100,
            readout: Point::new(560, 100),
            run_output: Point::new(120, 600),
            robot_motors: vec![1, 2, 3],
            buttons: default_buttons(),
        }
    }
}

impl BuilderConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }
}

fn default_buttons() -> Vec<MoveButton> {
    vec![
        MoveButton::new(
            "Straight",
            vec![0, 1],
            Direction::Forward,
            "1",
            Rect::new(10, 10, 60, 60),
        ),
        MoveButton::new(
            "R turn",
            vec![0, 1],
            Direction::Right,
            "1",
            Rect::new(10, 80, 60, 60),
        ),
        MoveButton::new(
            "L turn",
            vec![0, 1],
            Direction::Left,
            "1",
            Rect::new(10, 150, 60, 60),
        ),
        MoveButton::new("Arm", vec![2], Direction::Right, "1", Rect::new(10, 220, 60, 60)),
    ]
}
