use super::*;
use crate::config::BuilderConfig;
use crate::kernel::{Direction, Point, Rect, RunLog, TextEdit};

struct Harness {
    model: Model,
    controller: Controller,
    log: RunLog,
}

impl Harness {
    fn new() -> Self {
        Self {
            model: Model::new(&BuilderConfig::default()),
            controller: Controller::new(),
            log: RunLog::new(),
        }
    }

    fn frame(&mut self, input: FrameInput) -> FrameReport {
        let report = self
            .controller
            .update(&mut self.model, &input, &mut self.log);
        assert!(
            self.controller
                .dragged()
                .map_or(true, |id| self.model.block(id).is_some()),
            "drag owner must be a queued block"
        );
        report
    }

    /// Press a palette button, drop the new block centred on `to`, release.
    fn place(&mut self, button: Point, to: Point) -> BlockId {
        let id = self.frame(FrameInput::press(button.x, button.y)).spawned.unwrap();
        self.frame(FrameInput::hold(to.x, to.y));
        self.frame(FrameInput::hover(to.x, to.y));
        id
    }

    fn rect(&self, id: BlockId) -> Rect {
        self.model.block(id).unwrap().rect
    }
}

const STRAIGHT: Point = Point::new(30, 30);
const ARM: Point = Point::new(30, 240);
const RUN: Point = Point::new(720, 760);

#[test]
fn button_press_spawns_block_and_starts_dragging_it() {
    let mut h = Harness::new();
    let report = h.frame(FrameInput::press(STRAIGHT.x, STRAIGHT.y));

    let id = report.spawned.unwrap();
    assert_eq!(h.model.len(), 1);
    assert_eq!(h.controller.dragged(), Some(id));
    assert_eq!(h.rect(id), Rect::new(0, 0, 60, 60));
}

#[test]
fn holding_a_button_spawns_exactly_once() {
    let mut h = Harness::new();
    h.frame(FrameInput::press(STRAIGHT.x, STRAIGHT.y));
    for _ in 0..9 {
        let report = h.frame(FrameInput::hold(STRAIGHT.x, STRAIGHT.y));
        assert!(report.spawned.is_none());
    }
    assert_eq!(h.model.len(), 1);
}

#[test]
fn each_distinct_press_spawns_one_block() {
    let mut h = Harness::new();
    for presses in 1..=5 {
        h.frame(FrameInput::press(ARM.x, ARM.y));
        h.frame(FrameInput::hold(ARM.x, ARM.y));
        h.frame(FrameInput::hover(400, 400));
        assert_eq!(h.model.len(), presses);
    }
}

#[test]
fn click_inside_one_frame_spawns_without_drag() {
    let mut h = Harness::new();
    let input = FrameInput {
        held: false,
        ..FrameInput::press(STRAIGHT.x, STRAIGHT.y)
    };
    let report = h.frame(input);
    assert!(report.spawned.is_some());
    assert_eq!(h.controller.dragged(), None);
    assert_eq!(h.rect(report.spawned.unwrap()), Rect::new(10, 10, 60, 60));
}

#[test]
fn dragged_block_follows_cursor_until_release() {
    let mut h = Harness::new();
    let id = h.frame(FrameInput::press(STRAIGHT.x, STRAIGHT.y)).spawned.unwrap();

    h.frame(FrameInput::hold(300, 400));
    assert_eq!(h.rect(id), Rect::new(270, 370, 60, 60));

    // Far jump in one frame does not drop the block.
    h.frame(FrameInput::hold(700, 100));
    assert_eq!(h.rect(id).top_left(), Point::new(670, 70));

    h.frame(FrameInput::hover(500, 500));
    assert_eq!(h.controller.dragged(), None);
    assert_eq!(h.rect(id).top_left(), Point::new(670, 70));
}

#[test]
fn sliding_onto_a_block_while_held_picks_it_up() {
    let mut h = Harness::new();
    let id = h.place(STRAIGHT, Point::new(400, 400));

    h.frame(FrameInput::press(600, 600));
    assert_eq!(h.controller.dragged(), None);
    h.frame(FrameInput::hold(410, 410));
    assert_eq!(h.controller.dragged(), Some(id));
    assert_eq!(h.rect(id).top_left(), Point::new(380, 380));
}

#[test]
fn only_one_block_is_dragged_among_overlaps() {
    let mut h = Harness::new();
    let below = h.place(STRAIGHT, Point::new(400, 400));
    let above = h.place(ARM, Point::new(410, 410));

    h.frame(FrameInput::press(405, 405));
    assert_eq!(h.controller.dragged(), Some(above));

    h.frame(FrameInput::hold(200, 600));
    assert_eq!(h.rect(above).top_left(), Point::new(170, 570));
    assert_eq!(h.rect(below).top_left(), Point::new(370, 370));
}

#[test]
fn hover_focuses_topmost_block_and_takes_keystrokes() {
    let mut h = Harness::new();
    let below = h.place(STRAIGHT, Point::new(400, 400));
    let above = h.place(ARM, Point::new(410, 410));

    h.frame(
        FrameInput::hover(405, 405).with_edits([TextEdit::Backspace, TextEdit::Insert('3')]),
    );
    assert_eq!(h.controller.focused(), Some(above));
    assert_eq!(h.model.block(above).unwrap().duration.value(), "3");
    assert_eq!(h.model.block(below).unwrap().duration.value(), "1");
}

#[test]
fn no_focus_while_held_or_off_blocks() {
    let mut h = Harness::new();
    let id = h.place(STRAIGHT, Point::new(400, 400));

    h.frame(FrameInput::hold(600, 600).with_edits([TextEdit::Insert('9')]));
    assert_eq!(h.controller.focused(), None);

    h.frame(FrameInput::hover(600, 600).with_edits([TextEdit::Insert('9')]));
    assert_eq!(h.controller.focused(), None);

    assert_eq!(h.model.block(id).unwrap().duration.value(), "1");
}

#[test]
fn dragged_block_is_not_focused() {
    let mut h = Harness::new();
    let id = h.place(STRAIGHT, Point::new(400, 400));
    h.frame(FrameInput::press(400, 400).with_edits([TextEdit::Insert('7')]));
    assert_eq!(h.controller.dragged(), Some(id));
    assert_eq!(h.controller.focused(), None);
    assert_eq!(h.model.block(id).unwrap().duration.value(), "1");
}

#[test]
fn dropping_on_trash_discards_block() {
    let mut h = Harness::new();
    let id = h.frame(FrameInput::press(STRAIGHT.x, STRAIGHT.y)).spawned.unwrap();

    let report = h.frame(FrameInput::hold(20, 760));
    assert!(report.disposed.is_empty());
    assert!(h.model.block(id).is_some());

    let report = h.frame(FrameInput::hover(20, 760));
    assert_eq!(report.disposed, vec![id]);
    assert!(h.model.block(id).is_none());
    assert_eq!(h.controller.dragged(), None);
    assert_eq!(h.controller.focused(), None);
}

#[test]
fn run_emits_blocks_left_to_right() {
    let mut h = Harness::new();
    let straight = h.place(STRAIGHT, Point::new(80, 330));
    let arm = h.place(ARM, Point::new(35, 240));
    assert_eq!(h.rect(straight).x, 50);
    assert_eq!(h.rect(arm).x, 5);

    let program = h.frame(FrameInput::press(RUN.x, RUN.y)).run.unwrap();

    assert_eq!(program.len(), 2);
    assert_eq!(program[0].block, arm);
    assert_eq!(program[0].motor_indices, vec![2]);
    assert_eq!(program[1].block, straight);
    assert_eq!(program[1].direction, Direction::Forward);
    assert_eq!(program[1].motor_indices, vec![0, 1]);
    assert_eq!(h.log.runs().len(), 1);
}

#[test]
fn run_fires_once_per_press() {
    let mut h = Harness::new();
    h.place(STRAIGHT, Point::new(400, 400));

    assert!(h.frame(FrameInput::press(RUN.x, RUN.y)).run.is_some());
    for _ in 0..5 {
        assert!(h.frame(FrameInput::hold(RUN.x, RUN.y)).run.is_none());
    }
    h.frame(FrameInput::hover(RUN.x, RUN.y));
    assert!(h.frame(FrameInput::press(RUN.x, RUN.y)).run.is_some());
    assert_eq!(h.log.runs().len(), 2);
}

#[test]
fn run_order_is_non_decreasing_in_x() {
    let mut h = Harness::new();
    for (button, x) in [(STRAIGHT, 610), (ARM, 230), (STRAIGHT, 450), (ARM, 230), (ARM, 330)] {
        h.place(button, Point::new(x, 500));
    }

    let program = h.frame(FrameInput::press(RUN.x, RUN.y)).run.unwrap();
    let xs: Vec<i32> = program
        .iter()
        .map(|step| h.model.block(step.block).unwrap().rect.x)
        .collect();
    assert_eq!(xs.len(), 5);
    assert!(xs.windows(2).all(|w| w[0] <= w[1]), "{xs:?}");
}

#[test]
fn pressing_a_button_under_a_parked_block_spawns_a_new_one() {
    let mut h = Harness::new();
    let parked = h
        .frame(FrameInput {
            held: false,
            ..FrameInput::press(STRAIGHT.x, STRAIGHT.y)
        })
        .spawned
        .unwrap();

    let fresh = h.frame(FrameInput::press(STRAIGHT.x, STRAIGHT.y)).spawned.unwrap();
    assert_ne!(parked, fresh);
    assert_eq!(h.controller.dragged(), Some(fresh));
    assert_eq!(h.model.len(), 2);
}
