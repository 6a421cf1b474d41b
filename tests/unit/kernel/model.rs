use super::*;
use crate::kernel::{Direction, RunLog};

fn model() -> Model {
    Model::new(&BuilderConfig::default())
}

#[test]
fn spawn_copies_the_button_template() {
    let mut model = model();
    let id = model.spawn(0).unwrap();

    let block = model.block(id).unwrap();
    assert_eq!(block.name, "Straight");
    assert_eq!(block.direction, Direction::Forward);
    assert_eq!(block.motors, vec![0, 1]);
    assert_eq!(block.duration.value(), "1");
    assert_eq!(block.rect, model.buttons()[0].rect);
}

#[test]
fn spawn_hands_out_fresh_ids() {
    let mut model = model();
    let a = model.spawn(0).unwrap();
    let b = model.spawn(0).unwrap();
    assert_ne!(a, b);
    assert_eq!(model.len(), 2);
}

#[test]
fn spawn_unknown_button_queues_nothing() {
    let mut model = model();
    assert!(model.spawn(99).is_none());
    assert!(model.is_empty());
}

#[test]
fn block_at_prefers_the_latest_block() {
    let mut model = model();
    let first = model.spawn(0).unwrap();
    let second = model.spawn(0).unwrap();
    assert_eq!(model.block_at(Point::new(20, 20)), Some(second));

    model.block_mut(second).unwrap().rect.x = 400;
    assert_eq!(model.block_at(Point::new(20, 20)), Some(first));
    assert_eq!(model.block_at(Point::new(90, 20)), None);
}

#[test]
fn button_at_hits_palette_only() {
    let model = model();
    assert_eq!(model.button_at(Point::new(30, 30)), Some(0));
    assert_eq!(model.button_at(Point::new(30, 230)), Some(3));
    assert_eq!(model.button_at(Point::new(30, 75)), None);
}

#[test]
fn dispose_removes_blocks_over_trash_corner() {
    let mut model = model();
    let keep = model.spawn(0).unwrap();
    let trash = model.spawn(1).unwrap();
    model.block_mut(trash).unwrap().rect = Rect::new(0, 740, 60, 60);

    assert_eq!(model.dispose_trashed(), vec![trash]);
    assert!(model.block(trash).is_none());
    assert!(model.block(keep).is_some());
}

#[test]
fn dispose_needs_the_corner_itself() {
    let mut model = model();
    let id = model.spawn(0).unwrap();
    // Overlaps the trash zone but not its top-left corner.
    model.block_mut(id).unwrap().rect = Rect::new(20, 760, 60, 60);

    assert!(model.dispose_trashed().is_empty());
    assert_eq!(model.len(), 1);
}

#[test]
fn execute_orders_by_x_and_resolves_motors() {
    let mut model = model();
    let straight = model.spawn(0).unwrap();
    let arm = model.spawn(3).unwrap();
    model.block_mut(straight).unwrap().rect.x = 50;
    model.block_mut(arm).unwrap().rect.x = 5;

    let mut log = RunLog::new();
    let program = model.execute(&mut log);

    assert_eq!(program.len(), 2);
    assert_eq!(program[0].block, arm);
    assert_eq!(program[0].motor_indices, vec![2]);
    assert_eq!(program[0].motors, vec![3]);
    assert_eq!(program[1].block, straight);
    assert_eq!(program[1].motors, vec![1, 2]);
    assert_eq!(log.last(), Some(program.as_slice()));

    let queue: Vec<BlockId> = model.instructions().iter().map(|b| b.id).collect();
    assert_eq!(queue, vec![arm, straight]);
}

#[test]
fn execute_keeps_queue_order_for_equal_x() {
    let mut model = model();
    let a = model.spawn(1).unwrap();
    let b = model.spawn(2).unwrap();
    let c = model.spawn(0).unwrap();
    model.block_mut(c).unwrap().rect.x = 300;

    let program = model.execute(&mut RunLog::new());
    let order: Vec<BlockId> = program.iter().map(|s| s.block).collect();
    assert_eq!(order, vec![a, b, c]);
}

#[test]
fn execute_emits_duration_text_verbatim() {
    let mut model = model();
    let id = model.spawn(0).unwrap();
    let block = model.block_mut(id).unwrap();
    block.duration.apply(crate::kernel::TextEdit::Backspace);
    for ch in "ten".chars() {
        block.duration.apply(crate::kernel::TextEdit::Insert(ch));
    }

    let program = model.execute(&mut RunLog::new());
    assert_eq!(program[0].duration, "ten");
}

#[test]
fn execute_on_empty_queue_still_reaches_the_sink() {
    let mut model = model();
    let mut log = RunLog::new();
    assert!(model.execute(&mut log).is_empty());
    assert_eq!(log.runs().len(), 1);
}
