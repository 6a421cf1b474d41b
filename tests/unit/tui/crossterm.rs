use super::*;

#[test]
fn left_press_keeps_cell_coordinates() {
    let event = crossterm::event::MouseEvent {
        kind: crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Left),
        column: 12,
        row: 7,
        modifiers: crossterm::event::KeyModifiers::NONE,
    };
    let converted = into_mouse_event(event);
    assert_eq!(converted.kind, MouseEventKind::Down(MouseButton::Left));
    assert_eq!((converted.column, converted.row), (12, 7));
}

#[test]
fn ctrl_c_keeps_its_modifier() {
    let event = crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::Char('c'),
        crossterm::event::KeyModifiers::CONTROL,
    );
    let converted = into_key_event(event);
    assert_eq!(converted.code, KeyCode::Char('c'));
    assert!(converted.modifiers.contains(KeyModifiers::CONTROL));
    assert_eq!(converted.kind, KeyEventKind::Press);
}

#[test]
fn unsupported_keys_become_unknown() {
    let event = crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::F(5),
        crossterm::event::KeyModifiers::NONE,
    );
    assert_eq!(into_key_event(event).code, KeyCode::Unknown);
}
