//! Per-frame input snapshot.
//!
//! Terminal events arrive whenever they like; the controller wants one value per frame. The
//! collector folds events into the current cursor, the held state and this frame's press edge
//! and text edits.

use super::viewport::Viewport;
use crate::core::event::{InputEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use crate::kernel::{Point, TextEdit};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub cursor: Point,
    /// Left button is down at the end of the frame.
    pub held: bool,
    /// A left-button press happened during the frame. Stays set even when the release landed
    /// in the same frame.
    pub pressed: bool,
    pub edits: Vec<TextEdit>,
}

impl FrameInput {
    pub fn hover(x: i32, y: i32) -> Self {
        Self {
            cursor: Point::new(x, y),
            ..Self::default()
        }
    }

    pub fn press(x: i32, y: i32) -> Self {
        Self {
            cursor: Point::new(x, y),
            held: true,
            pressed: true,
            edits: Vec::new(),
        }
    }

    pub fn hold(x: i32, y: i32) -> Self {
        Self {
            cursor: Point::new(x, y),
            held: true,
            pressed: false,
            edits: Vec::new(),
        }
    }

    pub fn with_edits(mut self, edits: impl IntoIterator<Item = TextEdit>) -> Self {
        self.edits.extend(edits);
        self
    }
}

#[derive(Debug, Default)]
pub struct InputCollector {
    cursor: Point,
    held: bool,
    pressed: bool,
    edits: Vec<TextEdit>,
    quit: bool,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn feed(&mut self, event: &InputEvent, viewport: &Viewport) {
        match event {
            InputEvent::Mouse(mouse) => {
                self.cursor = viewport.to_logical(mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        self.held = true;
                        self.pressed = true;
                    }
                    MouseEventKind::Up(MouseButton::Left) => self.held = false,
                    // A drag report means the button is down even if the press was missed.
                    MouseEventKind::Drag(MouseButton::Left) => self.held = true,
                    _ => {}
                }
            }
            InputEvent::Key(key) => self.feed_key(key),
            InputEvent::Paste(text) => {
                self.edits.extend(text.chars().map(TextEdit::Insert));
            }
            // The release may happen outside the terminal where we never see it.
            InputEvent::FocusLost => self.held = false,
            InputEvent::Resize(..) | InputEvent::FocusGained => {}
        }
    }

    fn feed_key(&mut self, key: &KeyEvent) {
        if !key.is_press() {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => self.quit = true,
            KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.edits.push(TextEdit::Insert(ch));
            }
            KeyCode::Backspace => self.edits.push(TextEdit::Backspace),
            _ => {}
        }
    }

    /// Snapshot for this frame. The press edge and edits are consumed; cursor and held carry
    /// over to the next frame.
    pub fn take_frame(&mut self) -> FrameInput {
        FrameInput {
            cursor: self.cursor,
            held: self.held,
            pressed: std::mem::take(&mut self.pressed),
            edits: std::mem::take(&mut self.edits),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/input.rs"]
mod tests;
