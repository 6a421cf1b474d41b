use super::geom::Rect;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BlockId(pub u64);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Forward,
    Right,
}

impl Direction {
    /// Signed value the robot understands: left is -1, forward 0, right 1.
    pub fn value(self) -> i8 {
        match self {
            Self::Left => -1,
            Self::Forward => 0,
            Self::Right => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.value())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Backspace,
}

/// Free-text duration. The text is never parsed; it is handed to the execution sink as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DurationField {
    value: String,
    max_len: usize,
}

impl DurationField {
    pub fn new(initial: &str, max_len: usize) -> Self {
        Self {
            value: initial.chars().take(max_len).collect(),
            max_len,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Returns whether the text changed. Inserts past `max_len` characters and control
    /// characters are dropped.
    pub fn apply(&mut self, edit: TextEdit) -> bool {
        match edit {
            TextEdit::Insert(ch) => {
                if ch.is_control() || self.value.chars().count() >= self.max_len {
                    return false;
                }
                self.value.push(ch);
                true
            }
            TextEdit::Backspace => self.value.pop().is_some(),
        }
    }
}

/// One queued robot action as it sits on the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionBlock {
    pub id: BlockId,
    pub name: String,
    pub motors: Vec<usize>,
    pub direction: Direction,
    pub duration: DurationField,
    pub rect: Rect,
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/instruction.rs"]
mod tests;
