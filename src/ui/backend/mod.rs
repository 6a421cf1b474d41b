//! Rendering backends.
//!
//! The canvas is painted into [`PaintCmd`]s first; a backend turns those into cells. Keeping the
//! trait small lets render tests run headless against [`test::TestBackend`].

use crate::ui::core::geom::Rect;
use crate::ui::core::painter::PaintCmd;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);
}

#[path = "ratatui.rs"]
pub mod terminal;
