//! Drawing layer.
//!
//! Everything above this module paints in terms of cell geometry and [`core::painter::PaintCmd`]s;
//! only `backend::terminal` knows about `ratatui`.

pub mod backend;
pub mod core;
