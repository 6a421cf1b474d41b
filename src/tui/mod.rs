//! Terminal integration (crossterm).
//!
//! Kept apart from `kernel` and `app` so the builder logic runs headless in tests.

pub mod crossterm;
pub mod terminal_guard;
