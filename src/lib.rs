//! blockbot: assemble robot movement programs by dragging instruction blocks on a canvas.
//!
//! Modules:
//! - kernel: robot, palette buttons, the instruction queue and the run action
//! - app: per-frame input, the controller, viewport mapping and canvas painting
//! - core: frontend-neutral input events
//! - ui: paint commands and rendering backends
//! - tui: crossterm conversion and terminal setup/teardown
//! - config, logging

pub mod app;
pub mod config;
pub mod core;
pub mod kernel;
pub mod logging;
pub mod tui;
pub mod ui;
