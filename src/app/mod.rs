//! Interactive layer: input snapshots, the per-frame controller and the canvas painter.

pub mod clock;
pub mod controller;
pub mod input;
pub mod paint;
pub mod theme;
pub mod viewport;

pub use clock::FrameClock;
pub use controller::{Controller, FrameReport};
pub use input::{FrameInput, InputCollector};
pub use paint::BuilderView;
pub use theme::CanvasTheme;
pub use viewport::Viewport;
