//! Frontend-neutral building blocks shared by the controller and the terminal layer.

pub mod event;
