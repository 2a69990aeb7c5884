// src/controllers/mod.rs

pub mod debug_panel;
pub mod input_controller;
pub mod osc;

pub use debug_panel::{draw_debug_panel, ClockReadout, PanelResult};
pub use input_controller::InputController;
pub use osc::{OscCommand, OscController};
