//! Windowed explorer: winit for input, pixels for the framebuffer, egui for
//! the status overlay.

pub mod errors;
mod gui_app;
pub mod keymap;
mod run_gui;

pub use run_gui::run_gui;
