//! UI module for the egui-based flash HUD.

pub mod app;
pub mod controls;

pub use app::HudApp;
pub use controls::ControlPanel;
