//! Flash HUD: a full-screen color flash driven by a sinusoidal timer, with an
//! optional screen-edge border and vignette.

pub mod config;
pub mod core;
pub mod overlay;
pub mod render;
pub mod ui;

pub use config::{ConfigError, OverlayConfig};
pub use overlay::OverlayController;
