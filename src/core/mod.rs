//! Core flash types.
//!
//! This module provides the color math and the mutable flash state that the
//! overlay controller drives once per frame. Time is accumulated in seconds
//! (f64) from host frame deltas.

pub mod color;
pub mod state;

// Re-export core data structures for easier access.
pub use color::{displayed_color, flash_value, AMPLITUDE};
pub use state::{FlashMode, OverlayState, DEFAULT_RATE, MAX_SLIDER_RATE};
