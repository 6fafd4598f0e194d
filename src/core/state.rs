//! Flash state and its two implicit modes.

use egui::Rgba;
use crate::core::color::{default_flash_color, displayed_color};

/// Rate the flash starts with
pub const DEFAULT_RATE: f32 = 10.0;

/// Upper bound of the rate slider
pub const MAX_SLIDER_RATE: f32 = 70.0;

/// How the displayed color responds to time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashMode {
    /// Rate is exactly zero - the picked color is shown as-is
    Static,
    /// Value channel follows the sinusoid
    Oscillating,
}

impl FlashMode {
    /// Mode implied by a rate
    pub fn from_rate(rate: f32) -> Self {
        if rate == 0.0 {
            FlashMode::Static
        } else {
            FlashMode::Oscillating
        }
    }

    /// Check if the flash is static
    pub fn is_static(&self) -> bool {
        matches!(self, FlashMode::Static)
    }

    /// Check if the flash is oscillating
    pub fn is_oscillating(&self) -> bool {
        matches!(self, FlashMode::Oscillating)
    }
}

/// Mutable flash state owned by the overlay controller
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayState {
    /// Last color picked by the user
    pub base_color: Rgba,
    /// Oscillation speed (radians per second)
    pub rate: f32,
    /// Seconds accumulated from frame deltas
    pub elapsed: f64,
    displayed: Rgba,
}

impl Default for OverlayState {
    fn default() -> Self {
        let base_color = default_flash_color();
        Self {
            base_color,
            rate: DEFAULT_RATE,
            elapsed: 0.0,
            displayed: base_color,
        }
    }
}

impl OverlayState {
    /// Current mode, derived from the rate
    pub fn mode(&self) -> FlashMode {
        FlashMode::from_rate(self.rate)
    }

    /// Color currently shown on screen
    pub fn displayed(&self) -> Rgba {
        self.displayed
    }

    /// Advance the accumulator by `delta` seconds and recompute the
    /// displayed color. Negative deltas count as zero.
    pub fn advance(&mut self, delta: f64) {
        self.elapsed += delta.max(0.0);
        self.displayed = displayed_color(self.base_color, self.rate, self.elapsed);
    }

    /// Replace the base color; it is shown immediately until the next advance
    pub fn set_base_color(&mut self, color: Rgba) {
        self.base_color = color;
        self.displayed = color;
    }
}
