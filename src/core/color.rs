//! Flash color math.
//! Only the value channel of the base color oscillates; hue and saturation
//! are carried through unchanged. An oscillating flash is always opaque.

use egui::ecolor::Hsva;
use egui::Rgba;

/// Half the value range, so the sinusoid spans [0, 1]
pub const AMPLITUDE: f64 = 0.5;

/// Default flash color: HSV(1, 1, 1), which wraps around to pure red
pub fn default_flash_color() -> Rgba {
    Rgba::from(Hsva::new(1.0, 1.0, 1.0, 1.0))
}

/// Value channel of the flash at `elapsed` seconds for a given rate
#[inline]
pub fn flash_value(elapsed: f64, rate: f32) -> f32 {
    (AMPLITUDE * (elapsed * rate as f64).sin() + AMPLITUDE) as f32
}

/// Hue and saturation of a color, value discarded
#[inline]
pub fn hue_saturation(color: Rgba) -> (f32, f32) {
    let hsva = Hsva::from(color);
    (hsva.h, hsva.s)
}

/// Opaque color with the hue and saturation of `base` and the given value
pub fn with_value(base: Rgba, value: f32) -> Rgba {
    let (h, s) = hue_saturation(base);
    Rgba::from(Hsva::new(h, s, value, 1.0))
}

/// Color shown on screen for the given base color, rate and elapsed time.
///
/// A rate of exactly zero is a static flash: the base color is returned
/// untouched, value and alpha included.
pub fn displayed_color(base: Rgba, rate: f32, elapsed: f64) -> Rgba {
    if rate == 0.0 {
        base
    } else {
        with_value(base, flash_value(elapsed, rate))
    }
}
