//! Overlay controller.
//! Owns the flash state and turns host ticks, redraws and control events
//! into painted output.

use crossbeam::channel::Receiver;
use egui::{Rect, Rgba};
use crate::config::OverlayConfig;
use crate::core::state::{FlashMode, OverlayState};
use crate::overlay::events::ControlEvent;
use crate::render::border::draw_border;
use crate::render::canvas::Canvas;
use crate::render::vignette::VignetteParams;

/// Full-screen vignette layer; visibility is fixed at construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VignetteLayer {
    pub params: VignetteParams,
    visible: bool,
}

impl VignetteLayer {
    pub fn new(visible: bool) -> Self {
        Self {
            params: VignetteParams::default(),
            visible,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Drives the flash overlay.
///
/// The host calls [`on_frame_tick`](Self::on_frame_tick) once per frame and
/// [`on_redraw_requested`](Self::on_redraw_requested) whenever it repaints.
/// Control widgets feed the two setters, directly or through
/// [`drain`](Self::drain).
pub struct OverlayController {
    state: OverlayState,
    config: OverlayConfig,
    vignette: VignetteLayer,
    mode: FlashMode,
    redraw_pending: bool,
}

impl OverlayController {
    /// Create a controller with default flash state
    pub fn new(config: OverlayConfig) -> Self {
        Self::with_state(config, OverlayState::default())
    }

    /// Create a controller starting from an explicit state
    pub fn with_state(config: OverlayConfig, state: OverlayState) -> Self {
        let vignette = VignetteLayer::new(config.vignette_enabled);
        log::info!(
            "Overlay controller ready: vignette {}, border {}",
            if vignette.is_visible() { "shown" } else { "hidden" },
            if config.border.enabled { "enabled" } else { "disabled" },
        );
        Self {
            mode: state.mode(),
            state,
            config,
            vignette,
            redraw_pending: false,
        }
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn vignette(&self) -> &VignetteLayer {
        &self.vignette
    }

    /// Color the next redraw will paint
    pub fn displayed_color(&self) -> Rgba {
        self.state.displayed()
    }

    /// Advance time by `delta` seconds, recompute the displayed color and
    /// request a redraw
    pub fn on_frame_tick(&mut self, delta: f64) {
        self.state.advance(delta);

        let mode = self.state.mode();
        if mode != self.mode {
            log::debug!("Flash mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }

        self.redraw_pending = true;
    }

    /// Paint the current frame onto `canvas`. Does not change any state.
    pub fn on_redraw_requested(&self, canvas: &mut impl Canvas, viewport: Rect) {
        canvas.fill_rect(viewport, self.state.displayed());
        draw_border(canvas, viewport, &self.config.border);
        if self.vignette.is_visible() {
            canvas.composite_vignette(viewport, &self.vignette.params);
        }
    }

    /// Replace the base color. No validation.
    pub fn on_color_picked(&mut self, color: Rgba) {
        log::debug!("Color picked: {:?}", color);
        self.state.set_base_color(color);
    }

    /// Replace the rate. No clamping.
    pub fn on_rate_picked(&mut self, rate: f32) {
        log::debug!("Rate picked: {}", rate);
        self.state.rate = rate;
    }

    /// Dispatch a control event to its setter
    pub fn apply(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::ColorPicked(color) => self.on_color_picked(color),
            ControlEvent::RatePicked(rate) => self.on_rate_picked(rate),
        }
    }

    /// Apply every pending control event, oldest first
    pub fn drain(&mut self, events: &Receiver<ControlEvent>) {
        for event in events.try_iter() {
            self.apply(event);
        }
    }

    /// Return whether a redraw was requested since the last call, clearing it
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_pending)
    }
}
