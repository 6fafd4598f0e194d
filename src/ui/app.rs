//! Main application structure for the flash HUD.
//!
//! eframe is the host: `update` is the per-frame tick, the background layer
//! painter is the drawing surface and the control panel supplies change
//! notifications.

use crossbeam::channel::Receiver;
use eframe::egui::{Context, LayerId};
use eframe::{App, CreationContext};
use crate::config::OverlayConfig;
use crate::overlay::controller::OverlayController;
use crate::overlay::events::{control_channel, ControlEvent};
use crate::render::vignette::VignetteResources;
use crate::ui::controls::ControlPanel;

/// Flash HUD application
pub struct HudApp {
    controller: OverlayController,
    controls: ControlPanel,
    events: Receiver<ControlEvent>,
}

impl HudApp {
    /// Create the application
    ///
    /// Called by eframe during application initialization. Installs the
    /// vignette GPU resources when the vignette is enabled and a wgpu render
    /// state is available.
    pub fn new(cc: &CreationContext<'_>, config: OverlayConfig) -> Self {
        let app = Self::with_config(config);

        if app.controller.vignette().is_visible() {
            match cc.wgpu_render_state.as_ref() {
                Some(render_state) => {
                    VignetteResources::install(render_state, app.controller.vignette().params)
                }
                None => log::warn!("Vignette enabled but no wgpu render state; it will not be drawn"),
            }
        }

        app
    }

    /// Create the application without touching the GPU
    pub fn with_config(config: OverlayConfig) -> Self {
        let (sender, events) = control_channel();
        let controller = OverlayController::new(config);
        let controls = ControlPanel::new(controller.state(), sender);

        Self {
            controller,
            controls,
            events,
        }
    }

    pub fn controller(&self) -> &OverlayController {
        &self.controller
    }

    /// Run one host frame: apply control events, tick, paint, show controls
    pub fn frame(&mut self, ctx: &Context) {
        self.controller.drain(&self.events);

        let delta = ctx.input(|i| i.stable_dt) as f64;
        self.controller.on_frame_tick(delta);

        let mut painter = ctx.layer_painter(LayerId::background());
        self.controller.on_redraw_requested(&mut painter, ctx.screen_rect());

        self.controls.show(ctx);

        if self.controller.take_redraw_request() {
            ctx.request_repaint();
        }
    }
}

impl App for HudApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.frame(ctx);
    }
}
