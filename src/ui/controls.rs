//! Flash controls: color picker button and rate slider.

use egui::{pos2, vec2, Area, Context, Id, Order, Rgba, Slider, Vec2};
use crate::core::state::{OverlayState, MAX_SLIDER_RATE};
use crate::overlay::events::ControlSender;

/// Distance of the control row from the top-left corner
const MARGIN: f32 = 20.0;
/// Horizontal gap between controls
const SEPARATION: f32 = 20.0;
const COLOR_BUTTON_SIZE: Vec2 = vec2(100.0, 20.0);
const SLIDER_WIDTH: f32 = 200.0;

/// Control row shown over the flash.
/// Holds its own widget values and reports changes as control events.
pub struct ControlPanel {
    color: [f32; 4],
    rate: f32,
    events: ControlSender,
}

impl ControlPanel {
    /// Create a panel initialized from the current flash state
    pub fn new(state: &OverlayState, events: ControlSender) -> Self {
        Self {
            color: state.base_color.to_rgba_unmultiplied(),
            rate: state.rate,
            events,
        }
    }

    /// Color currently shown in the picker
    pub fn color(&self) -> Rgba {
        let [r, g, b, a] = self.color;
        Rgba::from_rgba_unmultiplied(r, g, b, a)
    }

    /// Rate currently shown on the slider
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Render the control row
    pub fn show(&mut self, ctx: &Context) {
        Area::new(Id::new("flash_controls"))
            .order(Order::Foreground)
            .fixed_pos(pos2(MARGIN, MARGIN))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = SEPARATION;
                    ui.spacing_mut().interact_size = COLOR_BUTTON_SIZE;
                    ui.spacing_mut().slider_width = SLIDER_WIDTH;

                    if ui.color_edit_button_rgba_unmultiplied(&mut self.color).changed() {
                        self.events.color_picked(self.color());
                    }

                    let slider = Slider::new(&mut self.rate, 0.0..=MAX_SLIDER_RATE).show_value(false);
                    if ui.add(slider).changed() {
                        self.events.rate_picked(self.rate);
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::events::{control_channel, ControlEvent};
    use egui::{Event, Modifiers, Pos2, PointerButton, RawInput, Rect};

    fn input(events: Vec<Event>) -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0))),
            events,
            ..Default::default()
        }
    }

    fn button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::default(),
        }
    }

    #[test]
    fn test_panel_starts_from_state() {
        let (sender, _rx) = control_channel();
        let state = OverlayState::default();
        let panel = ControlPanel::new(&state, sender);

        assert_eq!(panel.rate(), state.rate);
        let color = panel.color();
        assert!((color.r() - state.base_color.r()).abs() < 1e-6);
        assert!((color.g() - state.base_color.g()).abs() < 1e-6);
        assert!((color.b() - state.base_color.b()).abs() < 1e-6);
        assert!((color.a() - state.base_color.a()).abs() < 1e-6);
    }

    #[test]
    fn test_no_events_without_interaction() {
        let (sender, rx) = control_channel();
        let mut panel = ControlPanel::new(&OverlayState::default(), sender);

        let ctx = Context::default();
        for _ in 0..3 {
            let _ = ctx.run(Default::default(), |ctx| panel.show(ctx));
        }
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_row_sits_at_margin() {
        let (sender, _rx) = control_channel();
        let mut panel = ControlPanel::new(&OverlayState::default(), sender);

        let ctx = Context::default();
        for _ in 0..3 {
            let _ = ctx.run(input(vec![]), |ctx| panel.show(ctx));
        }

        let rect = ctx
            .memory(|mem| mem.area_rect(Id::new("flash_controls")))
            .expect("control area laid out");
        assert_eq!(rect.min, pos2(MARGIN, MARGIN));
        // Color button, gap, then slider
        let row = COLOR_BUTTON_SIZE.x + SEPARATION + SLIDER_WIDTH;
        assert!(rect.width() >= row - 1.0, "row width {}", rect.width());
        assert!(rect.height() >= COLOR_BUTTON_SIZE.y - 1.0);
    }

    #[test]
    fn test_slider_drag_reports_rate() {
        let (sender, rx) = control_channel();
        let mut panel = ControlPanel::new(&OverlayState::default(), sender);

        // Middle of the slider, right of the color button
        let slider_x = MARGIN + COLOR_BUTTON_SIZE.x + SEPARATION;
        let y = MARGIN + COLOR_BUTTON_SIZE.y / 2.0;
        let press_at = pos2(slider_x + SLIDER_WIDTH / 2.0, y);
        let drag_to = pos2(slider_x + SLIDER_WIDTH * 0.8, y);

        let ctx = Context::default();
        // Let the new area finish its first layout before interacting
        for _ in 0..3 {
            let _ = ctx.run(input(vec![Event::PointerMoved(press_at)]), |ctx| panel.show(ctx));
        }
        let frames = [
            vec![Event::PointerMoved(press_at), button(press_at, true)],
            vec![Event::PointerMoved(drag_to)],
            vec![button(drag_to, false)],
            vec![],
        ];
        for events in frames {
            let _ = ctx.run(input(events), |ctx| panel.show(ctx));
        }

        let rates: Vec<f32> = rx
            .try_iter()
            .map(|event| match event {
                ControlEvent::RatePicked(rate) => rate,
                other => panic!("unexpected event {:?}", other),
            })
            .collect();
        assert!(!rates.is_empty());
        for rate in &rates {
            assert!((0.0..=MAX_SLIDER_RATE).contains(rate), "rate {}", rate);
        }
        assert_eq!(panel.rate(), *rates.last().unwrap());
        assert!(panel.rate() > OverlayState::default().rate);
    }
}
