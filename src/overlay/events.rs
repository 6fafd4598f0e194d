//! Typed control events from the UI to the overlay controller.
//! Uses a crossbeam channel so widgets never hold the controller.

use crossbeam::channel;
use egui::Rgba;

/// Change notification sent by a control widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    /// The color picker changed
    ColorPicked(Rgba),
    /// The rate slider changed
    RatePicked(f32),
}

/// Sending half, held by the control panel
#[derive(Debug, Clone)]
pub struct ControlSender {
    tx: channel::Sender<ControlEvent>,
}

impl ControlSender {
    /// Notify that a color was picked
    pub fn color_picked(&self, color: Rgba) {
        self.send(ControlEvent::ColorPicked(color));
    }

    /// Notify that a rate was picked
    pub fn rate_picked(&self, rate: f32) {
        self.send(ControlEvent::RatePicked(rate));
    }

    fn send(&self, event: ControlEvent) {
        // The receiver lives as long as the app; a closed channel only
        // happens during teardown.
        if self.tx.send(event).is_err() {
            log::trace!("Control event dropped: {:?}", event);
        }
    }
}

/// Create an unbounded control channel
pub fn control_channel() -> (ControlSender, channel::Receiver<ControlEvent>) {
    let (tx, rx) = channel::unbounded();
    (ControlSender { tx }, rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_arrive_in_order() {
        let (sender, rx) = control_channel();
        sender.rate_picked(35.0);
        sender.color_picked(Rgba::BLUE);
        sender.rate_picked(0.0);

        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                ControlEvent::RatePicked(35.0),
                ControlEvent::ColorPicked(Rgba::BLUE),
                ControlEvent::RatePicked(0.0),
            ]
        );
    }

    #[test]
    fn test_send_after_receiver_dropped_is_silent() {
        let (sender, rx) = control_channel();
        drop(rx);
        sender.rate_picked(1.0);
    }
}
