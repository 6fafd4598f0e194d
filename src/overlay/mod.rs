pub mod controller;
pub mod events;

pub use controller::{OverlayController, VignetteLayer};
pub use events::{control_channel, ControlEvent, ControlSender};
