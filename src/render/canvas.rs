//! Immediate-mode drawing surface the overlay paints onto.

use egui::{Color32, Painter, Pos2, Rect, Rgba, Stroke};
use crate::render::vignette::{VignetteCallback, VignetteParams};

/// Drawing surface provided by the host for one redraw.
/// Calls are fire-and-forget and always succeed.
pub trait Canvas {
    /// Fill `rect` with `color`, replacing what is underneath
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Stroke a straight line from `from` to `to`
    fn line_segment(&mut self, from: Pos2, to: Pos2, color: Rgba, thickness: f32);

    /// Darken everything painted so far inside `rect` with the vignette
    fn composite_vignette(&mut self, rect: Rect, params: &VignetteParams);
}

impl Canvas for Painter {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.rect_filled(rect, 0.0, Color32::from(color));
    }

    fn line_segment(&mut self, from: Pos2, to: Pos2, color: Rgba, thickness: f32) {
        Painter::line_segment(self, [from, to], Stroke::new(thickness, Color32::from(color)));
    }

    /// The GPU uniform already holds `params`; see `VignetteResources::install`
    fn composite_vignette(&mut self, rect: Rect, _params: &VignetteParams) {
        self.add(egui_wgpu::Callback::new_paint_callback(rect, VignetteCallback));
    }
}

/// A single recorded draw call
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum DrawCommand {
    FillRect { rect: Rect, color: Rgba },
    LineSegment { from: Pos2, to: Pos2, color: Rgba, thickness: f32 },
    Vignette { rect: Rect, params: VignetteParams },
}

/// Canvas that records draw calls instead of rendering them
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

#[cfg(test)]
impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line_segments(&self) -> Vec<(Pos2, Pos2)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::LineSegment { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    pub fn vignette_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Vignette { .. }))
            .count()
    }
}

#[cfg(test)]
impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn line_segment(&mut self, from: Pos2, to: Pos2, color: Rgba, thickness: f32) {
        self.commands.push(DrawCommand::LineSegment { from, to, color, thickness });
    }

    fn composite_vignette(&mut self, rect: Rect, params: &VignetteParams) {
        self.commands.push(DrawCommand::Vignette { rect, params: *params });
    }
}
