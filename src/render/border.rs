//! Screen-edge border.
//! Four independent segments inset by one point from the viewport edges.
//! Corners are not mitered; where segments overlap the last one drawn wins.

use egui::{pos2, Pos2, Rect};
use crate::config::BorderConfig;
use crate::render::canvas::Canvas;

/// Inset of every border segment from its viewport edge
pub const BORDER_INSET: f32 = 1.0;

/// Border segments for a viewport, in draw order: top, left, right, bottom
pub fn border_segments(viewport: Rect) -> [(Pos2, Pos2); 4] {
    let Rect { min, max } = viewport;
    [
        (pos2(min.x, min.y + BORDER_INSET), pos2(max.x, min.y + BORDER_INSET)),
        (pos2(min.x + BORDER_INSET, min.y), pos2(min.x + BORDER_INSET, max.y)),
        (pos2(max.x - BORDER_INSET, max.y), pos2(max.x - BORDER_INSET, min.y + BORDER_INSET)),
        (pos2(max.x, max.y - BORDER_INSET), pos2(min.x + BORDER_INSET, max.y - BORDER_INSET)),
    ]
}

/// Draw the border if it is enabled
pub fn draw_border(canvas: &mut impl Canvas, viewport: Rect, border: &BorderConfig) {
    if !border.enabled {
        return;
    }
    for (from, to) in border_segments(viewport) {
        canvas.line_segment(from, to, border.color, border.thickness);
    }
}
