pub mod border;
pub mod canvas;
pub mod shader;
pub mod vignette;

pub use border::{border_segments, draw_border};
pub use canvas::Canvas;
pub use vignette::{VignetteCallback, VignetteParams, VignetteResources};
