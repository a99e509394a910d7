mod color;
mod frame;
mod null_renderer;
mod primitives;
mod text;

pub use color::{HoverTier, HslColor};
pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, PolygonPrimitive, RectPrimitive, TextHAlign, TextPrimitive};
pub use text::{FixedRatioTextMeasurer, TextMeasurer, crop_text};

use crate::error::TrackResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from track domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> TrackResult<()>;
}
