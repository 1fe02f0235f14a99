mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use crate::error::ScaleChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame` so drawing code stays
/// isolated from layout and gesture logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ScaleChartResult<()>;
}
