mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{CirclePrimitive, Color, LinePrimitive, RectPrimitive};

use crate::error::QuakeResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from filtering and slider interaction.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> QuakeResult<()>;
}
