use crate::error::QuakeResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates frame content so tests catch invalid geometry.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_bar_count: usize,
    pub last_marker_count: usize,
    pub last_had_trend: bool,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> QuakeResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_bar_count = frame.bars.len();
        self.last_marker_count = frame.markers.len();
        self.last_had_trend = frame.trend.is_some();
        Ok(())
    }
}
