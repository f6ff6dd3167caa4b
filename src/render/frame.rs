use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{QuakeError, QuakeResult};
use crate::render::{CirclePrimitive, LinePrimitive, RectPrimitive};

/// Backend-agnostic scene for one dashboard draw pass.
///
/// `bars` and `trend` belong to the chart viewport, `markers` to the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub bars: Vec<RectPrimitive>,
    pub trend: Option<LinePrimitive>,
    pub markers: Vec<CirclePrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            bars: Vec::new(),
            trend: None,
            markers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_bar(mut self, bar: RectPrimitive) -> Self {
        self.bars.push(bar);
        self
    }

    #[must_use]
    pub fn with_trend(mut self, trend: LinePrimitive) -> Self {
        self.trend = Some(trend);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: CirclePrimitive) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn validate(&self) -> QuakeResult<()> {
        if !self.viewport.is_valid() {
            return Err(QuakeError::InvalidGeometry(format!(
                "invalid viewport size: width={}, height={}",
                self.viewport.width, self.viewport.height
            )));
        }

        for bar in &self.bars {
            bar.validate()?;
        }
        if let Some(trend) = self.trend {
            trend.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty() && self.trend.is_none() && self.markers.is_empty()
    }
}
