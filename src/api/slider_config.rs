use serde::{Deserialize, Serialize};

use crate::core::SliderLayout;
use crate::error::{QuakeError, QuakeResult};

/// Slider widget tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Minimum selection width while resizing with a handle.
    #[serde(default = "default_min_width_px")]
    pub min_width_px: f64,
    #[serde(default = "default_container_height_px")]
    pub container_height_px: f64,
    #[serde(default)]
    pub layout: SliderLayout,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min_width_px: default_min_width_px(),
            container_height_px: default_container_height_px(),
            layout: SliderLayout::default(),
        }
    }
}

impl SliderConfig {
    #[must_use]
    pub fn with_min_width_px(mut self, min_width_px: f64) -> Self {
        self.min_width_px = min_width_px;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: SliderLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn validate(self) -> QuakeResult<Self> {
        if !self.min_width_px.is_finite() || self.min_width_px < 0.0 {
            return Err(QuakeError::InvalidData(
                "slider min width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.container_height_px.is_finite() || self.container_height_px <= 0.0 {
            return Err(QuakeError::InvalidData(
                "slider container height must be finite and > 0".to_owned(),
            ));
        }
        self.layout.validate()?;
        Ok(self)
    }
}

fn default_min_width_px() -> f64 {
    10.0
}

fn default_container_height_px() -> f64 {
    20.0
}
