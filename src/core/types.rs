use serde::{Deserialize, Serialize};

use crate::error::{QuakeError, QuakeResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Current slider selection in domain units, `begin <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionRange {
    pub begin: f64,
    pub end: f64,
}

impl SelectionRange {
    #[must_use]
    pub fn new(begin: f64, end: f64) -> Self {
        Self { begin, end }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.end - self.begin
    }

    /// Inclusive on both ends.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.begin && value <= self.end
    }
}

/// Viewport-width driven layout formulas for the slider track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderLayout {
    pub base_width_px: f64,
    pub width_per_viewport_percent: f64,
    pub left_base_px: f64,
    pub left_per_viewport_percent: f64,
    pub top_base_px: f64,
    pub top_per_viewport_percent: f64,
    pub top_floor_px: f64,
}

impl Default for SliderLayout {
    fn default() -> Self {
        Self {
            base_width_px: 65.0,
            width_per_viewport_percent: 75.0,
            left_base_px: 1.0,
            left_per_viewport_percent: 0.3,
            top_base_px: -25.0,
            top_per_viewport_percent: -2.0,
            top_floor_px: -40.0,
        }
    }
}

impl SliderLayout {
    pub fn validate(self) -> QuakeResult<Self> {
        for (name, value) in [
            ("base_width_px", self.base_width_px),
            ("width_per_viewport_percent", self.width_per_viewport_percent),
            ("left_base_px", self.left_base_px),
            ("left_per_viewport_percent", self.left_per_viewport_percent),
            ("top_base_px", self.top_base_px),
            ("top_per_viewport_percent", self.top_per_viewport_percent),
            ("top_floor_px", self.top_floor_px),
        ] {
            if !value.is_finite() {
                return Err(QuakeError::InvalidData(format!(
                    "slider layout `{name}` must be finite"
                )));
            }
        }
        Ok(self)
    }
}

/// Pixel placement of the slider track, derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryState {
    pub container_width_px: f64,
    pub left_offset_px: f64,
    pub top_offset_px: f64,
}

impl GeometryState {
    pub fn from_viewport_width(viewport_width_px: f64, layout: SliderLayout) -> QuakeResult<Self> {
        if !viewport_width_px.is_finite() || viewport_width_px <= 0.0 {
            return Err(QuakeError::InvalidGeometry(format!(
                "viewport width must be finite and > 0, got {viewport_width_px}"
            )));
        }

        let percent = viewport_width_px / 100.0;
        let container_width_px =
            layout.base_width_px + (percent - 1.0) * layout.width_per_viewport_percent;
        if container_width_px <= 0.0 {
            return Err(QuakeError::InvalidGeometry(format!(
                "viewport width {viewport_width_px} yields a non-positive slider track"
            )));
        }

        Ok(Self {
            container_width_px,
            left_offset_px: layout.left_base_px + percent * layout.left_per_viewport_percent,
            top_offset_px: (layout.top_base_px + percent * layout.top_per_viewport_percent)
                .max(layout.top_floor_px),
        })
    }
}
