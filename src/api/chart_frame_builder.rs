use serde::{Deserialize, Serialize};

use crate::core::{MagnitudeCategory, Viewport};
use crate::error::{QuakeError, QuakeResult};
use crate::extensions::PlacedMarker;
use crate::render::{Color, LinePrimitive, RectPrimitive, RenderFrame};

use super::DashboardView;

/// Colors and spacing for the stacked bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Share of each year band left empty between bars, in `[0, 1)`.
    pub bar_padding_ratio: f64,
    /// Fill per magnitude bin, bottom layer first.
    pub layer_colors: [Color; 4],
    pub trend_color: Color,
    pub trend_stroke_width: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            bar_padding_ratio: 0.1,
            layer_colors: [
                Color::from_rgb8(0xfe, 0xd9, 0x76),
                Color::from_rgb8(0xfd, 0x8d, 0x3c),
                Color::from_rgb8(0xe3, 0x1a, 0x1c),
                Color::from_rgb8(0x80, 0x00, 0x26),
            ],
            trend_color: Color::from_rgb8(0x46, 0x82, 0xb4),
            trend_stroke_width: 2.0,
        }
    }
}

impl ChartStyle {
    pub fn validate(self) -> QuakeResult<Self> {
        if !self.bar_padding_ratio.is_finite() || !(0.0..1.0).contains(&self.bar_padding_ratio) {
            return Err(QuakeError::InvalidData(
                "bar padding ratio must be finite and in [0, 1)".to_owned(),
            ));
        }
        if !self.trend_stroke_width.is_finite() || self.trend_stroke_width <= 0.0 {
            return Err(QuakeError::InvalidData(
                "trend stroke width must be finite and > 0".to_owned(),
            ));
        }
        for color in self.layer_colors {
            color.validate()?;
        }
        self.trend_color.validate()?;
        Ok(self)
    }
}

/// Materializes stacked bars, the trendline and map markers for one draw pass.
///
/// Years share the viewport width equally; the tallest stack fills the height.
/// Empty layers produce no rect and a failed trend fit produces no line.
pub fn build_chart_frame(
    view: &DashboardView,
    markers: &[PlacedMarker],
    viewport: Viewport,
    style: ChartStyle,
) -> QuakeResult<RenderFrame> {
    if !viewport.is_valid() {
        return Err(QuakeError::InvalidGeometry(format!(
            "invalid chart viewport: width={}, height={}",
            viewport.width, viewport.height
        )));
    }
    let style = style.validate()?;
    let mut frame = RenderFrame::new(viewport);

    let series = &view.stacked;
    if series.is_empty() {
        return Ok(frame);
    }

    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let band = width / series.len() as f64;
    let bar_width = band * (1.0 - style.bar_padding_ratio);
    let inset = (band - bar_width) / 2.0;
    let max_total = series.max_total();
    let y_scale = if max_total > 0.0 { height / max_total } else { 0.0 };

    for category in MagnitudeCategory::ALL {
        let fill = style.layer_colors[category.index()];
        for (index, stack) in series.layer(category).iter().enumerate() {
            if stack.y1 <= stack.y0 {
                continue;
            }
            frame = frame.with_bar(RectPrimitive::new(
                index as f64 * band + inset,
                height - stack.y1 * y_scale,
                bar_width,
                (stack.y1 - stack.y0) * y_scale,
                fill,
            ));
        }
    }

    if let Ok(trend) = &view.trend {
        let segment = trend.segment;
        frame = frame.with_trend(LinePrimitive::new(
            segment.x1 * band + band / 2.0,
            height - segment.y1 * y_scale,
            segment.x2 * band + band / 2.0,
            height - segment.y2 * y_scale,
            style.trend_stroke_width,
            style.trend_color,
        ));
    }

    for marker in markers {
        frame = frame.with_marker(marker.to_primitive(false));
    }

    Ok(frame)
}
