use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::EarthquakeRecord;
use crate::error::{QuakeError, QuakeResult};
use crate::render::{CirclePrimitive, Color};

/// Yellow-to-dark-red ramp used to quantize magnitudes.
pub const MAGNITUDE_RAMP: [Color; 9] = [
    Color::from_rgb8(0xff, 0xff, 0xcc),
    Color::from_rgb8(0xff, 0xed, 0xa0),
    Color::from_rgb8(0xfe, 0xd9, 0x76),
    Color::from_rgb8(0xfe, 0xb2, 0x4c),
    Color::from_rgb8(0xfd, 0x8d, 0x3c),
    Color::from_rgb8(0xfc, 0x4e, 0x2a),
    Color::from_rgb8(0xe3, 0x1a, 0x1c),
    Color::from_rgb8(0xbd, 0x00, 0x26),
    Color::from_rgb8(0x80, 0x00, 0x26),
];

/// Maps geographic coordinates to pixels. Supplied by the host.
pub trait Projection {
    fn project(&self, longitude: f64, latitude: f64) -> (f64, f64);
}

impl<F> Projection for F
where
    F: Fn(f64, f64) -> (f64, f64),
{
    fn project(&self, longitude: f64, latitude: f64) -> (f64, f64) {
        self(longitude, latitude)
    }
}

/// Plate carrée projection: `x = tx + scale * lon`, `y = ty - scale * lat`, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquirectangularProjection {
    pub scale: f64,
    pub translate: (f64, f64),
}

impl Default for EquirectangularProjection {
    /// Whole-world view of a 1000x500 map.
    fn default() -> Self {
        Self {
            scale: 0.0793 * 2000.0,
            translate: (500.0, 250.0),
        }
    }
}

impl Projection for EquirectangularProjection {
    fn project(&self, longitude: f64, latitude: f64) -> (f64, f64) {
        (
            self.translate.0 + self.scale * longitude.to_radians(),
            self.translate.1 - self.scale * latitude.to_radians(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyleConfig {
    pub min_radius_px: f64,
    pub max_radius_px: f64,
    pub hover_radius_boost_px: f64,
}

impl Default for MarkerStyleConfig {
    fn default() -> Self {
        Self {
            min_radius_px: 5.0,
            max_radius_px: 10.0,
            hover_radius_boost_px: 5.0,
        }
    }
}

impl MarkerStyleConfig {
    pub fn validate(self) -> QuakeResult<Self> {
        for (value, name) in [
            (self.min_radius_px, "min_radius_px"),
            (self.max_radius_px, "max_radius_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(QuakeError::InvalidData(format!(
                    "marker config `{name}` must be finite and > 0"
                )));
            }
        }
        if self.min_radius_px > self.max_radius_px {
            return Err(QuakeError::InvalidData(
                "marker min radius must not exceed max radius".to_owned(),
            ));
        }
        if !self.hover_radius_boost_px.is_finite() || self.hover_radius_boost_px < 0.0 {
            return Err(QuakeError::InvalidData(
                "marker hover boost must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Magnitude extent of the currently visible records, with derived styling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MagnitudeStyle {
    pub min_magnitude: f64,
    pub max_magnitude: f64,
    pub config: MarkerStyleConfig,
}

impl MagnitudeStyle {
    /// Fits the style to the records' magnitude extent.
    ///
    /// Returns `Ok(None)` for an empty slice.
    pub fn fit(records: &[EarthquakeRecord], config: MarkerStyleConfig) -> QuakeResult<Option<Self>> {
        let config = config.validate()?;
        if let Some(record) = records.iter().find(|record| !record.magnitude.is_finite()) {
            return Err(QuakeError::InvalidData(format!(
                "magnitude must be finite, got {} at {}",
                record.magnitude, record.timestamp
            )));
        }

        let magnitudes = records.iter().map(|record| OrderedFloat(record.magnitude));
        let (Some(min), Some(max)) = (magnitudes.clone().min(), magnitudes.max()) else {
            return Ok(None);
        };

        Ok(Some(Self {
            min_magnitude: min.into_inner(),
            max_magnitude: max.into_inner(),
            config,
        }))
    }

    /// Position of `magnitude` in the extent, clamped to `[0, 1]`.
    ///
    /// A single-valued extent sits in the middle.
    fn normalized(self, magnitude: f64) -> f64 {
        let span = self.max_magnitude - self.min_magnitude;
        if span == 0.0 {
            return 0.5;
        }
        ((magnitude - self.min_magnitude) / span).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn radius_px(self, magnitude: f64) -> f64 {
        let t = self.normalized(magnitude);
        self.config.min_radius_px + t * (self.config.max_radius_px - self.config.min_radius_px)
    }

    /// Quantized ramp color: the extent is split into nine equal steps.
    #[must_use]
    pub fn color(self, magnitude: f64) -> Color {
        let steps = MAGNITUDE_RAMP.len();
        let index = (self.normalized(magnitude) * steps as f64).floor() as usize;
        MAGNITUDE_RAMP[index.min(steps - 1)]
    }
}

/// Tooltip payload for a hovered marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerTooltip {
    pub magnitude: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Projected and styled map marker for one record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedMarker {
    pub x: f64,
    pub y: f64,
    pub radius_px: f64,
    pub hover_radius_px: f64,
    pub color: Color,
    pub magnitude: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl PlacedMarker {
    #[must_use]
    pub fn to_primitive(self, hovered: bool) -> CirclePrimitive {
        let radius = if hovered {
            self.hover_radius_px
        } else {
            self.radius_px
        };
        CirclePrimitive::new(self.x, self.y, radius, self.color)
    }

    /// Tooltip values, coordinates rounded to two decimals.
    #[must_use]
    pub fn tooltip(self) -> MarkerTooltip {
        MarkerTooltip {
            magnitude: self.magnitude,
            latitude: round_to_hundredths(self.latitude),
            longitude: round_to_hundredths(self.longitude),
        }
    }
}

/// Projects and styles every record, preserving input order.
pub fn place_markers(
    records: &[EarthquakeRecord],
    projection: &impl Projection,
    config: MarkerStyleConfig,
) -> QuakeResult<Vec<PlacedMarker>> {
    let Some(style) = MagnitudeStyle::fit(records, config)? else {
        return Ok(Vec::new());
    };

    let mut markers = Vec::with_capacity(records.len());
    for record in records {
        let (x, y) = projection.project(record.longitude, record.latitude);
        if !x.is_finite() || !y.is_finite() {
            return Err(QuakeError::InvalidData(format!(
                "projection produced non-finite position for record at {}",
                record.timestamp
            )));
        }
        let radius_px = style.radius_px(record.magnitude);
        markers.push(PlacedMarker {
            x,
            y,
            radius_px,
            hover_radius_px: radius_px + style.config.hover_radius_boost_px,
            color: style.color(record.magnitude),
            magnitude: record.magnitude,
            latitude: record.latitude,
            longitude: record.longitude,
        });
    }
    Ok(markers)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
