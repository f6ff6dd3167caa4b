use crate::error::{QuakeError, QuakeResult};

/// Linear mapping between a discrete domain (years) and a pixel interval.
///
/// Both directions share one scale factor `container_width / (max - min)`.
/// Inversion rounds to the nearest whole domain unit so slider edges land on
/// integer year boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainScale {
    domain_min: f64,
    domain_max: f64,
}

impl DomainScale {
    pub fn new(domain_min: f64, domain_max: f64) -> QuakeResult<Self> {
        if !domain_min.is_finite() || !domain_max.is_finite() || domain_min >= domain_max {
            return Err(QuakeError::InvalidDomain {
                min: domain_min,
                max: domain_max,
            });
        }

        Ok(Self {
            domain_min,
            domain_max,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.domain_max - self.domain_min
    }

    /// Pixels covered by one domain unit.
    pub fn unit_width(self, container_width_px: f64) -> QuakeResult<f64> {
        validate_width(container_width_px)?;
        Ok(container_width_px / self.span())
    }

    pub fn to_pixels(self, value: f64, container_width_px: f64) -> QuakeResult<f64> {
        if !value.is_finite() {
            return Err(QuakeError::InvalidData("value must be finite".to_owned()));
        }
        let slope = self.unit_width(container_width_px)?;
        Ok((value - self.domain_min) * slope)
    }

    /// Continuous inverse of [`DomainScale::to_pixels`].
    pub fn to_domain_exact(self, pixel: f64, container_width_px: f64) -> QuakeResult<f64> {
        if !pixel.is_finite() {
            return Err(QuakeError::InvalidData("pixel must be finite".to_owned()));
        }
        let slope = self.unit_width(container_width_px)?;
        Ok(self.domain_min + pixel / slope)
    }

    /// Inverse mapping snapped to the nearest whole domain unit.
    pub fn to_domain(self, pixel: f64, container_width_px: f64) -> QuakeResult<f64> {
        Ok(self.to_domain_exact(pixel, container_width_px)?.round())
    }

    /// Rounds a pixel offset to the nearest whole-unit boundary and maps it back.
    pub fn snap_pixels(self, pixel: f64, container_width_px: f64) -> QuakeResult<f64> {
        if !pixel.is_finite() {
            return Err(QuakeError::InvalidData("pixel must be finite".to_owned()));
        }
        let unit = self.unit_width(container_width_px)?;
        Ok((pixel / unit).round() * unit)
    }
}

fn validate_width(container_width_px: f64) -> QuakeResult<()> {
    if !container_width_px.is_finite() || container_width_px <= 0.0 {
        return Err(QuakeError::InvalidGeometry(format!(
            "container width must be finite and > 0, got {container_width_px}"
        )));
    }
    Ok(())
}
