use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_timestamp_token, decimal_to_f64, year_token};
use crate::core::MagnitudeCategory;
use crate::error::QuakeResult;

/// One catalog entry. Field names follow the source catalog JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeRecord {
    #[serde(rename = "DateTime")]
    pub timestamp: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Magnitude")]
    pub magnitude: f64,
}

impl EarthquakeRecord {
    #[must_use]
    pub fn new(timestamp: impl Into<String>, latitude: f64, longitude: f64, magnitude: f64) -> Self {
        Self {
            timestamp: timestamp.into(),
            latitude,
            longitude,
            magnitude,
        }
    }

    pub fn from_decimal_time(
        time: DateTime<Utc>,
        latitude: f64,
        longitude: f64,
        magnitude: Decimal,
    ) -> QuakeResult<Self> {
        Ok(Self {
            timestamp: datetime_to_timestamp_token(time),
            latitude,
            longitude,
            magnitude: decimal_to_f64(magnitude, "magnitude")?,
        })
    }

    #[must_use]
    pub fn year(&self) -> Option<i32> {
        year_token(&self.timestamp)
    }

    pub fn category(&self) -> QuakeResult<MagnitudeCategory> {
        MagnitudeCategory::from_magnitude(self.magnitude)
    }
}
