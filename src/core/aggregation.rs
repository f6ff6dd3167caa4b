use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{EarthquakeRecord, MagnitudeCategory};
use crate::error::{QuakeError, QuakeResult};

/// Inclusive year interval that buckets are laid out over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearDomain {
    min: i32,
    max: i32,
}

impl YearDomain {
    pub fn new(min: i32, max: i32) -> QuakeResult<Self> {
        if min > max {
            return Err(QuakeError::InvalidDomain {
                min: f64::from(min),
                max: f64::from(max),
            });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(self) -> i32 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> i32 {
        self.max
    }

    /// Number of years covered, always `max - min + 1`.
    #[must_use]
    pub fn len(self) -> usize {
        usize::try_from(i64::from(self.max) - i64::from(self.min) + 1).unwrap_or(usize::MAX)
    }

    #[must_use]
    pub fn contains(self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }

    pub fn years(self) -> impl Iterator<Item = i32> {
        self.min..=self.max
    }
}

/// Per-year counts, one field per magnitude bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearBucket {
    pub year: i32,
    pub one: u32,
    pub two: u32,
    pub three: u32,
    pub four: u32,
}

impl YearBucket {
    #[must_use]
    pub fn empty(year: i32) -> Self {
        Self {
            year,
            one: 0,
            two: 0,
            three: 0,
            four: 0,
        }
    }

    #[must_use]
    pub fn count(self, category: MagnitudeCategory) -> u32 {
        match category {
            MagnitudeCategory::One => self.one,
            MagnitudeCategory::Two => self.two,
            MagnitudeCategory::Three => self.three,
            MagnitudeCategory::Four => self.four,
        }
    }

    #[must_use]
    pub fn total(self) -> u32 {
        self.one + self.two + self.three + self.four
    }

    fn increment(&mut self, category: MagnitudeCategory) {
        let slot = match category {
            MagnitudeCategory::One => &mut self.one,
            MagnitudeCategory::Two => &mut self.two,
            MagnitudeCategory::Three => &mut self.three,
            MagnitudeCategory::Four => &mut self.four,
        };
        *slot += 1;
    }
}

/// Buckets records by year and magnitude bin.
///
/// The output is dense: one bucket per year of `domain`, in ascending order,
/// zero-count years included. Records outside the domain or without a year
/// token are skipped.
pub fn aggregate_by_year(
    records: &[EarthquakeRecord],
    domain: YearDomain,
) -> QuakeResult<Vec<YearBucket>> {
    let mut buckets: IndexMap<i32, YearBucket> = domain
        .years()
        .map(|year| (year, YearBucket::empty(year)))
        .collect();

    for record in records {
        let Some(year) = record.year() else {
            trace!(timestamp = %record.timestamp, "skipping record without year token");
            continue;
        };
        let Some(bucket) = buckets.get_mut(&year) else {
            trace!(year, "skipping record outside year domain");
            continue;
        };
        bucket.increment(record.category()?);
    }

    Ok(buckets.into_values().collect())
}

/// Cumulative `[y0, y1]` band of one layer at one year index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackBand {
    pub y0: f64,
    pub y1: f64,
}

/// Four stacked layers aligned to the source buckets.
///
/// For every index `i`: `layers[k][i].y1 == layers[k][i].y0 + count_k` and
/// `layers[k + 1][i].y0 == layers[k][i].y1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedSeries {
    years: Vec<i32>,
    layers: [Vec<StackBand>; 4],
}

impl StackedSeries {
    #[must_use]
    pub fn from_buckets(buckets: &[YearBucket]) -> Self {
        let mut layers: [Vec<StackBand>; 4] =
            std::array::from_fn(|_| Vec::with_capacity(buckets.len()));

        for bucket in buckets {
            let mut y0 = 0.0;
            for category in MagnitudeCategory::ALL {
                let y1 = y0 + f64::from(bucket.count(category));
                layers[category.index()].push(StackBand { y0, y1 });
                y0 = y1;
            }
        }

        Self {
            years: buckets.iter().map(|bucket| bucket.year).collect(),
            layers,
        }
    }

    #[must_use]
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    #[must_use]
    pub fn layer(&self, category: MagnitudeCategory) -> &[StackBand] {
        &self.layers[category.index()]
    }

    #[must_use]
    pub fn layers(&self) -> &[Vec<StackBand>; 4] {
        &self.layers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.years.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Top-of-stack value per year index.
    #[must_use]
    pub fn totals(&self) -> Vec<f64> {
        self.layers[3].iter().map(|band| band.y1).collect()
    }

    /// Largest top-of-stack value, `0.0` for an empty series.
    #[must_use]
    pub fn max_total(&self) -> f64 {
        self.layers[3]
            .iter()
            .map(|band| band.y1)
            .fold(0.0, f64::max)
    }
}
