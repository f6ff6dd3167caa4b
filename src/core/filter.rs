use tracing::{error, trace};

#[cfg(feature = "parallel-filter")]
use rayon::prelude::*;

use crate::core::{CategoryToggles, EarthquakeRecord, SelectionRange};

/// Keeps records whose year token lies in `range`, inclusive on both ends.
///
/// Records without a readable 4-digit year are dropped.
#[must_use]
pub fn temporal_filter(records: &[EarthquakeRecord], range: SelectionRange) -> Vec<EarthquakeRecord> {
    records
        .iter()
        .filter(|record| in_range(record, range))
        .cloned()
        .collect()
}

/// Keeps records whose magnitude bin is enabled in `toggles`.
///
/// All bins disabled is a valid state and yields an empty list.
#[must_use]
pub fn category_filter(
    records: &[EarthquakeRecord],
    toggles: CategoryToggles,
) -> Vec<EarthquakeRecord> {
    if !toggles.any_enabled() {
        return Vec::new();
    }
    records
        .iter()
        .filter(|record| category_enabled(record, toggles))
        .cloned()
        .collect()
}

/// AND-combination of [`temporal_filter`] and [`category_filter`] in one pass.
#[must_use]
pub fn filter_records(
    records: &[EarthquakeRecord],
    range: SelectionRange,
    toggles: CategoryToggles,
) -> Vec<EarthquakeRecord> {
    if !toggles.any_enabled() {
        return Vec::new();
    }

    #[cfg(feature = "parallel-filter")]
    {
        records
            .par_iter()
            .filter(|record| in_range(record, range) && category_enabled(record, toggles))
            .cloned()
            .collect()
    }

    #[cfg(not(feature = "parallel-filter"))]
    {
        records
            .iter()
            .filter(|record| in_range(record, range) && category_enabled(record, toggles))
            .cloned()
            .collect()
    }
}

fn in_range(record: &EarthquakeRecord, range: SelectionRange) -> bool {
    match record.year() {
        Some(year) => range.contains(f64::from(year)),
        None => {
            trace!(timestamp = %record.timestamp, "record has no year token");
            false
        }
    }
}

fn category_enabled(record: &EarthquakeRecord, toggles: CategoryToggles) -> bool {
    match record.category() {
        Ok(category) => toggles.is_enabled(category),
        Err(err) => {
            error!(error = %err, timestamp = %record.timestamp, "dropping uncategorizable record");
            false
        }
    }
}
