use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{
    CategoryToggles, GeometryState, LinearFit, MagnitudeCategory, SelectionRange, TrendSegment,
    YearBucket, YearDomain,
};
use crate::error::{QuakeError, QuakeResult};
use crate::interaction::{SelectionGeometry, SliderMode};

use super::{ClampDiagnostic, QuakeDashboard};

pub const DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable dashboard state used by regression tests and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub domain: YearDomain,
    pub range: SelectionRange,
    pub slider_geometry: GeometryState,
    pub selection_geometry: SelectionGeometry,
    pub slider_mode: SliderMode,
    pub categories: CategoryToggles,
    pub selected_records: usize,
    pub buckets: Vec<YearBucket>,
    pub category_totals: IndexMap<String, u32>,
    pub trend_fit: Option<LinearFit>,
    pub trend_segment: Option<TrendSegment>,
    pub last_clamp: Option<ClampDiagnostic>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: DashboardSnapshot,
}

impl QuakeDashboard {
    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        let view = self.view();
        let slider = self.slider();
        let totals = view.category_totals();
        let category_totals = MagnitudeCategory::ALL
            .into_iter()
            .map(|category| (category_label(category).to_owned(), totals[category.index()]))
            .collect();
        let trend = view.trend.as_ref().ok();

        DashboardSnapshot {
            domain: self.domain(),
            range: view.range,
            slider_geometry: slider.geometry(),
            selection_geometry: slider.selection_geometry(),
            slider_mode: slider.mode(),
            categories: view.categories,
            selected_records: view.records.len(),
            buckets: view.buckets.clone(),
            category_totals,
            trend_fit: trend.map(|trend| trend.fit),
            trend_segment: trend.map(|trend| trend.segment),
            last_clamp: slider.last_clamp_diagnostic(),
        }
    }
}

impl DashboardSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> QuakeResult<String> {
        let payload = DashboardSnapshotJsonContractV1 {
            schema_version: DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            QuakeError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or a versioned v1 contract payload.
    pub fn from_json_compat_str(input: &str) -> QuakeResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<Self>(input) {
            return Ok(snapshot);
        }
        let payload: DashboardSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                QuakeError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
            })?;
        if payload.schema_version != DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(QuakeError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

fn category_label(category: MagnitudeCategory) -> &'static str {
    match category {
        MagnitudeCategory::One => "one",
        MagnitudeCategory::Two => "two",
        MagnitudeCategory::Three => "three",
        MagnitudeCategory::Four => "four",
    }
}
