mod chart_frame_builder;
mod dashboard;
mod dashboard_config;
mod geometry_provider;
mod listener_registry;
mod range_slider;
mod shared_slider;
mod slider_config;
mod snapshot;

pub use chart_frame_builder::{ChartStyle, build_chart_frame};
pub use dashboard::{DashboardView, QuakeDashboard, Trend};
pub use dashboard_config::{ChartScope, DashboardConfig};
pub use geometry_provider::{FixedViewport, GeometryProvider, SharedViewport};
pub use listener_registry::{ListenerId, RangeListener, SliderEventKind};
pub use range_slider::{ClampDiagnostic, RangeRequest, RangeSlider};
pub use shared_slider::SharedRangeSlider;
pub use slider_config::SliderConfig;
pub use snapshot::{
    DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1, DashboardSnapshot, DashboardSnapshotJsonContractV1,
};

pub(crate) use listener_registry::ListenerRegistry;
