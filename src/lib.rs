//! quakeview: headless range-slider engine and earthquake filter pipeline.
//!
//! The slider maps pointer gestures on a pixel track to an integer year range.
//! Range changes drive a pure pipeline: temporal and magnitude filtering,
//! dense per-year stacked counts and a least-squares trendline. Rendering and
//! map projection stay with the host; the crate only emits data and
//! backend-agnostic frames.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{DashboardConfig, QuakeDashboard, RangeSlider, SliderConfig};
pub use error::{QuakeError, QuakeResult};
