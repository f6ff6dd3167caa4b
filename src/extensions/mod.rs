//! Optional modules layered on top of the filter pipeline.
//!
//! Nothing in `core` or the slider depends on these.

pub mod markers;

pub use markers::{
    EquirectangularProjection, MAGNITUDE_RAMP, MagnitudeStyle, MarkerStyleConfig, MarkerTooltip,
    PlacedMarker, Projection, place_markers,
};
