pub mod aggregation;
pub mod filter;
pub mod magnitude;
pub mod primitives;
pub mod record;
pub mod scale;
pub mod trendline;
pub mod types;

pub use aggregation::{StackBand, StackedSeries, YearBucket, YearDomain, aggregate_by_year};
pub use filter::{category_filter, filter_records, temporal_filter};
pub use magnitude::{CategoryToggles, MagnitudeCategory};
pub use primitives::year_token;
pub use record::EarthquakeRecord;
pub use scale::DomainScale;
pub use trendline::{LinearFit, TrendSegment, least_squares, trend_segment};
pub use types::{GeometryState, SelectionRange, SliderLayout, Viewport};
