use serde::{Deserialize, Serialize};

use crate::core::{CategoryToggles, SelectionRange, Viewport, YearDomain};
use crate::error::{QuakeError, QuakeResult};
use crate::extensions::MarkerStyleConfig;

use super::{ChartStyle, SliderConfig};

/// Which records feed the stacked bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartScope {
    /// Records passing both the slider range and the category toggles.
    Selection,
    /// Records passing the category toggles, regardless of the slider range.
    AllYears,
}

/// Public dashboard bootstrap configuration.
///
/// Serializable so hosts can persist and reload a dashboard setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub domain_min: i32,
    pub domain_max: i32,
    #[serde(default)]
    pub slider: SliderConfig,
    #[serde(default = "default_chart_viewport")]
    pub chart_viewport: Viewport,
    #[serde(default)]
    pub chart_style: ChartStyle,
    #[serde(default = "default_chart_scope")]
    pub chart_scope: ChartScope,
    #[serde(default)]
    pub markers: MarkerStyleConfig,
    #[serde(default)]
    pub categories: CategoryToggles,
    #[serde(default)]
    pub initial_range: Option<SelectionRange>,
}

impl DashboardConfig {
    /// Creates a config over `[domain_min, domain_max]` with defaults elsewhere.
    #[must_use]
    pub fn new(domain_min: i32, domain_max: i32) -> Self {
        Self {
            domain_min,
            domain_max,
            slider: SliderConfig::default(),
            chart_viewport: default_chart_viewport(),
            chart_style: ChartStyle::default(),
            chart_scope: default_chart_scope(),
            markers: MarkerStyleConfig::default(),
            categories: CategoryToggles::all(),
            initial_range: None,
        }
    }

    #[must_use]
    pub fn with_slider(mut self, slider: SliderConfig) -> Self {
        self.slider = slider;
        self
    }

    #[must_use]
    pub fn with_chart_viewport(mut self, viewport: Viewport) -> Self {
        self.chart_viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_chart_scope(mut self, scope: ChartScope) -> Self {
        self.chart_scope = scope;
        self
    }

    #[must_use]
    pub fn with_categories(mut self, categories: CategoryToggles) -> Self {
        self.categories = categories;
        self
    }

    #[must_use]
    pub fn with_initial_range(mut self, begin: f64, end: f64) -> Self {
        self.initial_range = Some(SelectionRange::new(begin, end));
        self
    }

    pub fn year_domain(self) -> QuakeResult<YearDomain> {
        YearDomain::new(self.domain_min, self.domain_max)
    }

    pub fn validate(self) -> QuakeResult<Self> {
        if self.domain_min >= self.domain_max {
            return Err(QuakeError::InvalidDomain {
                min: f64::from(self.domain_min),
                max: f64::from(self.domain_max),
            });
        }
        if !self.chart_viewport.is_valid() {
            return Err(QuakeError::InvalidGeometry(format!(
                "invalid chart viewport: width={}, height={}",
                self.chart_viewport.width, self.chart_viewport.height
            )));
        }
        self.slider.validate()?;
        self.chart_style.validate()?;
        self.markers.validate()?;
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> QuakeResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            QuakeError::InvalidData(format!("failed to parse dashboard config json: {e}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> QuakeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            QuakeError::InvalidData(format!("failed to serialize dashboard config: {e}"))
        })
    }
}

fn default_chart_viewport() -> Viewport {
    Viewport::new(940, 300)
}

fn default_chart_scope() -> ChartScope {
    ChartScope::Selection
}
