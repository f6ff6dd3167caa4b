use tracing::{debug, trace};

use crate::core::{
    CategoryToggles, EarthquakeRecord, LinearFit, MagnitudeCategory, SelectionRange,
    StackedSeries, TrendSegment, YearBucket, YearDomain, aggregate_by_year, category_filter,
    filter_records, trend_segment,
};
use crate::error::QuakeResult;
use crate::extensions::{PlacedMarker, Projection, place_markers};
use crate::interaction::DragTarget;
use crate::render::{RenderFrame, Renderer};

use super::{
    ChartScope, DashboardConfig, GeometryProvider, ListenerId, RangeRequest, RangeSlider,
    build_chart_frame,
};

/// Fitted trendline over the top of the stacked series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    pub fit: LinearFit,
    pub segment: TrendSegment,
}

/// Derived state for one dashboard refresh.
///
/// Recomputed from scratch after every range or toggle change; nothing here is
/// shared between refreshes.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub range: SelectionRange,
    pub categories: CategoryToggles,
    /// Records passing both filters, in dataset order.
    pub records: Vec<EarthquakeRecord>,
    pub buckets: Vec<YearBucket>,
    pub stacked: StackedSeries,
    /// `Err(DegenerateRegression)` when the fit is impossible; the host skips the line.
    pub trend: QuakeResult<Trend>,
}

impl DashboardView {
    pub fn compute(
        records: &[EarthquakeRecord],
        range: SelectionRange,
        categories: CategoryToggles,
        domain: YearDomain,
        scope: ChartScope,
    ) -> QuakeResult<Self> {
        let selected = filter_records(records, range, categories);
        let buckets = match scope {
            ChartScope::Selection => aggregate_by_year(&selected, domain)?,
            ChartScope::AllYears => {
                aggregate_by_year(&category_filter(records, categories), domain)?
            }
        };
        let stacked = StackedSeries::from_buckets(&buckets);
        let trend = trend_segment(&stacked).map(|(fit, segment)| Trend { fit, segment });

        Ok(Self {
            range,
            categories,
            records: selected,
            buckets,
            stacked,
            trend,
        })
    }

    /// Total count per magnitude bin across all buckets.
    #[must_use]
    pub fn category_totals(&self) -> [u32; 4] {
        let mut totals = [0; 4];
        for bucket in &self.buckets {
            for category in MagnitudeCategory::ALL {
                totals[category.index()] += bucket.count(category);
            }
        }
        totals
    }
}

/// Linked slider, category toggles and derived chart data.
///
/// Owns the dataset and the slider. Every forwarded gesture, range request or
/// toggle change refilters the dataset and recomputes the [`DashboardView`].
/// Toggles are read at filter time, never cached inside the view pipeline.
#[derive(Debug)]
pub struct QuakeDashboard {
    config: DashboardConfig,
    domain: YearDomain,
    records: Vec<EarthquakeRecord>,
    categories: CategoryToggles,
    slider: RangeSlider,
    view: DashboardView,
}

impl QuakeDashboard {
    pub fn new(
        config: DashboardConfig,
        records: Vec<EarthquakeRecord>,
        provider: impl GeometryProvider + 'static,
    ) -> QuakeResult<Self> {
        let config = config.validate()?;
        let domain = config.year_domain()?;
        let mut slider = RangeSlider::new(
            f64::from(domain.min()),
            f64::from(domain.max()),
            provider,
            config.slider,
        )?;
        if let Some(initial) = config.initial_range {
            slider.set_range(initial.begin, initial.end);
        }

        let view = DashboardView::compute(
            &records,
            slider.range(),
            config.categories,
            domain,
            config.chart_scope,
        )?;
        debug!(
            records = records.len(),
            domain_min = domain.min(),
            domain_max = domain.max(),
            "dashboard initialized"
        );

        Ok(Self {
            config,
            domain,
            records,
            categories: config.categories,
            slider,
            view,
        })
    }

    #[must_use]
    pub fn config(&self) -> DashboardConfig {
        self.config
    }

    #[must_use]
    pub fn domain(&self) -> YearDomain {
        self.domain
    }

    #[must_use]
    pub fn records(&self) -> &[EarthquakeRecord] {
        &self.records
    }

    #[must_use]
    pub fn categories(&self) -> CategoryToggles {
        self.categories
    }

    #[must_use]
    pub fn slider(&self) -> &RangeSlider {
        &self.slider
    }

    #[must_use]
    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn set_records(&mut self, records: Vec<EarthquakeRecord>) -> QuakeResult<()> {
        debug!(count = records.len(), "replace dashboard records");
        self.records = records;
        self.refresh()
    }

    pub fn set_category_enabled(
        &mut self,
        category: MagnitudeCategory,
        enabled: bool,
    ) -> QuakeResult<()> {
        self.categories.set(category, enabled);
        trace!(?category, enabled, "category toggled");
        self.refresh()
    }

    pub fn set_categories(&mut self, categories: CategoryToggles) -> QuakeResult<()> {
        self.categories = categories;
        self.refresh()
    }

    pub fn on_change(&mut self, listener: impl FnMut(SelectionRange) + 'static) -> ListenerId {
        self.slider.on_change(listener)
    }

    pub fn on_drag_end(&mut self, listener: impl FnMut(SelectionRange) + 'static) -> ListenerId {
        self.slider.on_drag_end(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.slider.remove_listener(id)
    }

    pub fn request(&mut self, request: RangeRequest) -> QuakeResult<SelectionRange> {
        let range = self.slider.request(request);
        self.refresh()?;
        Ok(range)
    }

    pub fn set_range(&mut self, begin: f64, end: f64) -> QuakeResult<SelectionRange> {
        self.request(RangeRequest::Span(begin, end))
    }

    pub fn shift_range(&mut self, begin: f64) -> QuakeResult<SelectionRange> {
        self.request(RangeRequest::Shift(begin))
    }

    pub fn pointer_down(&mut self, target: DragTarget, x: f64) -> QuakeResult<()> {
        self.slider.pointer_down(target, x)
    }

    pub fn pointer_move(&mut self, x: f64) -> QuakeResult<()> {
        self.slider.pointer_move(x)?;
        self.refresh_if_range_changed()
    }

    pub fn pointer_up(&mut self) -> QuakeResult<()> {
        self.slider.pointer_up()?;
        self.refresh_if_range_changed()
    }

    pub fn click_track(&mut self, x: f64) -> QuakeResult<()> {
        self.slider.click_track(x)?;
        self.refresh_if_range_changed()
    }

    /// Resyncs slider geometry. The range and derived view are unchanged.
    pub fn resize(&mut self) -> QuakeResult<()> {
        self.slider.resize()
    }

    /// Projects and styles the currently selected records.
    pub fn markers(&self, projection: &impl Projection) -> QuakeResult<Vec<PlacedMarker>> {
        place_markers(&self.view.records, projection, self.config.markers)
    }

    pub fn build_frame(&self, projection: &impl Projection) -> QuakeResult<RenderFrame> {
        let markers = self.markers(projection)?;
        build_chart_frame(
            &self.view,
            &markers,
            self.config.chart_viewport,
            self.config.chart_style,
        )
    }

    pub fn render(
        &self,
        renderer: &mut impl Renderer,
        projection: &impl Projection,
    ) -> QuakeResult<()> {
        let frame = self.build_frame(projection)?;
        renderer.render(&frame)
    }

    /// Recomputes the derived view from the current range and toggles.
    pub fn refresh(&mut self) -> QuakeResult<()> {
        self.view = DashboardView::compute(
            &self.records,
            self.slider.range(),
            self.categories,
            self.domain,
            self.config.chart_scope,
        )?;
        trace!(
            begin = self.view.range.begin,
            end = self.view.range.end,
            selected = self.view.records.len(),
            trend = self.view.trend.is_ok(),
            "dashboard view refreshed"
        );
        Ok(())
    }

    fn refresh_if_range_changed(&mut self) -> QuakeResult<()> {
        if self.slider.range() == self.view.range {
            return Ok(());
        }
        self.refresh()
    }
}
