use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{DomainScale, GeometryState, SelectionRange};
use crate::error::{QuakeError, QuakeResult};
use crate::interaction::{DragTarget, SelectionGeometry, SliderInteraction, SliderMode};

use super::{
    GeometryProvider, ListenerId, ListenerRegistry, SliderConfig, SliderEventKind,
};

/// The three call shapes of a range request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RangeRequest {
    /// Read the current range.
    Current,
    /// Move the window start, keeping its width.
    Shift(f64),
    /// Set an explicit span. Endpoints may be given in either order.
    Span(f64, f64),
}

/// Non-fatal record of a request that had to be clamped into the domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClampDiagnostic {
    pub requested: SelectionRange,
    pub applied: SelectionRange,
    pub domain: (f64, f64),
}

/// Dual-handle range slider over a linear domain.
///
/// Owns the selection in domain units and its pixel geometry inside the track.
/// Pointer gestures move the geometry and every step is mapped back to a
/// rounded domain range and announced to change listeners. Releasing the
/// pointer snaps the geometry to whole domain units and announces drag-end.
///
/// Listeners must not mutate the slider from inside a notification; with
/// exclusive ownership this is impossible, and [`super::SharedRangeSlider`]
/// rejects it with [`QuakeError::ReentrantMutation`].
pub struct RangeSlider {
    scale: DomainScale,
    config: SliderConfig,
    provider: Box<dyn GeometryProvider>,
    geometry: GeometryState,
    selection: SelectionGeometry,
    range: SelectionRange,
    interaction: SliderInteraction,
    listeners: ListenerRegistry,
    last_clamp: Option<ClampDiagnostic>,
}

impl fmt::Debug for RangeSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSlider")
            .field("scale", &self.scale)
            .field("geometry", &self.geometry)
            .field("selection", &self.selection)
            .field("range", &self.range)
            .field("mode", &self.interaction.mode())
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

impl RangeSlider {
    /// Creates a slider with the selection collapsed at `domain_min`.
    pub fn new(
        domain_min: f64,
        domain_max: f64,
        provider: impl GeometryProvider + 'static,
        config: SliderConfig,
    ) -> QuakeResult<Self> {
        let config = config.validate()?;
        let scale = DomainScale::new(domain_min, domain_max)?;
        let geometry =
            GeometryState::from_viewport_width(provider.viewport_width_px(), config.layout)?;

        let mut slider = Self {
            scale,
            config,
            provider: Box::new(provider),
            geometry,
            selection: SelectionGeometry::new(0.0, 0.0),
            range: SelectionRange::new(domain_min, domain_min),
            interaction: SliderInteraction::default(),
            listeners: ListenerRegistry::default(),
            last_clamp: None,
        };
        slider.sync_selection_from_range()?;
        Ok(slider)
    }

    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        self.scale.domain()
    }

    #[must_use]
    pub fn scale(&self) -> DomainScale {
        self.scale
    }

    #[must_use]
    pub fn config(&self) -> SliderConfig {
        self.config
    }

    #[must_use]
    pub fn geometry(&self) -> GeometryState {
        self.geometry
    }

    #[must_use]
    pub fn selection_geometry(&self) -> SelectionGeometry {
        self.selection
    }

    #[must_use]
    pub fn mode(&self) -> SliderMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn range(&self) -> SelectionRange {
        self.range
    }

    /// Most recent clamp applied by a range request, if any.
    #[must_use]
    pub fn last_clamp_diagnostic(&self) -> Option<ClampDiagnostic> {
        self.last_clamp
    }

    pub fn on_change(&mut self, listener: impl FnMut(SelectionRange) + 'static) -> ListenerId {
        self.listeners
            .register(SliderEventKind::Change, Box::new(listener))
    }

    pub fn on_drag_end(&mut self, listener: impl FnMut(SelectionRange) + 'static) -> ListenerId {
        self.listeners
            .register(SliderEventKind::DragEnd, Box::new(listener))
    }

    /// Unregisters a listener. Returns `true` when removed.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    #[must_use]
    pub fn listener_count(&self, kind: SliderEventKind) -> usize {
        self.listeners.count(kind)
    }

    /// Applies one of the three request shapes and returns the resulting range.
    ///
    /// Out-of-domain requests are clamped, logged and recorded as a
    /// [`ClampDiagnostic`]; they never fail.
    pub fn request(&mut self, request: RangeRequest) -> SelectionRange {
        match request {
            RangeRequest::Current => self.range,
            RangeRequest::Shift(begin) => self.shift_range(begin),
            RangeRequest::Span(begin, end) => self.set_range(begin, end),
        }
    }

    /// Sets an explicit span, clamping each endpoint into the domain.
    pub fn set_range(&mut self, begin: f64, end: f64) -> SelectionRange {
        if !begin.is_finite() || !end.is_finite() {
            warn!(begin, end, "ignoring non-finite range request");
            return self.range;
        }

        let (domain_min, domain_max) = self.scale.domain();
        let requested = SelectionRange::new(begin.min(end), begin.max(end));
        let mut applied = requested;
        if requested.begin < domain_min || requested.end > domain_max {
            applied = SelectionRange::new(
                requested.begin.clamp(domain_min, domain_max),
                requested.end.clamp(domain_min, domain_max),
            );
            self.record_clamp(requested, applied);
        }

        self.commit_range(applied);
        self.range
    }

    /// Moves the window start to `begin`, preserving the current width.
    pub fn shift_range(&mut self, begin: f64) -> SelectionRange {
        if !begin.is_finite() {
            warn!(begin, "ignoring non-finite range shift");
            return self.range;
        }

        let (domain_min, domain_max) = self.scale.domain();
        let width = self.range.width().min(domain_max - domain_min);
        let requested = SelectionRange::new(begin, begin + width);
        let mut applied = requested;
        if applied.begin < domain_min {
            applied = SelectionRange::new(domain_min, domain_min + width);
        }
        if applied.end > domain_max {
            applied = SelectionRange::new(domain_max - width, domain_max);
        }
        if applied != requested {
            self.record_clamp(requested, applied);
        }

        self.commit_range(applied);
        self.range
    }

    pub fn pointer_down(&mut self, target: DragTarget, x: f64) -> QuakeResult<()> {
        ensure_finite(x, "pointer x")?;
        if self.interaction.is_dragging() {
            debug!(mode = ?self.interaction.mode(), "pointer down while dragging; restarting drag");
        }
        self.interaction.on_pointer_down(target, x);
        trace!(?target, x, "drag started");
        Ok(())
    }

    /// Applies one drag step and notifies change listeners.
    ///
    /// Moves while idle and zero-delta moves are ignored.
    pub fn pointer_move(&mut self, x: f64) -> QuakeResult<()> {
        ensure_finite(x, "pointer x")?;
        let Some(dx) = self.interaction.on_pointer_move(x) else {
            return Ok(());
        };
        if dx == 0.0 {
            return Ok(());
        }

        let container = self.geometry.container_width_px;
        let min_width = self.config.min_width_px;
        let selection = match self.interaction.mode() {
            SliderMode::DraggingRight => self.selection.resize_right(dx, min_width, container),
            SliderMode::DraggingLeft => self.selection.resize_left(dx, min_width, container),
            SliderMode::DraggingBody => self.selection.translate(dx, container),
            SliderMode::Idle => return Ok(()),
        };

        let range = self.range_for(selection)?;
        self.selection = selection;
        self.range = range;
        self.listeners.dispatch(SliderEventKind::Change, self.range);
        Ok(())
    }

    /// Ends a drag: snaps geometry to whole domain units and fires drag-end.
    pub fn pointer_up(&mut self) -> QuakeResult<()> {
        let ended = self.interaction.on_pointer_up();
        if ended == SliderMode::Idle {
            return Ok(());
        }

        let container = self.geometry.container_width_px;
        let unit = self.scale.unit_width(container)?;
        let left_px = self.scale.snap_pixels(self.selection.left_px, container)?;
        let width_px = match ended {
            SliderMode::DraggingLeft | SliderMode::DraggingRight => self.range.width() * unit,
            SliderMode::DraggingBody | SliderMode::Idle => self.selection.width_px,
        };
        let selection = SelectionGeometry::new(left_px, width_px);
        let snapped = self.range_for(selection)?;
        self.selection = selection;
        if snapped != self.range {
            self.range = snapped;
            self.listeners.dispatch(SliderEventKind::Change, self.range);
        }

        debug!(?ended, begin = self.range.begin, end = self.range.end, "drag ended");
        self.listeners.dispatch(SliderEventKind::DragEnd, self.range);
        Ok(())
    }

    /// Centers the current selection on a click position of the track.
    ///
    /// Ignored while a drag is in progress.
    pub fn click_track(&mut self, x: f64) -> QuakeResult<()> {
        ensure_finite(x, "click x")?;
        if self.interaction.is_dragging() {
            debug!(x, "ignoring track click during drag");
            return Ok(());
        }

        let selection = self
            .selection
            .centered_on(x, self.geometry.container_width_px);
        let range = self.range_for(selection)?;
        self.selection = selection;
        self.range = range;
        self.listeners.dispatch(SliderEventKind::Change, self.range);
        Ok(())
    }

    /// Re-reads the viewport width and re-derives pixel geometry from the
    /// current range. Listeners are not notified.
    pub fn resize(&mut self) -> QuakeResult<()> {
        self.geometry = GeometryState::from_viewport_width(
            self.provider.viewport_width_px(),
            self.config.layout,
        )?;
        self.sync_selection_from_range()?;
        trace!(
            container_width_px = self.geometry.container_width_px,
            "slider geometry resynced"
        );
        Ok(())
    }

    fn record_clamp(&mut self, requested: SelectionRange, applied: SelectionRange) {
        let domain = self.scale.domain();
        warn!(
            requested_begin = requested.begin,
            requested_end = requested.end,
            domain_min = domain.0,
            domain_max = domain.1,
            "range request outside of bounds; clamping"
        );
        self.last_clamp = Some(ClampDiagnostic {
            requested,
            applied,
            domain,
        });
    }

    fn commit_range(&mut self, range: SelectionRange) {
        self.range = range;
        if let Err(err) = self.sync_selection_from_range() {
            warn!(error = %err, "failed to resync slider geometry");
        }
        self.listeners.dispatch(SliderEventKind::Change, self.range);
    }

    fn sync_selection_from_range(&mut self) -> QuakeResult<()> {
        let container = self.geometry.container_width_px;
        let left_px = self.scale.to_pixels(self.range.begin, container)?;
        let width_px = self.range.width() * self.scale.unit_width(container)?;
        self.selection = SelectionGeometry::new(left_px, width_px);
        Ok(())
    }

    /// Rounded, clamped domain range covered by `selection`.
    fn range_for(&self, selection: SelectionGeometry) -> QuakeResult<SelectionRange> {
        let container = self.geometry.container_width_px;
        let (domain_min, domain_max) = self.scale.domain();
        let unit = self.scale.unit_width(container)?;

        let begin_exact = self.scale.to_domain_exact(selection.left_px, container)?;
        let end_exact = begin_exact + selection.width_px / unit;

        let begin = begin_exact.round().clamp(domain_min, domain_max);
        let end = end_exact.round().clamp(begin, domain_max);
        Ok(SelectionRange::new(begin, end))
    }
}

fn ensure_finite(value: f64, name: &str) -> QuakeResult<()> {
    if !value.is_finite() {
        return Err(QuakeError::InvalidData(format!("{name} must be finite")));
    }
    Ok(())
}
