use std::cell::Cell;
use std::rc::Rc;

/// Layout measurement capability queried by the slider.
///
/// Decouples the engine from any rendering surface: hosts report the current
/// viewport width and the slider derives its track geometry from it.
pub trait GeometryProvider {
    fn viewport_width_px(&self) -> f64;
}

impl<F> GeometryProvider for F
where
    F: Fn() -> f64,
{
    fn viewport_width_px(&self) -> f64 {
        self()
    }
}

/// Constant viewport width, for headless use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedViewport(pub f64);

impl GeometryProvider for FixedViewport {
    fn viewport_width_px(&self) -> f64 {
        self.0
    }
}

/// Viewport width shared between a host and a slider.
///
/// Clones observe the same cell; after `set_width_px` the host calls
/// `resize` on the slider to resync.
#[derive(Debug, Clone)]
pub struct SharedViewport {
    width_px: Rc<Cell<f64>>,
}

impl SharedViewport {
    #[must_use]
    pub fn new(width_px: f64) -> Self {
        Self {
            width_px: Rc::new(Cell::new(width_px)),
        }
    }

    pub fn set_width_px(&self, width_px: f64) {
        self.width_px.set(width_px);
    }
}

impl GeometryProvider for SharedViewport {
    fn viewport_width_px(&self) -> f64 {
        self.width_px.get()
    }
}
