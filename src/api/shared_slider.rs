use std::cell::RefCell;
use std::rc::Rc;

use crate::core::SelectionRange;
use crate::error::{QuakeError, QuakeResult};
use crate::interaction::DragTarget;

use super::{ListenerId, RangeRequest, RangeSlider};

/// Shared-ownership handle for hosts that wire listeners back to the slider.
///
/// Every call needs the slider to be free. While it is dispatching a
/// notification it is borrowed, so calls made from inside a listener fail with
/// [`QuakeError::ReentrantMutation`] instead of panicking.
#[derive(Debug, Clone)]
pub struct SharedRangeSlider {
    inner: Rc<RefCell<RangeSlider>>,
}

impl SharedRangeSlider {
    #[must_use]
    pub fn new(slider: RangeSlider) -> Self {
        Self {
            inner: Rc::new(RefCell::new(slider)),
        }
    }

    pub fn range(&self) -> QuakeResult<SelectionRange> {
        self.with(|slider| Ok(slider.range()))
    }

    pub fn request(&self, request: RangeRequest) -> QuakeResult<SelectionRange> {
        self.with(|slider| Ok(slider.request(request)))
    }

    pub fn set_range(&self, begin: f64, end: f64) -> QuakeResult<SelectionRange> {
        self.with(|slider| Ok(slider.set_range(begin, end)))
    }

    pub fn shift_range(&self, begin: f64) -> QuakeResult<SelectionRange> {
        self.with(|slider| Ok(slider.shift_range(begin)))
    }

    pub fn on_change(
        &self,
        listener: impl FnMut(SelectionRange) + 'static,
    ) -> QuakeResult<ListenerId> {
        self.with(|slider| Ok(slider.on_change(listener)))
    }

    pub fn on_drag_end(
        &self,
        listener: impl FnMut(SelectionRange) + 'static,
    ) -> QuakeResult<ListenerId> {
        self.with(|slider| Ok(slider.on_drag_end(listener)))
    }

    pub fn remove_listener(&self, id: ListenerId) -> QuakeResult<bool> {
        self.with(|slider| Ok(slider.remove_listener(id)))
    }

    pub fn pointer_down(&self, target: DragTarget, x: f64) -> QuakeResult<()> {
        self.with(|slider| slider.pointer_down(target, x))
    }

    pub fn pointer_move(&self, x: f64) -> QuakeResult<()> {
        self.with(|slider| slider.pointer_move(x))
    }

    pub fn pointer_up(&self) -> QuakeResult<()> {
        self.with(RangeSlider::pointer_up)
    }

    pub fn click_track(&self, x: f64) -> QuakeResult<()> {
        self.with(|slider| slider.click_track(x))
    }

    pub fn resize(&self) -> QuakeResult<()> {
        self.with(RangeSlider::resize)
    }

    fn with<T>(&self, op: impl FnOnce(&mut RangeSlider) -> QuakeResult<T>) -> QuakeResult<T> {
        let mut slider = self
            .inner
            .try_borrow_mut()
            .map_err(|_| QuakeError::ReentrantMutation)?;
        op(&mut *slider)
    }
}
