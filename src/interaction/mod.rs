use serde::{Deserialize, Serialize};

/// Affordance a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragTarget {
    LeftHandle,
    RightHandle,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SliderMode {
    Idle,
    DraggingLeft,
    DraggingRight,
    DraggingBody,
}

impl From<DragTarget> for SliderMode {
    fn from(target: DragTarget) -> Self {
        match target {
            DragTarget::LeftHandle => Self::DraggingLeft,
            DragTarget::RightHandle => Self::DraggingRight,
            DragTarget::Body => Self::DraggingBody,
        }
    }
}

/// Pixel placement of the selection inside the track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionGeometry {
    pub left_px: f64,
    pub width_px: f64,
}

impl SelectionGeometry {
    #[must_use]
    pub fn new(left_px: f64, width_px: f64) -> Self {
        Self { left_px, width_px }
    }

    #[must_use]
    pub fn right_px(self) -> f64 {
        self.left_px + self.width_px
    }

    /// Right-handle drag: width stays within `[min_width, container - left]`.
    #[must_use]
    pub fn resize_right(self, dx: f64, min_width_px: f64, container_width_px: f64) -> Self {
        let width_px = (self.width_px + dx)
            .max(min_width_px)
            .min(container_width_px - self.left_px);
        Self {
            left_px: self.left_px,
            width_px,
        }
    }

    /// Left-handle drag.
    ///
    /// Overflow past the container start is absorbed by the width, and a width
    /// under `min_width_px` pushes the left edge back instead of going negative.
    /// The left edge never passes the container start; when the right edge sits
    /// closer than `min_width_px` to it, the selection grows rightwards instead.
    #[must_use]
    pub fn resize_left(self, dx: f64, min_width_px: f64, container_width_px: f64) -> Self {
        let mut left_px = self.left_px + dx;
        let mut width_px = self.width_px - dx;

        if left_px < 0.0 {
            width_px += left_px;
            left_px = 0.0;
        }
        if width_px < min_width_px {
            left_px = (left_px - (min_width_px - width_px)).max(0.0);
            width_px = min_width_px.min(container_width_px - left_px);
        }

        Self { left_px, width_px }
    }

    /// Body drag: width is unchanged, left stays within `[0, container - width]`.
    #[must_use]
    pub fn translate(self, dx: f64, container_width_px: f64) -> Self {
        let left_px = (self.left_px + dx)
            .max(0.0)
            .min(container_width_px - self.width_px);
        Self {
            left_px,
            width_px: self.width_px,
        }
    }

    /// Centers the selection on `x`, clamped to the track, at whole-pixel precision.
    #[must_use]
    pub fn centered_on(self, x: f64, container_width_px: f64) -> Self {
        let left_px = (x - self.width_px / 2.0)
            .max(0.0)
            .min(container_width_px - self.width_px)
            .round();
        Self {
            left_px,
            width_px: self.width_px,
        }
    }
}

/// Pointer bookkeeping for one slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderInteraction {
    mode: SliderMode,
    last_pointer_x: f64,
}

impl Default for SliderInteraction {
    fn default() -> Self {
        Self {
            mode: SliderMode::Idle,
            last_pointer_x: 0.0,
        }
    }
}

impl SliderInteraction {
    #[must_use]
    pub fn mode(self) -> SliderMode {
        self.mode
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.mode != SliderMode::Idle
    }

    pub fn on_pointer_down(&mut self, target: DragTarget, x: f64) {
        self.mode = SliderMode::from(target);
        self.last_pointer_x = x;
    }

    /// Records the new pointer position and returns the horizontal delta.
    ///
    /// Returns `None` while idle.
    pub fn on_pointer_move(&mut self, x: f64) -> Option<f64> {
        if !self.is_dragging() {
            return None;
        }
        let dx = x - self.last_pointer_x;
        self.last_pointer_x = x;
        Some(dx)
    }

    /// Leaves the dragging state and returns the mode that just ended.
    pub fn on_pointer_up(&mut self) -> SliderMode {
        std::mem::replace(&mut self.mode, SliderMode::Idle)
    }
}
