//! Pointer-driven widget drag state machine.
//!
//! `DragState` tracks a single pointer-down sequence on a widget header.
//! Transitions are driven by pointer events the client forwards from the
//! window; geometry comes from a `HitTester` so the machine itself never
//! touches the DOM. Every terminal transition (drop, cancel, teardown)
//! returns `DragEffect::Release` so the caller can drop pointer capture and
//! restore document selection on all exit paths.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::layout::{Placement, WidgetId, reorder};

/// `PointerEvent.button` value for the primary (left / touch) button.
pub const PRIMARY_BUTTON: i16 = 0;

/// Viewport coordinates in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.left + self.width && p.y >= self.top && p.y <= self.top + self.height
    }

    #[must_use]
    pub fn mid_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Right of the horizontal midpoint drops after, otherwise before.
    #[must_use]
    pub fn placement_for(&self, p: Point) -> Placement {
        if p.x > self.mid_x() { Placement::After } else { Placement::Before }
    }
}

/// Geometric point query: which widget, if any, lies under a point.
pub trait HitTester {
    fn widget_at(&self, point: Point) -> Option<(WidgetId, Rect)>;
}

impl HitTester for [(WidgetId, Rect)] {
    fn widget_at(&self, point: Point) -> Option<(WidgetId, Rect)> {
        self.iter().copied().find(|(_, rect)| rect.contains(point))
    }
}

impl<const N: usize> HitTester for [(WidgetId, Rect); N] {
    fn widget_at(&self, point: Point) -> Option<(WidgetId, Rect)> {
        self.as_slice().widget_at(point)
    }
}

/// Where the dragged widget would land if released now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    /// Widget under the pointer.
    pub id: WidgetId,
    /// Side of `id` the source lands on.
    pub placement: Placement,
}

/// Context of an in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveDrag {
    /// Widget being dragged.
    pub source: WidgetId,
    /// Pointer that owns the gesture; events from other pointers are ignored.
    pub pointer_id: i32,
    /// Last pointer position seen.
    pub position: Point,
    /// Current drop target, `None` over empty space or over the source itself.
    pub hover: Option<DropTarget>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No drag in progress; waiting for a primary pointer-down on a header.
    #[default]
    Idle,
    /// A header has captured the pointer.
    Dragging(ActiveDrag),
}

/// Side effects the caller must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEffect {
    /// Capture `pointer_id` on `source`'s header and disable text selection.
    Capture { source: WidgetId, pointer_id: i32 },
    /// Release capture, restore text selection, and apply `order` if set.
    Release { source: WidgetId, pointer_id: i32, order: Option<Vec<WidgetId>> },
}

impl DragState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    #[must_use]
    pub fn source(&self) -> Option<WidgetId> {
        match self {
            Self::Idle => None,
            Self::Dragging(active) => Some(active.source),
        }
    }

    #[must_use]
    pub fn hover(&self) -> Option<DropTarget> {
        match self {
            Self::Idle => None,
            Self::Dragging(active) => active.hover,
        }
    }

    /// Placement indicator to draw on `id`, if it is the current drop target.
    #[must_use]
    pub fn indicator_for(&self, id: WidgetId) -> Option<Placement> {
        self.hover().filter(|t| t.id == id).map(|t| t.placement)
    }

    /// Starts a drag. Non-primary buttons and pointer-downs while another drag
    /// is active are ignored.
    pub fn pointer_down(&mut self, source: WidgetId, pointer_id: i32, button: i16, position: Point) -> Option<DragEffect> {
        if button != PRIMARY_BUTTON || self.is_dragging() {
            return None;
        }
        *self = Self::Dragging(ActiveDrag { source, pointer_id, position, hover: None });
        Some(DragEffect::Capture { source, pointer_id })
    }

    /// Re-hit-tests the drop target under `position`.
    pub fn pointer_move(&mut self, pointer_id: i32, position: Point, hits: &(impl HitTester + ?Sized)) {
        let Self::Dragging(active) = self else {
            return;
        };
        if active.pointer_id != pointer_id {
            return;
        }
        active.position = position;
        active.hover = hits
            .widget_at(position)
            .filter(|(id, _)| *id != active.source)
            .map(|(id, rect)| DropTarget { id, placement: rect.placement_for(position) });
    }

    /// Completes the drag. The release carries the new order when the drop
    /// landed on another widget present in `order`.
    pub fn pointer_up(&mut self, pointer_id: i32, order: &[WidgetId]) -> Option<DragEffect> {
        let Self::Dragging(active) = *self else {
            return None;
        };
        if active.pointer_id != pointer_id {
            return None;
        }
        *self = Self::Idle;
        let next = active.hover.and_then(|t| reorder(order, active.source, t.id, t.placement));
        Some(DragEffect::Release { source: active.source, pointer_id, order: next })
    }

    /// Aborts the drag without reordering.
    pub fn pointer_cancel(&mut self, pointer_id: i32) -> Option<DragEffect> {
        match *self {
            Self::Dragging(active) if active.pointer_id == pointer_id => self.teardown(),
            _ => None,
        }
    }

    /// Aborts any drag regardless of pointer, for component unmount.
    pub fn teardown(&mut self) -> Option<DragEffect> {
        let Self::Dragging(active) = std::mem::take(self) else {
            return None;
        };
        Some(DragEffect::Release { source: active.source, pointer_id: active.pointer_id, order: None })
    }
}
