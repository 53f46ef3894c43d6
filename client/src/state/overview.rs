//! Overview grid state: widget layout plus the in-flight drag.
//!
//! DESIGN
//! ======
//! The drag state machine lives in `fleet::drag`; this wrapper owns the
//! layout it rearranges and turns a release into a new persisted order.

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

use fleet::drag::{DragEffect, DragState, Point};
use fleet::layout::{LayoutItem, WidgetId, WidgetLayout};
use fleet::prefs;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverviewState {
    pub layout: WidgetLayout,
    pub drag: DragState,
}

/// What the page must persist after a state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Persist {
    Nothing,
    Order,
    Expanded,
}

impl OverviewState {
    /// Rebuild from the raw localStorage values.
    #[must_use]
    pub fn restored(order: Option<&str>, expanded: Option<&str>) -> Self {
        Self { layout: prefs::restore_layout(order, expanded), drag: DragState::Idle }
    }

    #[must_use]
    pub fn items(&self) -> Vec<LayoutItem> {
        self.layout.items()
    }

    pub fn pointer_down(&mut self, source: WidgetId, pointer_id: i32, button: i16, at: Point) -> Option<DragEffect> {
        self.drag.pointer_down(source, pointer_id, button, at)
    }

    /// Finish the drag and adopt the new order when the drop landed.
    pub fn pointer_up(&mut self, pointer_id: i32) -> (Option<DragEffect>, Persist) {
        let effect = self.drag.pointer_up(pointer_id, self.layout.order());
        let persist = self.adopt(effect.as_ref());
        (effect, persist)
    }

    pub fn pointer_cancel(&mut self, pointer_id: i32) -> Option<DragEffect> {
        self.drag.pointer_cancel(pointer_id)
    }

    /// The handle lost (or never got) pointer capture, so later move and up
    /// events may never reach it. Aborts that pointer's drag like a cancel.
    pub fn capture_lost(&mut self, pointer_id: i32) -> Option<DragEffect> {
        self.drag.pointer_cancel(pointer_id)
    }

    /// Abort any drag; used when the grid unmounts.
    pub fn teardown(&mut self) -> Option<DragEffect> {
        self.drag.teardown()
    }

    pub fn toggle_expanded(&mut self, id: WidgetId) -> Persist {
        self.layout.toggle_expanded(id);
        Persist::Expanded
    }

    pub fn reset(&mut self) {
        self.layout.reset();
        self.drag = DragState::Idle;
    }

    fn adopt(&mut self, effect: Option<&DragEffect>) -> Persist {
        let Some(DragEffect::Release { order: Some(order), .. }) = effect else {
            return Persist::Nothing;
        };
        self.layout = WidgetLayout::new(order.iter().copied(), self.layout.expanded().iter().copied());
        Persist::Order
    }

    /// JSON for the order storage key.
    #[must_use]
    pub fn encoded_order(&self) -> String {
        prefs::encode_ids(self.layout.order())
    }

    /// JSON for the expanded storage key.
    #[must_use]
    pub fn encoded_expanded(&self) -> String {
        prefs::encode_ids(self.layout.expanded())
    }
}
