//! DOM side of overview widget dragging.
//!
//! SYSTEM CONTEXT
//! ==============
//! `fleet::drag::DragState` decides transitions; this module performs the
//! effects it asks for (pointer capture, document selection) and answers
//! its hit-test queries with `elementFromPoint`.
//!
//! TRADE-OFFS
//! ==========
//! Release always restores the body styles even when capture has already
//! been dropped by the browser, so a lost `pointerup` can never leave the
//! page unselectable.

#[cfg(test)]
#[path = "drag_dom_test.rs"]
mod drag_dom_test;

use fleet::drag::{HitTester, Point, Rect};
use fleet::layout::WidgetId;

/// Attribute every widget card carries with its wire id.
pub const WIDGET_ATTR: &str = "data-widget-id";

/// Widget id from the attribute value, ignoring unknown names.
#[must_use]
pub fn parse_widget_attr(value: Option<&str>) -> Option<WidgetId> {
    WidgetId::from_name(value?.trim())
}

/// Viewport point of a pointer event.
#[must_use]
pub fn event_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Hit-tests against the live document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomHitTester;

impl HitTester for DomHitTester {
    fn widget_at(&self, point: Point) -> Option<(WidgetId, Rect)> {
        #[cfg(feature = "hydrate")]
        {
            let doc = web_sys::window()?.document()?;
            #[allow(clippy::cast_possible_truncation)]
            let hit = doc.element_from_point(point.x as f32, point.y as f32)?;
            let card = hit.closest(&format!("[{WIDGET_ATTR}]")).ok().flatten()?;
            let id = parse_widget_attr(card.get_attribute(WIDGET_ATTR).as_deref())?;
            let r = card.get_bounding_client_rect();
            Some((id, Rect::new(r.left(), r.top(), r.width(), r.height())))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = point;
            None
        }
    }
}

#[cfg(feature = "hydrate")]
fn set_body_drag_styles(dragging: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    if dragging {
        let _ = style.set_property("user-select", "none");
        let _ = style.set_property("cursor", "grabbing");
    } else {
        let _ = style.remove_property("user-select");
        let _ = style.remove_property("cursor");
    }
}

/// Capture the pointer on the event's handle and disable text selection.
/// Returns whether the handle now holds capture; on `false` the caller
/// must abort the drag and call `release`.
#[must_use]
pub fn capture(ev: &leptos::ev::PointerEvent) -> bool {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        let Some(el) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            log::warn!("pointer capture failed: no handle element");
            return false;
        };
        if let Err(e) = el.set_pointer_capture(ev.pointer_id()) {
            log::warn!("pointer capture failed: {e:?}");
            return false;
        }
        set_body_drag_styles(true);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        true
    }
}

/// Restore selection, and drop capture when `ev`'s handle still holds it.
/// `ev` is `None` on teardown, where the handle is already gone; capture
/// is then left for the browser to drop with the element.
pub fn release(ev: Option<&leptos::ev::PointerEvent>, pointer_id: i32) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        if let Some(el) = ev.and_then(|e| e.current_target()).and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
            if el.has_pointer_capture(pointer_id) {
                let _ = el.release_pointer_capture(pointer_id);
            }
        }
        set_body_drag_styles(false);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ev, pointer_id);
    }
}
