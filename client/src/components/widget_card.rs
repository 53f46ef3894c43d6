//! Draggable, expandable frame around one overview widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header's drag handle forwards pointer events to `OverviewState`; the
//! state machine answers with capture/release effects that `drag_dom`
//! performs. After a drop or an expand toggle the layout is written back to
//! localStorage.

#[cfg(test)]
#[path = "widget_card_test.rs"]
mod widget_card_test;

use fleet::drag::DragEffect;
use fleet::layout::{Placement, WidgetId};
use fleet::prefs::{WIDGET_EXPANDED_KEY, WIDGET_ORDER_KEY};
use leptos::prelude::*;

use crate::state::overview::{OverviewState, Persist};
use crate::util::drag_dom::{self, DomHitTester};
use crate::util::storage;

/// Grid span class. Literal strings keep the Tailwind scanner aware of them.
#[must_use]
pub fn span_class(span: u8) -> &'static str {
    match span {
        0 | 1 => "lg:col-span-1",
        2 => "lg:col-span-2",
        3 => "lg:col-span-3",
        _ => "lg:col-span-4",
    }
}

/// Drop indicator bar for the hovered side.
#[must_use]
pub fn indicator_class(placement: Option<Placement>) -> &'static str {
    match placement {
        Some(Placement::Before) => "border-l-4 border-primary",
        Some(Placement::After) => "border-r-4 border-primary",
        None => "",
    }
}

/// Write the part of the layout a change touched.
pub fn persist(state: &OverviewState, what: Persist) {
    match what {
        Persist::Nothing => {}
        Persist::Order => storage::save(WIDGET_ORDER_KEY, &state.encoded_order()),
        Persist::Expanded => storage::save(WIDGET_EXPANDED_KEY, &state.encoded_expanded()),
    }
}

fn release(effect: Option<DragEffect>, ev: Option<&leptos::ev::PointerEvent>) {
    if let Some(DragEffect::Release { pointer_id, .. }) = effect {
        drag_dom::release(ev, pointer_id);
    }
}

#[component]
pub fn WidgetCard(id: WidgetId, #[prop(into)] span: Signal<u8>, children: Children) -> impl IntoView {
    let overview = expect_context::<RwSignal<OverviewState>>();

    let is_source = move || overview.with(|s| s.drag.source() == Some(id));
    let indicator = move || overview.with(|s| s.drag.indicator_for(id));
    let expanded = move || overview.with(|s| s.layout.is_expanded(id));

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        let effect = overview
            .try_update(|s| s.pointer_down(id, ev.pointer_id(), ev.button(), drag_dom::event_point(&ev)))
            .flatten();
        if let Some(DragEffect::Capture { .. }) = effect {
            ev.prevent_default();
            if !drag_dom::capture(&ev) {
                let effect = overview.try_update(|s| s.capture_lost(ev.pointer_id())).flatten();
                release(effect, Some(&ev));
            }
        }
    };
    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        let current = overview.with_untracked(|s| s.drag);
        if !current.is_dragging() {
            return;
        }
        let mut next = current;
        next.pointer_move(ev.pointer_id(), drag_dom::event_point(&ev), &DomHitTester);
        // Only hover changes affect rendering; plain motion stays silent.
        if next.hover() == current.hover() {
            overview.update_untracked(|s| s.drag = next);
        } else {
            overview.update(|s| s.drag = next);
        }
    };
    let on_pointer_up = move |ev: leptos::ev::PointerEvent| {
        let Some((effect, what)) = overview.try_update(|s| s.pointer_up(ev.pointer_id())) else {
            return;
        };
        release(effect, Some(&ev));
        overview.with_untracked(|s| persist(s, what));
    };
    let on_pointer_cancel = move |ev: leptos::ev::PointerEvent| {
        let effect = overview.try_update(|s| s.pointer_cancel(ev.pointer_id())).flatten();
        release(effect, Some(&ev));
    };
    // Fires after every release too; by then the drag is idle and this is a no-op.
    let on_lost_capture = move |ev: leptos::ev::PointerEvent| {
        let effect = overview.try_update(|s| s.capture_lost(ev.pointer_id())).flatten();
        release(effect, Some(&ev));
    };
    let on_toggle = move |_| {
        if let Some(what) = overview.try_update(|s| s.toggle_expanded(id)) {
            overview.with_untracked(|s| persist(s, what));
        }
    };

    let frame_class = move || {
        let chrome = if id.framed() { "card bg-base-100 shadow" } else { "" };
        let dragged = if is_source() { "opacity-40 grayscale" } else { "" };
        format!("col-span-1 {} {chrome} {dragged} {} transition", span_class(span.get()), indicator_class(indicator()))
    };

    view! {
        <section class=frame_class data-widget-id=id.as_str()>
            <div class="flex items-center justify-between gap-2 px-4 pt-3">
                <div class="flex items-center gap-2">
                    <span
                        class="cursor-grab select-none opacity-60 hover:opacity-100"
                        style="touch-action: none;"
                        title="Drag to reorder"
                        on:pointerdown=on_pointer_down
                        on:pointermove=on_pointer_move
                        on:pointerup=on_pointer_up
                        on:pointercancel=on_pointer_cancel
                        on:lostpointercapture=on_lost_capture
                    >
                        "⠿"
                    </span>
                    <h2 class="font-semibold">{id.title()}</h2>
                </div>
                <button
                    class="btn btn-ghost btn-xs"
                    title=move || if expanded() { "Collapse" } else { "Expand to full width" }
                    on:click=on_toggle
                >
                    {move || if expanded() { "⤡" } else { "⤢" }}
                </button>
            </div>
            <div class="card-body p-4 pt-2">{children()}</div>
        </section>
    }
}

/// Abort an in-flight drag when the grid unmounts.
pub fn install_drag_teardown(overview: RwSignal<OverviewState>) {
    on_cleanup(move || {
        let effect = overview.try_update(OverviewState::teardown).flatten();
        release(effect, None);
    });
}
