use super::*;
use fleet::drag::Rect;
use fleet::layout::WidgetId::*;

fn grid() -> [(WidgetId, Rect); 2] {
    [(Stats, Rect::new(0.0, 0.0, 200.0, 100.0)), (Links, Rect::new(200.0, 0.0, 200.0, 100.0))]
}

#[test]
fn restored_from_nothing_is_default() {
    let state = OverviewState::restored(None, None);
    assert_eq!(state.layout, WidgetLayout::default());
    assert!(!state.drag.is_dragging());
}

#[test]
fn drop_after_target_adopts_new_order() {
    let mut state = OverviewState::default();
    assert!(state.pointer_down(Stats, 7, 0, Point::new(10.0, 10.0)).is_some());
    state.drag.pointer_move(7, Point::new(350.0, 50.0), &grid());
    let (effect, persist) = state.pointer_up(7);
    assert_eq!(persist, Persist::Order);
    assert!(matches!(effect, Some(DragEffect::Release { order: Some(_), .. })));
    assert_eq!(state.layout.order().last(), Some(&Stats));
    assert_eq!(state.layout.order().len(), WidgetId::DEFAULT_ORDER.len());
}

#[test]
fn drop_keeps_expanded_set() {
    let mut state = OverviewState::default();
    state.toggle_expanded(Map);
    state.pointer_down(Stats, 1, 0, Point::new(10.0, 10.0));
    state.drag.pointer_move(1, Point::new(210.0, 50.0), &grid());
    state.pointer_up(1);
    assert_eq!(state.layout.expanded(), &[Map]);
}

#[test]
fn release_without_target_persists_nothing() {
    let mut state = OverviewState::default();
    state.pointer_down(Stats, 1, 0, Point::new(10.0, 10.0));
    let (effect, persist) = state.pointer_up(1);
    assert_eq!(persist, Persist::Nothing);
    assert!(matches!(effect, Some(DragEffect::Release { order: None, .. })));
    assert_eq!(state.layout, WidgetLayout::default());
}

#[test]
fn cancel_and_teardown_release_capture() {
    let mut state = OverviewState::default();
    state.pointer_down(Links, 3, 0, Point::new(250.0, 10.0));
    assert!(state.pointer_cancel(4).is_none());
    assert!(state.pointer_cancel(3).is_some());
    assert!(!state.drag.is_dragging());

    state.pointer_down(Links, 5, 0, Point::new(250.0, 10.0));
    assert!(matches!(state.teardown(), Some(DragEffect::Release { pointer_id: 5, order: None, .. })));
    assert!(state.teardown().is_none());
}

#[test]
fn toggle_expanded_requests_persist() {
    let mut state = OverviewState::default();
    assert_eq!(state.toggle_expanded(Speed), Persist::Expanded);
    assert_eq!(state.encoded_expanded(), r#"["speed"]"#);
}

#[test]
fn encoded_order_round_trips_through_restore() {
    let mut state = OverviewState::default();
    state.pointer_down(Links, 1, 0, Point::new(250.0, 10.0));
    state.drag.pointer_move(1, Point::new(20.0, 50.0), &grid());
    state.pointer_up(1);
    let restored = OverviewState::restored(Some(&state.encoded_order()), Some(&state.encoded_expanded()));
    assert_eq!(restored.layout, state.layout);
    assert_eq!(restored.layout.order().first(), Some(&Links));
}

#[test]
fn reset_restores_defaults() {
    let mut state = OverviewState::restored(Some(r#"["links"]"#), Some(r#"["map"]"#));
    state.reset();
    assert_eq!(state, OverviewState::default());
}

#[test]
fn lost_capture_aborts_drag_and_frees_next_pointer() {
    let mut state = OverviewState::default();
    state.pointer_down(Stats, 11, 0, Point::new(10.0, 10.0));
    state.drag.pointer_move(11, Point::new(350.0, 50.0), &grid());

    // A touch with a different id is refused while the drag is live.
    assert!(state.pointer_down(Links, 12, 0, Point::new(210.0, 10.0)).is_none());

    assert!(state.capture_lost(12).is_none());
    let effect = state.capture_lost(11);
    assert!(matches!(effect, Some(DragEffect::Release { pointer_id: 11, order: None, .. })));
    assert!(!state.drag.is_dragging());
    assert_eq!(state.layout.order(), WidgetLayout::default().order());

    assert!(state.pointer_down(Links, 12, 0, Point::new(210.0, 10.0)).is_some());
}

#[test]
fn lost_capture_after_drop_is_a_no_op() {
    let mut state = OverviewState::default();
    state.pointer_down(Stats, 2, 0, Point::new(10.0, 10.0));
    state.drag.pointer_move(2, Point::new(350.0, 50.0), &grid());
    let (_, persist) = state.pointer_up(2);
    assert_eq!(persist, Persist::Order);
    let order = state.layout.order().to_vec();
    assert!(state.capture_lost(2).is_none());
    assert_eq!(state.layout.order(), order.as_slice());
}
