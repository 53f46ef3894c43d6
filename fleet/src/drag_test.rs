use super::*;
use crate::layout::WidgetId::*;

/// Two rows of two 100px-wide widgets.
const GRID: [(WidgetId, Rect); 4] = [
    (Stats, Rect { left: 0.0, top: 0.0, width: 100.0, height: 50.0 }),
    (Speed, Rect { left: 100.0, top: 0.0, width: 100.0, height: 50.0 }),
    (Action, Rect { left: 0.0, top: 50.0, width: 100.0, height: 50.0 }),
    (Routes, Rect { left: 100.0, top: 50.0, width: 100.0, height: 50.0 }),
];

const ORDER: [WidgetId; 4] = [Stats, Speed, Action, Routes];

fn dragging(source: WidgetId) -> DragState {
    let mut state = DragState::default();
    state.pointer_down(source, 7, PRIMARY_BUTTON, Point::new(10.0, 10.0));
    state
}

// =============================================================
// Geometry
// =============================================================

#[test]
fn rect_contains_edges() {
    let r = Rect::new(10.0, 10.0, 20.0, 20.0);
    assert!(r.contains(Point::new(10.0, 10.0)));
    assert!(r.contains(Point::new(30.0, 30.0)));
    assert!(!r.contains(Point::new(30.1, 15.0)));
}

#[test]
fn placement_splits_at_midpoint() {
    let r = Rect::new(0.0, 0.0, 100.0, 10.0);
    assert_eq!(r.placement_for(Point::new(49.0, 5.0)), Placement::Before);
    assert_eq!(r.placement_for(Point::new(50.0, 5.0)), Placement::Before);
    assert_eq!(r.placement_for(Point::new(51.0, 5.0)), Placement::After);
}

#[test]
fn slice_hit_tester_finds_widget() {
    assert_eq!(GRID.widget_at(Point::new(150.0, 75.0)).map(|(id, _)| id), Some(Routes));
    assert_eq!(GRID.widget_at(Point::new(500.0, 75.0)), None);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn primary_pointer_down_captures() {
    let mut state = DragState::Idle;
    let effect = state.pointer_down(Speed, 3, PRIMARY_BUTTON, Point::default());
    assert_eq!(effect, Some(DragEffect::Capture { source: Speed, pointer_id: 3 }));
    assert_eq!(state.source(), Some(Speed));
}

#[test]
fn secondary_button_is_ignored() {
    let mut state = DragState::Idle;
    assert_eq!(state.pointer_down(Speed, 3, 2, Point::default()), None);
    assert_eq!(state, DragState::Idle);
}

#[test]
fn second_pointer_down_is_ignored_while_dragging() {
    let mut state = dragging(Stats);
    assert_eq!(state.pointer_down(Routes, 9, PRIMARY_BUTTON, Point::default()), None);
    assert_eq!(state.source(), Some(Stats));
}

#[test]
fn move_tracks_target_and_placement() {
    let mut state = dragging(Stats);
    state.pointer_move(7, Point::new(120.0, 20.0), &GRID);
    assert_eq!(state.hover(), Some(DropTarget { id: Speed, placement: Placement::Before }));
    assert_eq!(state.indicator_for(Speed), Some(Placement::Before));
    assert_eq!(state.indicator_for(Action), None);

    state.pointer_move(7, Point::new(190.0, 20.0), &GRID);
    assert_eq!(state.indicator_for(Speed), Some(Placement::After));

    state.pointer_move(7, Point::new(900.0, 20.0), &GRID);
    assert_eq!(state.hover(), None);
}

#[test]
fn hovering_source_has_no_target() {
    let mut state = dragging(Stats);
    state.pointer_move(7, Point::new(80.0, 20.0), &GRID);
    assert_eq!(state.hover(), None);
}

#[test]
fn moves_from_other_pointers_are_ignored() {
    let mut state = dragging(Stats);
    state.pointer_move(8, Point::new(120.0, 20.0), &GRID);
    assert_eq!(state.hover(), None);
}

#[test]
fn drop_after_target_reorders() {
    let mut state = dragging(Stats);
    state.pointer_move(7, Point::new(190.0, 70.0), &GRID);
    let effect = state.pointer_up(7, &ORDER);
    assert_eq!(
        effect,
        Some(DragEffect::Release { source: Stats, pointer_id: 7, order: Some(vec![Speed, Action, Routes, Stats]) })
    );
    assert_eq!(state, DragState::Idle);
}

#[test]
fn drop_on_empty_space_releases_without_order() {
    let mut state = dragging(Action);
    state.pointer_move(7, Point::new(900.0, 900.0), &GRID);
    assert_eq!(state.pointer_up(7, &ORDER), Some(DragEffect::Release { source: Action, pointer_id: 7, order: None }));
    assert!(!state.is_dragging());
}

#[test]
fn up_from_other_pointer_keeps_dragging() {
    let mut state = dragging(Action);
    assert_eq!(state.pointer_up(99, &ORDER), None);
    assert!(state.is_dragging());
}

#[test]
fn cancel_releases_without_reorder() {
    let mut state = dragging(Stats);
    state.pointer_move(7, Point::new(120.0, 20.0), &GRID);
    assert_eq!(state.pointer_cancel(7), Some(DragEffect::Release { source: Stats, pointer_id: 7, order: None }));
    assert_eq!(state, DragState::Idle);
}

#[test]
fn teardown_releases_active_drag_once() {
    let mut state = dragging(Routes);
    assert!(matches!(state.teardown(), Some(DragEffect::Release { source: Routes, .. })));
    assert_eq!(state.teardown(), None);
}

#[test]
fn idle_events_are_noops() {
    let mut state = DragState::Idle;
    state.pointer_move(1, Point::new(120.0, 20.0), &GRID);
    assert_eq!(state.pointer_up(1, &ORDER), None);
    assert_eq!(state.pointer_cancel(1), None);
    assert_eq!(state, DragState::Idle);
}

#[test]
fn new_drag_allowed_after_release() {
    let mut state = dragging(Stats);
    state.pointer_cancel(7);
    assert!(state.pointer_down(Speed, 8, PRIMARY_BUTTON, Point::default()).is_some());
}
