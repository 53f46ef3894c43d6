use super::*;

use WidgetId::*;

fn spans(items: &[LayoutItem]) -> Vec<(WidgetId, u8, usize)> {
    items.iter().map(|i| (i.id, i.span, i.row)).collect()
}

fn row_sums(items: &[LayoutItem]) -> Vec<(u8, usize)> {
    let mut rows: Vec<(u8, usize)> = Vec::new();
    for item in items {
        match rows.get_mut(item.row) {
            Some((sum, count)) => {
                *sum += item.span;
                *count += 1;
            }
            None => rows.push((item.span, 1)),
        }
    }
    rows
}

/// Every permutation of `ids` via Heap's algorithm.
fn permutations(ids: &[WidgetId]) -> Vec<Vec<WidgetId>> {
    fn heap(k: usize, a: &mut Vec<WidgetId>, out: &mut Vec<Vec<WidgetId>>) {
        if k <= 1 {
            out.push(a.clone());
            return;
        }
        heap(k - 1, a, out);
        for i in 0..k - 1 {
            if k % 2 == 0 {
                a.swap(i, k - 1);
            } else {
                a.swap(0, k - 1);
            }
            heap(k - 1, a, out);
        }
    }
    let mut a = ids.to_vec();
    let mut out = Vec::new();
    heap(a.len(), &mut a, &mut out);
    out
}

// =============================================================
// Widget metadata
// =============================================================

#[test]
fn default_order_covers_every_widget_once() {
    assert_eq!(WidgetId::DEFAULT_ORDER, [Stats, Speed, Action, Routes, Map, Snapshot, Events, Links]);
    for id in WidgetId::DEFAULT_ORDER {
        assert_eq!(WidgetId::from_name(id.as_str()), Some(id));
    }
    assert_eq!(WidgetId::from_name("chart"), None);
}

#[test]
fn sizes_match_widget_kind() {
    let large: Vec<WidgetId> =
        WidgetId::DEFAULT_ORDER.into_iter().filter(|w| w.size() == WidgetSize::Large).collect();
    assert_eq!(large, vec![Stats, Speed, Map]);
    assert_eq!(Stats.weight(false), 2);
    assert_eq!(Action.weight(false), 1);
    assert_eq!(Action.weight(true), ROW_UNITS);
}

#[test]
fn only_metrics_strip_is_unframed() {
    assert!(!Stats.framed());
    assert!(Map.framed());
    assert_eq!(Speed.title(), "Fleet Speed Trend");
}

// =============================================================
// Packing
// =============================================================

#[test]
fn metrics_speed_action_routes_example() {
    let items = compute_layout(&[Stats, Speed, Action, Routes], &[]);
    assert_eq!(spans(&items), vec![(Stats, 2, 0), (Speed, 2, 0), (Action, 3, 1), (Routes, 1, 1)]);
}

#[test]
fn default_layout() {
    let items = WidgetLayout::default().items();
    assert_eq!(
        spans(&items),
        vec![
            (Stats, 2, 0),
            (Speed, 2, 0),
            (Action, 1, 1),
            (Routes, 1, 1),
            (Map, 2, 1),
            (Snapshot, 2, 2),
            (Events, 1, 2),
            (Links, 1, 2),
        ]
    );
}

#[test]
fn leftover_goes_to_large_members() {
    // Map(2) + Action(1) = 3, one unit left for the only large member.
    let items = compute_layout(&[Map, Action], &[]);
    assert_eq!(spans(&items), vec![(Map, 3, 0), (Action, 1, 0)]);
}

#[test]
fn expanded_widget_takes_own_row() {
    let items = compute_layout(&[Action, Map, Routes], &[Map]);
    assert_eq!(spans(&items), vec![(Action, 4, 0), (Map, 4, 1), (Routes, 4, 2)]);
}

#[test]
fn lone_small_widget_fills_row() {
    let items = compute_layout(&[Links], &[]);
    assert_eq!(spans(&items), vec![(Links, 4, 0)]);
}

#[test]
fn overflowing_large_starts_new_row() {
    // Action, Routes, Snapshot = 3; Speed (2) does not fit.
    let items = compute_layout(&[Action, Routes, Snapshot, Speed], &[]);
    assert_eq!(spans(&items), vec![(Action, 2, 0), (Routes, 1, 0), (Snapshot, 1, 0), (Speed, 4, 1)]);
}

#[test]
fn empty_order_yields_no_items() {
    assert!(compute_layout(&[], &[]).is_empty());
}

#[test]
fn every_row_sums_to_full_width_for_every_permutation() {
    let ids = [Stats, Speed, Action, Routes, Map, Snapshot];
    let expansions: [&[WidgetId]; 3] = [&[], &[Action], &[Stats, Routes]];
    for order in permutations(&ids) {
        for expanded in expansions {
            let items = compute_layout(&order, expanded);
            assert_eq!(items.iter().map(|i| i.id).collect::<Vec<_>>(), order);
            for (sum, count) in row_sums(&items) {
                assert_eq!(sum, ROW_UNITS, "{order:?} {expanded:?} row of {count}");
            }
            assert!(items.iter().all(|i| (1..=ROW_UNITS).contains(&i.span)));
        }
    }
}

#[test]
fn rows_are_contiguous() {
    let items = WidgetLayout::default().items();
    for pair in items.windows(2) {
        assert!(pair[1].row == pair[0].row || pair[1].row == pair[0].row + 1);
    }
}

// =============================================================
// Reorder
// =============================================================

#[test]
fn reorder_before_and_after() {
    let order = [Stats, Speed, Action, Routes];
    assert_eq!(reorder(&order, Routes, Speed, Placement::Before), Some(vec![Stats, Routes, Speed, Action]));
    assert_eq!(reorder(&order, Stats, Action, Placement::After), Some(vec![Speed, Action, Stats, Routes]));
    assert_eq!(reorder(&order, Stats, Routes, Placement::After), Some(vec![Speed, Action, Routes, Stats]));
}

#[test]
fn reorder_onto_self_is_noop() {
    assert_eq!(reorder(&[Stats, Speed], Stats, Stats, Placement::After), None);
}

#[test]
fn reorder_with_unknown_target_is_noop() {
    assert_eq!(reorder(&[Stats, Speed], Stats, Map, Placement::Before), None);
    assert_eq!(reorder(&[Stats, Speed], Map, Stats, Placement::Before), None);
}

#[test]
fn reorder_output_is_permutation_of_input() {
    let order = WidgetId::DEFAULT_ORDER;
    let mut sorted_input = order.to_vec();
    sorted_input.sort();
    for source in order {
        for target in order {
            for placement in [Placement::Before, Placement::After] {
                let next = reorder(&order, source, target, placement).unwrap_or_else(|| order.to_vec());
                assert_eq!(next.len(), order.len());
                let mut sorted = next.clone();
                sorted.sort();
                assert_eq!(sorted, sorted_input);
            }
        }
    }
}

#[test]
fn normalize_drops_duplicates_and_appends_missing() {
    let order = normalize_order([Links, Links, Map]);
    assert_eq!(order, vec![Links, Map, Stats, Speed, Action, Routes, Snapshot, Events]);
}

// =============================================================
// WidgetLayout
// =============================================================

#[test]
fn toggle_expanded_flips_membership() {
    let mut layout = WidgetLayout::default();
    layout.toggle_expanded(Map);
    assert!(layout.is_expanded(Map));
    assert_eq!(layout.expanded(), &[Map]);
    layout.toggle_expanded(Map);
    assert!(!layout.is_expanded(Map));
}

#[test]
fn move_widget_reports_change() {
    let mut layout = WidgetLayout::default();
    assert!(layout.move_widget(Links, Stats, Placement::Before));
    assert_eq!(layout.order()[0], Links);
    // Dropping directly after the previous neighbour leaves order unchanged.
    assert!(!layout.move_widget(Speed, Stats, Placement::After));
    assert!(!layout.move_widget(Speed, Speed, Placement::After));
}

#[test]
fn new_normalizes_both_lists() {
    let layout = WidgetLayout::new([Map], [Links, Links]);
    assert_eq!(layout.order().len(), WidgetId::DEFAULT_ORDER.len());
    assert_eq!(layout.order()[0], Map);
    assert_eq!(layout.expanded(), &[Links]);
}

#[test]
fn reset_restores_default() {
    let mut layout = WidgetLayout::new([Links], [Map]);
    layout.reset();
    assert_eq!(layout, WidgetLayout::default());
}
