use super::*;
use fleet::layout::compute_layout;

const NOW: i64 = 1_750_000_000_000;

#[test]
fn trend_has_one_sample_per_slot() {
    let assets = seed::assets(NOW);
    let trend = fleet_speed_trend(&assets, NOW);
    assert_eq!(trend.len(), seed::SPEED_SERIES_LEN);
    assert_eq!(trend.last().map(|s| s.timestamp), Some(NOW));
    assert!(trend.iter().all(|s| (0.0..=80.0).contains(&s.speed)));
}

#[test]
fn trend_of_idle_fleet_is_empty() {
    let mut assets = seed::assets(NOW);
    for a in &mut assets {
        a.status = AssetStatus::Inactive;
    }
    assert!(fleet_speed_trend(&assets, NOW).is_empty());
}

#[test]
fn span_of_reads_layout() {
    let items = compute_layout(&WidgetId::DEFAULT_ORDER, &[WidgetId::Links]);
    assert_eq!(span_of(&items, WidgetId::Stats), 2);
    assert_eq!(span_of(&items, WidgetId::Links), 4);
    assert_eq!(span_of(&[], WidgetId::Map), 1);
}
