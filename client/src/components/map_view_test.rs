use super::*;
use fleet::markers::ReconcileReport;
use fleet::seed;

const NOW: i64 = 1_750_000_000_000;

#[test]
fn marker_style_positions_by_percent() {
    let assets = seed::assets(NOW);
    let spec = MarkerSpec::for_asset(&assets[0], None).unwrap();
    let style = marker_style(&spec);
    assert!(style.starts_with("left: "));
    assert!(style.ends_with("background-color: #10B981;"));
}

#[test]
fn marker_title_names_asset() {
    let assets = seed::assets(NOW);
    let spec = MarkerSpec::for_asset(&assets[1], None).unwrap();
    assert!(marker_title(&spec).starts_with("KL Express Van · 60 km/h"));
}

#[test]
fn ring_points_close_the_polygon() {
    let fence = &seed::geofences()[0];
    let ring = ring_points(fence);
    let points: Vec<&str> = ring.split(' ').collect();
    assert_eq!(points.len(), RING_POINTS + 1);
    assert_eq!(points.first(), points.last());
}

#[test]
fn signal_handles_survive_moves() {
    // Reactive values need an owner when `sandboxed-arenas` is enabled via feature unification.
    leptos::prelude::Owner::new().with(|| {
        let mut assets = seed::assets(NOW);
        let mut registry = MarkerRegistry::new();
        let first = registry.reconcile(&marker_specs(&assets, None), &mut SignalSurface);
        assert_eq!(first.created.len(), 15);
        let handle = *registry.get("TRUCK-SG-001").unwrap();

        if let Some(loc) = assets[0].current_location.as_mut() {
            loc.latitude += 0.5;
        }
        let second = registry.reconcile(&marker_specs(&assets, None), &mut SignalSurface);
        assert!(second.created.is_empty() && second.removed.is_empty());
        assert_eq!(*registry.get("TRUCK-SG-001").unwrap(), handle);
        assert!((handle.get_untracked().at.latitude - assets[0].current_location.as_ref().unwrap().latitude).abs() < 1e-9);

        let third = registry.reconcile(&marker_specs(&assets[1..], None), &mut SignalSurface);
        assert_eq!(third, ReconcileReport { created: vec![], updated: third.updated.clone(), removed: vec!["TRUCK-SG-001".into()] });
    });
}
