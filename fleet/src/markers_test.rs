use super::*;
use crate::asset::{AssetType, Location};
use crate::seed;

const NOW: i64 = 1_750_000_000_000;

/// Records every call so tests can assert on surface traffic.
#[derive(Default)]
struct RecordingSurface {
    next: u32,
    log: Vec<String>,
}

impl MarkerSurface for RecordingSurface {
    type Handle = (u32, String);

    fn create(&mut self, spec: &MarkerSpec) -> Self::Handle {
        self.next += 1;
        self.log.push(format!("create {}", spec.id));
        (self.next, spec.id.clone())
    }

    fn update(&mut self, handle: &mut Self::Handle, spec: &MarkerSpec) {
        self.log.push(format!("update {} #{}", spec.id, handle.0));
    }

    fn remove(&mut self, handle: Self::Handle) {
        self.log.push(format!("remove {} #{}", handle.1, handle.0));
    }
}

fn asset_at(id: &str, lat: f64, lng: f64, speed: f64) -> Asset {
    Asset {
        id: id.into(),
        name: id.into(),
        kind: AssetType::Truck,
        status: AssetStatus::Active,
        current_location: Some(Location {
            latitude: lat,
            longitude: lng,
            address: "x".into(),
            timestamp: 0,
            speed,
            heading: 0.0,
            accuracy: 1.0,
        }),
        last_update: 0,
        driver: None,
        route: None,
        created_at: 0,
    }
}

// =============================================================
// Style
// =============================================================

#[test]
fn colors_by_status_and_motion() {
    assert_eq!(marker_color(AssetStatus::Maintenance, 50.0), "#EF4444");
    assert_eq!(marker_color(AssetStatus::Inactive, 50.0), "#6B7280");
    assert_eq!(marker_color(AssetStatus::Active, 0.1), "#10B981");
    assert_eq!(marker_color(AssetStatus::Active, 0.0), "#F59E0B");
}

#[test]
fn spec_carries_style_flags() {
    let asset = asset_at("T-1", 1.0, 100.0, 12.0);
    let spec = MarkerSpec::for_asset(&asset, Some("T-1")).unwrap();
    assert_eq!(spec.style.icon, "🚛");
    assert!(spec.style.moving);
    assert!(spec.style.active);
    assert!(spec.style.selected);
    assert!(!MarkerSpec::for_asset(&asset, Some("other")).unwrap().style.selected);
}

#[test]
fn asset_without_location_has_no_spec() {
    let mut asset = asset_at("T-1", 1.0, 100.0, 0.0);
    asset.current_location = None;
    assert_eq!(MarkerSpec::for_asset(&asset, None), None);
}

#[test]
fn seed_fleet_has_one_spec_per_asset() {
    let assets = seed::assets(NOW);
    assert_eq!(marker_specs(&assets, None).len(), assets.len());
}

// =============================================================
// Projection
// =============================================================

#[test]
fn projection_corners() {
    let nw = MAP_BOUNDS.project(Coordinates { latitude: 20.0, longitude: 95.0 });
    assert_eq!((nw.x_pct, nw.y_pct), (0.0, 0.0));
    let se = MAP_BOUNDS.project(Coordinates { latitude: -10.0, longitude: 130.0 });
    assert_eq!((se.x_pct, se.y_pct), (100.0, 100.0));
}

#[test]
fn projection_pins_out_of_bounds_points() {
    let hanoi = Coordinates { latitude: 21.0278, longitude: 105.8342 };
    assert!(!MAP_BOUNDS.contains(hanoi));
    let p = MAP_BOUNDS.project(hanoi);
    assert!((p.y_pct - 0.0).abs() < f64::EPSILON);
    assert!(p.x_pct > 0.0 && p.x_pct < 100.0);
}

#[test]
fn map_center_is_inside_bounds() {
    assert!(MAP_BOUNDS.contains(MAP_CENTER));
}

#[test]
fn geofence_ring_is_closed_around_center() {
    let fence = &seed::geofences()[0];
    let ring = geofence_ring(fence, 16);
    assert_eq!(ring.len(), 17);
    let first = ring[0];
    let last = ring[16];
    assert!((first.latitude - last.latitude).abs() < 1e-9);
    assert!((first.longitude - last.longitude).abs() < 1e-9);
    for p in &ring {
        let d = crate::simulate::haversine_m(fence.center, *p);
        assert!((d - fence.radius).abs() < fence.radius * 0.05, "vertex {d}m from center");
    }
}

// =============================================================
// Reconciliation
// =============================================================

#[test]
fn first_pass_creates_everything() {
    let mut surface = RecordingSurface::default();
    let mut registry = MarkerRegistry::new();
    let assets = vec![asset_at("A", 1.0, 100.0, 0.0), asset_at("B", 2.0, 101.0, 0.0)];
    let report = registry.reconcile(&marker_specs(&assets, None), &mut surface);
    assert_eq!(report.created, vec!["A", "B"]);
    assert!(report.updated.is_empty() && report.removed.is_empty());
    assert_eq!(registry.len(), 2);
}

#[test]
fn moved_asset_updates_without_recreate() {
    let mut surface = RecordingSurface::default();
    let mut registry = MarkerRegistry::new();
    let mut assets = vec![asset_at("A", 1.0, 100.0, 30.0)];
    registry.reconcile(&marker_specs(&assets, None), &mut surface);
    let handle_before = registry.get("A").cloned();

    assets[0].current_location.as_mut().unwrap().latitude = 1.5;
    let report = registry.reconcile(&marker_specs(&assets, None), &mut surface);

    assert_eq!(report.updated, vec!["A"]);
    assert!(report.created.is_empty());
    assert_eq!(registry.get("A").cloned(), handle_before);
    assert_eq!(surface.log, vec!["create A", "update A #1"]);
}

#[test]
fn stale_ids_are_removed_before_upserts() {
    let mut surface = RecordingSurface::default();
    let mut registry = MarkerRegistry::new();
    let first = vec![asset_at("A", 1.0, 100.0, 0.0), asset_at("B", 1.0, 100.0, 0.0)];
    registry.reconcile(&marker_specs(&first, None), &mut surface);

    let second = vec![asset_at("B", 1.0, 100.0, 0.0), asset_at("C", 1.0, 100.0, 0.0)];
    let report = registry.reconcile(&marker_specs(&second, None), &mut surface);
    assert_eq!(report.removed, vec!["A"]);
    assert_eq!(report.updated, vec!["B"]);
    assert_eq!(report.created, vec!["C"]);
    assert_eq!(registry.ids(), vec!["B", "C"]);
    assert_eq!(&surface.log[2..], ["remove A #1", "update B #2", "create C"]);
}

#[test]
fn losing_location_removes_marker() {
    let mut surface = RecordingSurface::default();
    let mut registry = MarkerRegistry::new();
    let mut assets = vec![asset_at("A", 1.0, 100.0, 0.0)];
    registry.reconcile(&marker_specs(&assets, None), &mut surface);
    assets[0].current_location = None;
    let report = registry.reconcile(&marker_specs(&assets, None), &mut surface);
    assert_eq!(report.removed, vec!["A"]);
    assert!(registry.is_empty());
}

#[test]
fn unchanged_list_only_updates() {
    let mut surface = RecordingSurface::default();
    let mut registry = MarkerRegistry::new();
    let assets = seed::assets(NOW);
    let specs = marker_specs(&assets, None);
    registry.reconcile(&specs, &mut surface);
    let report = registry.reconcile(&specs, &mut surface);
    assert_eq!(report.updated.len(), assets.len());
    assert!(report.created.is_empty() && report.removed.is_empty());
}

#[test]
fn clear_removes_all_handles() {
    let mut surface = RecordingSurface::default();
    let mut registry = MarkerRegistry::new();
    registry.reconcile(&marker_specs(&[asset_at("A", 0.0, 100.0, 0.0)], None), &mut surface);
    registry.clear(&mut surface);
    assert!(registry.is_empty());
    assert_eq!(surface.log.last().map(String::as_str), Some("remove A #1"));
}
