use super::*;
use crate::asset::{AssetType, GeofenceKind, Location};
use crate::seed::{self, MINUTE_MS};

const NOW: i64 = 1_750_000_000_000;

fn fence(lat: f64, lng: f64, radius: f64) -> Geofence {
    Geofence {
        id: "geofence-x".into(),
        name: "Test Yard".into(),
        kind: GeofenceKind::Depot,
        center: Coordinates { latitude: lat, longitude: lng },
        radius,
        country: "Nowhere".into(),
    }
}

fn mover(lat: f64, lng: f64, speed: f64, heading: f64) -> Asset {
    Asset {
        id: "M-1".into(),
        name: "Mover".into(),
        kind: AssetType::Truck,
        status: AssetStatus::Active,
        current_location: Some(Location {
            latitude: lat,
            longitude: lng,
            address: "start".into(),
            timestamp: 0,
            speed,
            heading,
            accuracy: 5.0,
        }),
        last_update: 0,
        driver: None,
        route: None,
        created_at: 0,
    }
}

// =============================================================
// Geometry
// =============================================================

#[test]
fn haversine_one_degree_of_latitude() {
    let d = haversine_m(Coordinates { latitude: 0.0, longitude: 100.0 }, Coordinates { latitude: 1.0, longitude: 100.0 });
    assert!((d - 111_195.0).abs() < 100.0, "{d}");
}

#[test]
fn haversine_is_symmetric_and_zero_on_self() {
    let a = Coordinates { latitude: 1.29, longitude: 103.85 };
    let b = Coordinates { latitude: 3.139, longitude: 101.6869 };
    assert!((haversine_m(a, b) - haversine_m(b, a)).abs() < 1e-6);
    assert!(haversine_m(a, a).abs() < 1e-9);
}

#[test]
fn advance_north_moves_latitude_only() {
    let from = Coordinates { latitude: 0.0, longitude: 100.0 };
    let to = advance(from, 0.0, 1000.0);
    assert!(to.latitude > 0.0);
    assert!((to.longitude - 100.0).abs() < 1e-9);
    assert!((haversine_m(from, to) - 1000.0).abs() < 10.0);
}

#[test]
fn advance_wraps_longitude() {
    let to = advance(Coordinates { latitude: 0.0, longitude: 179.999 }, 90.0, 1000.0);
    assert!(to.longitude < -179.0);
}

// =============================================================
// Tick
// =============================================================

#[test]
fn stopped_and_inactive_assets_do_not_move() {
    let mut assets = seed::assets(NOW);
    let before = assets.clone();
    tick(&mut assets, &seed::geofences(), 5 * MINUTE_MS, NOW + 5 * MINUTE_MS);
    for (a, b) in assets.iter().zip(&before) {
        assert_eq!(a.id, b.id);
        let moving = b.status == AssetStatus::Active && b.speed() > 0.0;
        assert_eq!(a.current_location != b.current_location, moving, "{}", a.id);
    }
}

#[test]
fn tick_stamps_moved_assets() {
    let mut assets = vec![mover(0.0, 100.0, 60.0, 90.0)];
    tick(&mut assets, &[], 60_000, NOW);
    let loc = assets[0].current_location.as_ref().unwrap();
    assert_eq!(loc.timestamp, NOW);
    assert_eq!(assets[0].last_update, NOW);
    let travelled = haversine_m(Coordinates { latitude: 0.0, longitude: 100.0 }, loc.coordinates());
    assert!((travelled - 1000.0).abs() < 10.0, "{travelled}");
}

#[test]
fn leaving_a_geofence_emits_exit() {
    let mut assets = seed::assets(NOW);
    let events = tick(&mut assets, &seed::geofences(), 5 * MINUTE_MS, NOW);
    let jakarta: Vec<&Event> = events.iter().filter(|e| e.asset_id == "TRUCK-ID-004").collect();
    assert_eq!(jakarta.len(), 1);
    assert_eq!(jakarta[0].kind, EventKind::GeofenceExit);
    assert_eq!(jakarta[0].description, "Exited geofence: Jakarta Distribution Hub");
    assert_eq!(jakarta[0].data.as_ref().unwrap()["geofence_id"], "geofence-006");
}

#[test]
fn entering_a_geofence_emits_entry() {
    // 1.5 km south of a 1 km fence, heading north at 60 km/h for 1 minute.
    let yard = fence(0.0, 100.0, 1000.0);
    let start = advance(yard.center, 180.0, 1500.0);
    let mut assets = vec![mover(start.latitude, start.longitude, 60.0, 0.0)];
    let events = tick(&mut assets, std::slice::from_ref(&yard), 60_000, NOW);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, EventKind::GeofenceEntry);
    assert_eq!(events[0].description, "Entered geofence: Test Yard");
}

#[test]
fn staying_inside_emits_nothing() {
    let yard = fence(0.0, 100.0, 5000.0);
    let mut assets = vec![mover(0.0, 100.0, 10.0, 0.0)];
    assert!(tick(&mut assets, &[yard], 60_000, NOW).is_empty());
}

#[test]
fn non_positive_elapsed_is_noop() {
    let mut assets = vec![mover(0.0, 100.0, 60.0, 0.0)];
    let before = assets.clone();
    assert!(tick(&mut assets, &[], 0, NOW).is_empty());
    assert_eq!(assets, before);
}
