//! Live-movement simulation for the map page.
//!
//! Each tick advances moving active assets along their heading and reports
//! geofence crossings as events. Asset ids and list order never change, so
//! the map's marker reconciliation only ever moves markers during a tick.

#[cfg(test)]
#[path = "simulate_test.rs"]
mod simulate_test;

use serde_json::json;

use crate::asset::{Asset, AssetStatus, Coordinates, Event, EventKind, Geofence, Timestamp};

const EARTH_RADIUS_M: f64 = 6_371_000.0;
/// Meters per degree of latitude.
const METERS_PER_DEGREE: f64 = 111_320.0;

/// Great-circle distance in meters.
#[must_use]
pub fn haversine_m(a: Coordinates, b: Coordinates) -> f64 {
    let (lat1, lat2) = (a.latitude.to_radians(), b.latitude.to_radians());
    let dlat = lat2 - lat1;
    let dlng = (b.longitude - a.longitude).to_radians();
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Whether `at` lies within `fence`'s radius.
#[must_use]
pub fn inside(fence: &Geofence, at: Coordinates) -> bool {
    haversine_m(fence.center, at) <= fence.radius
}

/// Position after travelling `meters` from `from` on `heading_deg`, using a
/// flat-earth step that is accurate for the short hops of one tick.
#[must_use]
pub fn advance(from: Coordinates, heading_deg: f64, meters: f64) -> Coordinates {
    let heading = heading_deg.to_radians();
    let dlat = meters * heading.cos() / METERS_PER_DEGREE;
    let lng_scale = (METERS_PER_DEGREE * from.latitude.to_radians().cos()).max(1.0);
    let dlng = meters * heading.sin() / lng_scale;
    Coordinates {
        latitude: (from.latitude + dlat).clamp(-90.0, 90.0),
        longitude: (from.longitude + dlng + 180.0).rem_euclid(360.0) - 180.0,
    }
}

/// Advances every active, moving asset by `speed × elapsed` and returns the
/// geofence entry / exit events the moves produced.
pub fn tick(assets: &mut [Asset], geofences: &[Geofence], elapsed_ms: i64, now: Timestamp) -> Vec<Event> {
    let mut events = Vec::new();
    if elapsed_ms <= 0 {
        return events;
    }
    #[allow(clippy::cast_precision_loss)]
    let hours = elapsed_ms as f64 / 3_600_000.0;

    for asset in assets.iter_mut().filter(|a| a.status == AssetStatus::Active) {
        let Some(location) = asset.current_location.as_mut() else {
            continue;
        };
        if location.speed <= 0.0 {
            continue;
        }
        let before = location.coordinates();
        let after = advance(before, location.heading, location.speed * 1000.0 * hours);
        location.latitude = after.latitude;
        location.longitude = after.longitude;
        location.timestamp = now;
        asset.last_update = now;

        for fence in geofences {
            let kind = match (inside(fence, before), inside(fence, after)) {
                (false, true) => EventKind::GeofenceEntry,
                (true, false) => EventKind::GeofenceExit,
                _ => continue,
            };
            let verb = if kind == EventKind::GeofenceEntry { "Entered" } else { "Exited" };
            events.push(Event {
                id: format!("{}-{}-{now}", asset.id, fence.id),
                asset_id: asset.id.clone(),
                kind,
                timestamp: now,
                description: format!("{verb} geofence: {}", fence.name),
                data: Some(json!({ "geofence_id": fence.id, "geofence_name": fence.name })),
            });
        }
    }
    events
}
