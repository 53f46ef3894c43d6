//! Synthetic Southeast Asia fleet.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard has no ingestion backend. Every asset, geofence, event,
//! location trail, and speed chart is generated here from fixed tables and a
//! caller-supplied clock, so a page load always shows a fleet that reported
//! "minutes ago".
//!
//! DESIGN
//! ======
//! Timestamps are offsets from `now` (epoch milliseconds). Jitter comes from
//! `StdRng` seeded with an FNV-1a hash of the asset id, so the same asset
//! always produces the same trail and chart and the browser build never needs
//! an entropy source.

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

use crate::asset::{
    Asset, AssetStatus, AssetType, Coordinates, Driver, Event, EventKind, Geofence, GeofenceKind, Location,
    LocationHistory, Route, SpeedSample, Timestamp,
};

pub const MINUTE_MS: i64 = 60 * 1000;
pub const HOUR_MS: i64 = 60 * MINUTE_MS;
/// Spacing of location trail points and speed chart samples.
pub const SAMPLE_INTERVAL_MS: i64 = 30 * MINUTE_MS;
/// Speed chart points: 24 hours at `SAMPLE_INTERVAL_MS`, both ends included.
pub const SPEED_SERIES_LEN: usize = 49;

// =============================================================================
// PLACES
// =============================================================================

#[derive(Debug, Clone, Copy)]
struct Place {
    lat: f64,
    lng: f64,
    address: &'static str,
}

const fn place(lat: f64, lng: f64, address: &'static str) -> Place {
    Place { lat, lng, address }
}

const SINGAPORE_CBD: Place = place(1.2900, 103.8500, "Central Business District, Singapore");
const CHANGI_AIRPORT: Place = place(1.3644, 103.9944, "Changi Airport, Singapore");
const JURONG_PORT: Place = place(1.3167, 103.7167, "Jurong Port, Singapore");
const TUAS_PORT: Place = place(1.2833, 103.6333, "Tuas Port, Singapore");
const KUALA_LUMPUR: Place = place(3.1390, 101.6869, "Kuala Lumpur, Malaysia");
const PORT_KLANG: Place = place(3.0000, 101.3833, "Port Klang, Malaysia");
const PENANG: Place = place(5.4164, 100.3297, "Penang, Malaysia");
const BANGKOK: Place = place(13.7563, 100.5018, "Bangkok, Thailand");
const LAEM_CHABANG: Place = place(13.0833, 100.8833, "Laem Chabang Port, Thailand");
const RAYONG: Place = place(12.6814, 101.2569, "Rayong, Thailand");
const CHIANG_MAI: Place = place(18.7883, 98.9853, "Chiang Mai, Thailand");
const JAKARTA: Place = place(-6.2088, 106.8451, "Jakarta, Indonesia");
const SURABAYA: Place = place(-7.2575, 112.7521, "Surabaya, Indonesia");
const MANILA: Place = place(14.5995, 120.9842, "Manila, Philippines");
const CEBU: Place = place(10.3157, 123.8854, "Cebu, Philippines");
const HO_CHI_MINH: Place = place(10.8231, 106.6297, "Ho Chi Minh City, Vietnam");
const HANOI: Place = place(21.0278, 105.8342, "Hanoi, Vietnam");

// =============================================================================
// ASSETS
// =============================================================================

struct AssetSeed {
    id: &'static str,
    name: &'static str,
    kind: AssetType,
    status: AssetStatus,
    at: Place,
    minutes_ago: i64,
    speed: f64,
    heading: f64,
    accuracy: f64,
    driver: Option<(&'static str, &'static str)>,
    route: Option<(&'static str, &'static str, f64)>,
    created_hours_ago: i64,
}

#[rustfmt::skip]
const ASSETS: [AssetSeed; 15] = [
    AssetSeed { id: "TRUCK-SG-001", name: "Singapore Express Delivery", kind: AssetType::Truck, status: AssetStatus::Active, at: CHANGI_AIRPORT, minutes_ago: 2, speed: 45.5, heading: 180.0, accuracy: 5.0, driver: Some(("Ahmad bin Hassan", "+65 9123 4567")), route: Some(("Singapore Warehouse", "Kuala Lumpur Distribution Center", 35.5)), created_hours_ago: 720 },
    AssetSeed { id: "VAN-MY-002", name: "KL Express Van", kind: AssetType::Van, status: AssetStatus::Active, at: KUALA_LUMPUR, minutes_ago: 5, speed: 60.0, heading: 90.0, accuracy: 8.0, driver: Some(("Siti Nurhaliza", "+60 12-345 6789")), route: None, created_hours_ago: 480 },
    AssetSeed { id: "MOTO-TH-003", name: "Bangkok Courier", kind: AssetType::Motorcycle, status: AssetStatus::Active, at: BANGKOK, minutes_ago: 1, speed: 35.0, heading: 270.0, accuracy: 10.0, driver: Some(("Somchai Jaidee", "+66 81 234 5678")), route: None, created_hours_ago: 360 },
    AssetSeed { id: "TRUCK-ID-004", name: "Jakarta Freight", kind: AssetType::Truck, status: AssetStatus::Active, at: JAKARTA, minutes_ago: 8, speed: 25.0, heading: 45.0, accuracy: 12.0, driver: Some(("Budi Santoso", "+62 812 3456 7890")), route: Some(("Jakarta Distribution Hub", "Bandung", 15.0)), created_hours_ago: 600 },
    AssetSeed { id: "VAN-PH-005", name: "Manila Delivery", kind: AssetType::Van, status: AssetStatus::Active, at: MANILA, minutes_ago: 3, speed: 40.0, heading: 180.0, accuracy: 6.0, driver: Some(("Juan dela Cruz", "+63 917 123 4567")), route: None, created_hours_ago: 240 },
    AssetSeed { id: "TRUCK-VN-006", name: "Ho Chi Minh Transport", kind: AssetType::Truck, status: AssetStatus::Active, at: HO_CHI_MINH, minutes_ago: 4, speed: 55.0, heading: 0.0, accuracy: 7.0, driver: Some(("Nguyen Van Minh", "+84 90 123 4567")), route: Some(("Ho Chi Minh City", "Vung Tau", 45.0)), created_hours_ago: 480 },
    AssetSeed { id: "MOTO-SG-007", name: "Singapore Last Mile", kind: AssetType::Motorcycle, status: AssetStatus::Active, at: SINGAPORE_CBD, minutes_ago: 1, speed: 28.0, heading: 120.0, accuracy: 4.0, driver: Some(("Tan Wei Ming", "+65 8234 5678")), route: None, created_hours_ago: 120 },
    AssetSeed { id: "VAN-MY-008", name: "Penang Express", kind: AssetType::Van, status: AssetStatus::Active, at: PENANG, minutes_ago: 15, speed: 0.0, heading: 90.0, accuracy: 5.0, driver: Some(("Lee Chong Wei", "+60 16-789 0123")), route: None, created_hours_ago: 360 },
    AssetSeed { id: "TRUCK-TH-009", name: "Rayong Logistics", kind: AssetType::Truck, status: AssetStatus::Active, at: RAYONG, minutes_ago: 6, speed: 70.0, heading: 225.0, accuracy: 8.0, driver: Some(("Prasert Chai", "+66 89 012 3456")), route: Some(("Rayong", "Bangkok Warehouse", 60.0)), created_hours_ago: 400 },
    AssetSeed { id: "VAN-ID-010", name: "Surabaya Delivery", kind: AssetType::Van, status: AssetStatus::Active, at: SURABAYA, minutes_ago: 10, speed: 45.0, heading: 315.0, accuracy: 10.0, driver: Some(("Dewi Lestari", "+62 856 7890 1234")), route: None, created_hours_ago: 500 },
    AssetSeed { id: "MOTO-PH-011", name: "Cebu Courier", kind: AssetType::Motorcycle, status: AssetStatus::Active, at: CEBU, minutes_ago: 2, speed: 32.0, heading: 60.0, accuracy: 6.0, driver: Some(("Pedro Santos", "+63 927 890 1234")), route: None, created_hours_ago: 180 },
    AssetSeed { id: "TRUCK-VN-012", name: "Hanoi Freight", kind: AssetType::Truck, status: AssetStatus::Active, at: HANOI, minutes_ago: 7, speed: 50.0, heading: 135.0, accuracy: 9.0, driver: Some(("Tran Van Duc", "+84 91 234 5678")), route: Some(("Hanoi", "Hai Phong Port", 30.0)), created_hours_ago: 550 },
    AssetSeed { id: "VAN-SG-013", name: "Tuas Port Van", kind: AssetType::Van, status: AssetStatus::Inactive, at: TUAS_PORT, minutes_ago: 120, speed: 0.0, heading: 0.0, accuracy: 5.0, driver: None, route: None, created_hours_ago: 600 },
    AssetSeed { id: "TRUCK-MY-014", name: "Port Klang Transport", kind: AssetType::Truck, status: AssetStatus::Active, at: PORT_KLANG, minutes_ago: 12, speed: 30.0, heading: 270.0, accuracy: 8.0, driver: Some(("Razak Abdullah", "+60 19-456 7890")), route: Some(("Port Klang", "Kuala Lumpur", 25.0)), created_hours_ago: 450 },
    AssetSeed { id: "MOTO-TH-015", name: "Chiang Mai Courier", kind: AssetType::Motorcycle, status: AssetStatus::Maintenance, at: CHIANG_MAI, minutes_ago: 240, speed: 0.0, heading: 0.0, accuracy: 5.0, driver: Some(("Niran Srikam", "+66 85 678 9012")), route: None, created_hours_ago: 300 },
];

impl AssetSeed {
    fn build(&self, now: Timestamp) -> Asset {
        let reported = now - self.minutes_ago * MINUTE_MS;
        Asset {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            kind: self.kind,
            status: self.status,
            current_location: Some(Location {
                latitude: self.at.lat,
                longitude: self.at.lng,
                address: self.at.address.to_owned(),
                timestamp: reported,
                speed: self.speed,
                heading: self.heading,
                accuracy: self.accuracy,
            }),
            last_update: reported,
            driver: self.driver.map(|(name, phone)| Driver { name: name.to_owned(), phone: phone.to_owned() }),
            route: self.route.map(|(origin, destination, progress)| Route {
                origin: origin.to_owned(),
                destination: destination.to_owned(),
                progress,
            }),
            created_at: now - self.created_hours_ago * HOUR_MS,
        }
    }
}

/// The 15-asset sample fleet as of `now`.
#[must_use]
pub fn assets(now: Timestamp) -> Vec<Asset> {
    ASSETS.iter().map(|s| s.build(now)).collect()
}

// =============================================================================
// GEOFENCES
// =============================================================================

#[must_use]
pub fn geofences() -> Vec<Geofence> {
    let fence = |n: u8, name: &str, kind: GeofenceKind, at: Place, radius: f64, country: &str| Geofence {
        id: format!("geofence-{n:03}"),
        name: name.to_owned(),
        kind,
        center: Coordinates { latitude: at.lat, longitude: at.lng },
        radius,
        country: country.to_owned(),
    };
    vec![
        fence(1, "Singapore Warehouse", GeofenceKind::Warehouse, JURONG_PORT, 500.0, "Singapore"),
        fence(2, "Port Klang", GeofenceKind::Port, PORT_KLANG, 2000.0, "Malaysia"),
        fence(3, "KL Distribution Center", GeofenceKind::Hub, KUALA_LUMPUR, 800.0, "Malaysia"),
        fence(4, "Bangkok Warehouse", GeofenceKind::Warehouse, BANGKOK, 600.0, "Thailand"),
        fence(5, "Laem Chabang Port", GeofenceKind::Port, LAEM_CHABANG, 2500.0, "Thailand"),
        fence(6, "Jakarta Distribution Hub", GeofenceKind::Hub, JAKARTA, 700.0, "Indonesia"),
        fence(7, "Manila Port", GeofenceKind::Port, MANILA, 1500.0, "Philippines"),
        fence(8, "Ho Chi Minh Depot", GeofenceKind::Depot, HO_CHI_MINH, 600.0, "Vietnam"),
    ]
}

// =============================================================================
// EVENTS
// =============================================================================

/// Five historical events for one asset, newest first.
#[must_use]
pub fn events_for(asset: &Asset, now: Timestamp) -> Vec<Event> {
    let event = |n: u8, kind: EventKind, minutes_ago: i64, description: String, data: Option<serde_json::Value>| Event {
        id: format!("{}-evt-{n:03}", asset.id),
        asset_id: asset.id.clone(),
        kind,
        timestamp: now - minutes_ago * MINUTE_MS,
        description,
        data,
    };
    let warehouse = json!({ "geofence_id": "geofence-001", "geofence_name": "Singapore Warehouse" });
    vec![
        event(1, EventKind::LocationUpdate, 2, format!("Location updated for {}", asset.name), None),
        event(
            2,
            EventKind::SpeedChange,
            15,
            "Speed changed from 45 km/h to 60 km/h".to_owned(),
            Some(json!({ "previous_speed": 45, "new_speed": 60 })),
        ),
        event(3, EventKind::GeofenceExit, 30, "Exited geofence: Singapore Warehouse".to_owned(), Some(warehouse.clone())),
        event(
            4,
            EventKind::StatusChange,
            60,
            "Status changed to Active".to_owned(),
            Some(json!({ "previous_status": "idle", "new_status": "active" })),
        ),
        event(5, EventKind::GeofenceEntry, 120, "Entered geofence: Singapore Warehouse".to_owned(), Some(warehouse)),
    ]
}

/// Events for every asset, grouped by asset in list order.
#[must_use]
pub fn events(assets: &[Asset], now: Timestamp) -> Vec<Event> {
    assets.iter().flat_map(|a| events_for(a, now)).collect()
}

// =============================================================================
// LOCATION HISTORY
// =============================================================================

type Waypoint = (f64, f64, &'static str);

const TRAILS: [(&str, usize, &[Waypoint]); 8] = [
    ("TRUCK-SG-001", 4, &[
        (1.2900, 103.8500, "Central Business District, Singapore"),
        (1.2950, 103.8700, "Marina Bay, Singapore"),
        (1.3050, 103.9100, "East Coast Park, Singapore"),
        (1.3200, 103.9400, "Bedok, Singapore"),
        (1.3400, 103.9650, "Tampines, Singapore"),
        (1.3644, 103.9944, "Changi Airport, Singapore"),
    ]),
    ("VAN-MY-002", 4, &[
        (3.0000, 101.3833, "Port Klang, Malaysia"),
        (3.0200, 101.4500, "Klang, Malaysia"),
        (3.0500, 101.5200, "Shah Alam, Malaysia"),
        (3.0800, 101.5800, "Petaling Jaya, Malaysia"),
        (3.1390, 101.6869, "Kuala Lumpur, Malaysia"),
    ]),
    ("MOTO-TH-003", 3, &[
        (13.7280, 100.5200, "Silom, Bangkok"),
        (13.7400, 100.5100, "Siam, Bangkok"),
        (13.7500, 100.5000, "Ratchathewi, Bangkok"),
        (13.7563, 100.5018, "Victory Monument, Bangkok"),
    ]),
    ("TRUCK-ID-004", 5, &[
        (-6.2088, 106.8451, "Jakarta, Indonesia"),
        (-6.3000, 106.9000, "Bekasi, Indonesia"),
        (-6.4000, 107.1000, "Karawang, Indonesia"),
        (-6.5500, 107.3500, "Purwakarta, Indonesia"),
        (-6.7000, 107.5000, "Padalarang, Indonesia"),
        (-6.9175, 107.6191, "Bandung, Indonesia"),
    ]),
    ("TRUCK-VN-006", 4, &[
        (10.8231, 106.6297, "Ho Chi Minh City, Vietnam"),
        (10.7500, 106.7000, "Thu Duc, Vietnam"),
        (10.6500, 106.8500, "Bien Hoa, Vietnam"),
        (10.5000, 107.0000, "Long Thanh, Vietnam"),
        (10.4000, 107.1000, "Ba Ria, Vietnam"),
        (10.3460, 107.0843, "Vung Tau, Vietnam"),
    ]),
    ("TRUCK-TH-009", 3, &[
        (12.6814, 101.2569, "Rayong, Thailand"),
        (12.9000, 101.1500, "Ban Chang, Thailand"),
        (13.1200, 100.9200, "Si Racha, Thailand"),
        (13.3500, 100.9800, "Chonburi, Thailand"),
        (13.5000, 100.8500, "Bang Pakong, Thailand"),
        (13.6500, 100.6500, "Samut Prakan, Thailand"),
        (13.7563, 100.5018, "Bangkok, Thailand"),
    ]),
    ("TRUCK-VN-012", 3, &[
        (21.0278, 105.8342, "Hanoi, Vietnam"),
        (20.9500, 106.0500, "Gia Lam, Vietnam"),
        (20.9000, 106.3000, "Hai Duong, Vietnam"),
        (20.8561, 106.6822, "Hai Phong, Vietnam"),
    ]),
    ("TRUCK-MY-014", 3, &[
        (3.0000, 101.3833, "Port Klang, Malaysia"),
        (3.0300, 101.4800, "Klang Town, Malaysia"),
        (3.0700, 101.5500, "Subang, Malaysia"),
        (3.1390, 101.6869, "Kuala Lumpur, Malaysia"),
    ]),
];

/// FNV-1a over the id bytes.
fn seed_for(id: &str, salt: u64) -> u64 {
    id.bytes().fold(0xcbf2_9ce4_8422_2325 ^ salt, |h, b| (h ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3))
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Ids that have a recorded trail.
#[must_use]
pub fn trail_ids() -> Vec<&'static str> {
    TRAILS.iter().map(|(id, _, _)| *id).collect()
}

/// GPS trail for `asset_id`, oldest first, or `None` for assets without one.
///
/// Points are interpolated along road waypoints every `SAMPLE_INTERVAL_MS`,
/// ending one interval before `now`. The first and last points are stopped,
/// the outer 15% run at urban speed and the rest at highway speed.
#[must_use]
pub fn location_history(asset_id: &str, now: Timestamp) -> Option<LocationHistory> {
    let (_, per_segment, waypoints) = TRAILS.iter().find(|(id, _, _)| *id == asset_id)?;
    let per_segment = *per_segment;
    let segments = waypoints.len().saturating_sub(1);
    let total = segments * per_segment + 1;
    let mut rng = StdRng::seed_from_u64(seed_for(asset_id, 0));
    let mut locations = Vec::with_capacity(total);

    for (seg, pair) in waypoints.windows(2).enumerate() {
        let (start, end) = (pair[0], pair[1]);
        let points = if seg + 1 == segments { per_segment + 1 } else { per_segment };
        let heading = (end.1 - start.1).atan2(end.0 - start.0).to_degrees().rem_euclid(360.0);

        for i in 0..points {
            let index = locations.len();
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 / per_segment as f64;
            #[allow(clippy::cast_precision_loss)]
            let overall = index as f64 / (total - 1) as f64;
            let speed = if index == 0 || index == total - 1 {
                0.0
            } else if !(0.15..=0.85).contains(&overall) {
                20.0 + rng.random::<f64>() * 20.0
            } else {
                50.0 + rng.random::<f64>() * 30.0
            };
            let steps_back = i64::try_from(total - index).unwrap_or(0);
            locations.push(Location {
                latitude: start.0 + (end.0 - start.0) * t + (rng.random::<f64>() - 0.5) * 0.005,
                longitude: start.1 + (end.1 - start.1) * t + (rng.random::<f64>() - 0.5) * 0.005,
                address: if i == 0 { start.2.to_owned() } else { format!("En route to {}", end.2) },
                timestamp: now - steps_back * SAMPLE_INTERVAL_MS,
                speed: round1(speed),
                heading,
                accuracy: 5.0 + rng.random::<f64>() * 10.0,
            });
        }
    }
    Some(LocationHistory { asset_id: asset_id.to_owned(), locations })
}

// =============================================================================
// SPEED SERIES
// =============================================================================

/// UTC hour of day for an epoch-millisecond timestamp.
#[must_use]
pub fn hour_of_day(ts: Timestamp) -> i64 {
    ts.div_euclid(HOUR_MS).rem_euclid(24)
}

/// 24 hours of speed samples ending at `now`, oldest first.
///
/// Nights (22:00 to 06:00) are mostly stopped, rush hours (07 to 09 and 17 to
/// 19) are slow and variable, the rest of the day is fast.
#[must_use]
pub fn speed_series(asset_id: &str, now: Timestamp) -> Vec<SpeedSample> {
    let mut rng = StdRng::seed_from_u64(seed_for(asset_id, 0x5eed));
    (0..SPEED_SERIES_LEN)
        .rev()
        .map(|back| {
            let timestamp = now - i64::try_from(back).unwrap_or(0) * SAMPLE_INTERVAL_MS;
            let speed = match hour_of_day(timestamp) {
                22..=23 | 0..=5 => {
                    if rng.random_bool(0.7) {
                        0.0
                    } else {
                        20.0 + rng.random::<f64>() * 20.0
                    }
                }
                7..=9 => 20.0 + rng.random::<f64>() * 40.0,
                17..=19 => 15.0 + rng.random::<f64>() * 35.0,
                _ => 40.0 + rng.random::<f64>() * 40.0,
            };
            SpeedSample { timestamp, speed: round1(speed) }
        })
        .collect()
}
