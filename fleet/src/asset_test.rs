use super::*;

fn sample_asset(speed: Option<f64>) -> Asset {
    Asset {
        id: "VAN-XX-100".into(),
        name: "Test Van".into(),
        kind: AssetType::Van,
        status: AssetStatus::Active,
        current_location: speed.map(|speed| Location {
            latitude: 1.0,
            longitude: 103.0,
            address: "Somewhere".into(),
            timestamp: 1_000,
            speed,
            heading: 90.0,
            accuracy: 5.0,
        }),
        last_update: 1_000,
        driver: None,
        route: None,
        created_at: 0,
    }
}

// =============================================================
// AssetType / AssetStatus
// =============================================================

#[test]
fn asset_type_wire_names_round_trip() {
    for kind in AssetType::ALL {
        assert_eq!(AssetType::from_name(kind.as_str()), Some(kind));
        assert_eq!(kind.to_string().parse::<AssetType>(), Ok(kind));
    }
}

#[test]
fn asset_type_icons_are_distinct() {
    let icons: std::collections::HashSet<_> = AssetType::ALL.iter().map(|t| t.icon()).collect();
    assert_eq!(icons.len(), AssetType::ALL.len());
    assert_eq!(AssetType::Truck.icon(), "🚛");
    assert_eq!(AssetType::Aircraft.icon(), "✈️");
}

#[test]
fn unknown_asset_type_reports_value() {
    let err = "hovercraft".parse::<AssetType>().unwrap_err();
    assert_eq!(err.kind, "asset type");
    assert_eq!(err.value, "hovercraft");
    assert_eq!(err.to_string(), "unknown asset type: \"hovercraft\"");
}

#[test]
fn status_badge_classes() {
    assert_eq!(AssetStatus::Active.badge_class(), "badge-success");
    assert_eq!(AssetStatus::Inactive.badge_class(), "badge-ghost");
    assert_eq!(AssetStatus::Maintenance.badge_class(), "badge-warning");
}

#[test]
fn status_parse_is_case_sensitive() {
    assert_eq!(AssetStatus::from_name("active"), Some(AssetStatus::Active));
    assert_eq!(AssetStatus::from_name("Active"), None);
}

// =============================================================
// Asset
// =============================================================

#[test]
fn speed_defaults_to_zero_without_location() {
    let asset = sample_asset(None);
    assert!((asset.speed() - 0.0).abs() < f64::EPSILON);
    assert!(!asset.is_moving());
    assert_eq!(asset.address(), None);
}

#[test]
fn speed_reads_current_location() {
    let asset = sample_asset(Some(42.5));
    assert!((asset.speed() - 42.5).abs() < f64::EPSILON);
    assert!(asset.is_moving());
    assert_eq!(asset.address(), Some("Somewhere"));
}

#[test]
fn asset_serializes_kind_as_type() {
    let json = serde_json::to_value(sample_asset(None)).unwrap();
    assert_eq!(json["type"], "van");
    assert_eq!(json["status"], "active");
    assert!(json["current_location"].is_null());
}

#[test]
fn asset_deserializes_from_wire_shape() {
    let json = serde_json::json!({
        "id": "SHIP-01",
        "name": "Harbour Ship",
        "type": "ship",
        "status": "maintenance",
        "current_location": null,
        "last_update": 5,
        "driver": {"name": "A", "phone": "1"},
        "route": null,
        "created_at": 1
    });
    let asset: Asset = serde_json::from_value(json).unwrap();
    assert_eq!(asset.kind, AssetType::Ship);
    assert_eq!(asset.status, AssetStatus::Maintenance);
    assert_eq!(asset.driver.unwrap().name, "A");
}

// =============================================================
// EventKind
// =============================================================

#[test]
fn event_kind_snake_case_wire_names() {
    let json = serde_json::to_value(EventKind::GeofenceExit).unwrap();
    assert_eq!(json, "geofence_exit");
    for kind in EventKind::ALL {
        assert_eq!(kind.as_str().parse::<EventKind>(), Ok(kind));
    }
}

#[test]
fn event_kind_icons() {
    assert_eq!(EventKind::GeofenceEntry.icon(), "📍");
    assert_eq!(EventKind::GeofenceExit.icon(), "📤");
    assert_eq!(EventKind::SpeedChange.icon(), "⚡");
    assert_eq!(EventKind::StatusChange.icon(), "🔄");
    assert_eq!(EventKind::LocationUpdate.icon(), "📌");
}

#[test]
fn only_entry_and_exit_are_geofence_events() {
    let geofence: Vec<_> = EventKind::ALL.into_iter().filter(|k| k.is_geofence()).collect();
    assert_eq!(geofence, vec![EventKind::GeofenceEntry, EventKind::GeofenceExit]);
}

#[test]
fn event_data_is_omitted_when_absent() {
    let event = Event {
        id: "e".into(),
        asset_id: "a".into(),
        kind: EventKind::SpeedChange,
        timestamp: 0,
        description: "d".into(),
        data: None,
    };
    let json = serde_json::to_value(&event).unwrap();
    assert!(json.get("data").is_none());
    assert_eq!(json["type"], "speed_change");
}
