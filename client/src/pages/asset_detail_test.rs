use super::*;

const NOW: i64 = 1_750_000_000_000;

#[test]
fn compass_points_wrap() {
    assert_eq!(compass_point(0.0), "N");
    assert_eq!(compass_point(44.0), "NE");
    assert_eq!(compass_point(180.0), "S");
    assert_eq!(compass_point(350.0), "N");
    assert_eq!(compass_point(-90.0), "W");
}

#[test]
fn progress_is_clamped() {
    assert_eq!(progress_percent(15.0), 15);
    assert_eq!(progress_percent(66.6), 67);
    assert_eq!(progress_percent(140.0), 100);
    assert_eq!(progress_percent(-3.0), 0);
}

#[test]
fn trail_distance_sums_segments() {
    let history = seed::location_history("TRUCK-SG-001", NOW).unwrap();
    let km = trail_distance_km(&history);
    assert!(km > 1.0 && km < 100.0, "{km}");
}

#[test]
fn single_point_trail_has_no_distance() {
    let mut history = seed::location_history("TRUCK-SG-001", NOW).unwrap();
    history.locations.truncate(1);
    assert!(trail_distance_km(&history).abs() < f64::EPSILON);
}
