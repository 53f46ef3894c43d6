use super::*;

#[test]
fn widget_attr_parses_known_ids() {
    assert_eq!(parse_widget_attr(Some("map")), Some(WidgetId::Map));
    assert_eq!(parse_widget_attr(Some(" links ")), Some(WidgetId::Links));
}

#[test]
fn widget_attr_rejects_unknown_or_missing() {
    assert_eq!(parse_widget_attr(Some("chart")), None);
    assert_eq!(parse_widget_attr(None), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn dom_hit_tester_finds_nothing_off_browser() {
    assert_eq!(DomHitTester.widget_at(Point::new(10.0, 10.0)), None);
}
