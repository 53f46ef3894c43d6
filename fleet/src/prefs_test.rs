use super::*;
use crate::layout::Placement;
use crate::layout::WidgetId::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn stored_theme_wins_over_system() {
    assert_eq!(resolve_theme(Some("light"), true), Theme::Light);
    assert_eq!(resolve_theme(Some("dark"), false), Theme::Dark);
}

#[test]
fn unknown_theme_follows_system() {
    assert_eq!(resolve_theme(None, true), Theme::Dark);
    assert_eq!(resolve_theme(Some("solarized"), false), Theme::Light);
}

#[test]
fn theme_toggle_round_trips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    assert!(Theme::Dark.is_dark());
}

// =============================================================
// Locale
// =============================================================

#[test]
fn locale_defaults_to_english() {
    assert_eq!(Locale::from_stored(None), Locale::En);
    assert_eq!(Locale::from_stored(Some("fr")), Locale::En);
    assert_eq!(Locale::from_stored(Some("ms")), Locale::Ms);
    assert_eq!(Locale::Ms.toggled(), Locale::En);
    assert_eq!(Locale::Ms.as_str(), "ms");
}

// =============================================================
// Layout
// =============================================================

#[test]
fn missing_storage_gives_default_layout() {
    assert_eq!(restore_layout(None, None), WidgetLayout::default());
}

#[test]
fn malformed_json_gives_defaults() {
    assert_eq!(restore_layout(Some("[stats"), Some("{")), WidgetLayout::default());
    assert_eq!(restore_layout(Some("{\"a\":1}"), Some("\"map\"")), WidgetLayout::default());
}

#[test]
fn stored_order_is_filtered_deduped_and_completed() {
    let layout = restore_layout(Some(r#"["links","bogus","map","links",7]"#), Some(r#"["map","nope"]"#));
    assert_eq!(layout.order(), &[Links, Map, Stats, Speed, Action, Routes, Snapshot, Events]);
    assert_eq!(layout.expanded(), &[Map]);
}

#[test]
fn empty_stored_order_is_default_order() {
    let layout = restore_layout(Some("[]"), Some("[]"));
    assert_eq!(layout.order(), &WidgetId::DEFAULT_ORDER);
    assert!(layout.expanded().is_empty());
}

#[test]
fn encoded_layout_restores_identically() {
    let mut layout = WidgetLayout::default();
    layout.move_widget(Events, Stats, Placement::Before);
    layout.toggle_expanded(Speed);
    let restored = restore_layout(Some(&encode_ids(layout.order())), Some(&encode_ids(layout.expanded())));
    assert_eq!(restored, layout);
}

#[test]
fn encode_uses_wire_names() {
    assert_eq!(encode_ids(&[Stats, Links]), r#"["stats","links"]"#);
}
