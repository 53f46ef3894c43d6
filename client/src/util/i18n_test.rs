use super::*;

#[test]
fn every_text_is_translated() {
    for text in Text::ALL {
        assert!(!t(Locale::En, text).is_empty());
        assert!(!t(Locale::Ms, text).is_empty());
    }
}

#[test]
fn navigation_labels_differ_by_locale() {
    assert_eq!(t(Locale::En, Text::Assets), "Assets");
    assert_eq!(t(Locale::Ms, Text::Assets), "Aset");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn locale_defaults_to_english_and_toggles() {
    assert_eq!(read_preference(), Locale::En);
    assert_eq!(toggle(Locale::En), Locale::Ms);
}
