use super::*;

#[test]
fn choice_value_uses_wire_names() {
    assert_eq!(choice_value(Choice::All, AssetStatus::as_str), "all");
    assert_eq!(choice_value(Choice::Only(AssetStatus::Maintenance), AssetStatus::as_str), "maintenance");
    assert_eq!(choice_value(Choice::Only(AssetType::Ship), AssetType::as_str), "ship");
}

#[test]
fn parse_choice_falls_back_to_all() {
    assert_eq!(parse_choice("truck", AssetType::from_name), Choice::Only(AssetType::Truck));
    assert_eq!(parse_choice("all", AssetType::from_name), Choice::All);
    assert_eq!(parse_choice("hovercraft", AssetType::from_name), Choice::All);
}
