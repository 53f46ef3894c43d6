use super::*;
use fleet::pipeline::SortDirection;
use fleet::seed;

const NOW: i64 = 1_750_000_000_000;

#[test]
fn header_label_marks_active_field() {
    let sort = SortState { field: SortField::Speed, direction: SortDirection::Desc };
    assert_eq!(header_label(SortField::Speed, sort), "Speed ↓");
    assert_eq!(header_label(SortField::Name, sort), "Name");
}

#[test]
fn table_page_copies_view() {
    let assets = seed::assets(NOW);
    let query = AssetQuery { page: 1, ..AssetQuery::default() };
    let page = TablePage::from_view(&query.run(&assets));
    assert_eq!(page.rows.len(), 15);
    assert_eq!((page.page, page.total_pages), (1, 1));
    assert_eq!(page.summary(), "Showing 1–15 of 15 assets");
}

#[test]
fn empty_page_summary() {
    let assets = seed::assets(NOW);
    let mut query = AssetQuery::default();
    query.filter.search = "atlantis".into();
    let page = TablePage::from_view(&query.run(&assets));
    assert!(page.rows.is_empty());
    assert_eq!(page.summary(), "No assets match the current filters");
}

#[test]
fn speed_label_formats_one_decimal() {
    let assets = seed::assets(NOW);
    assert_eq!(speed_label(&assets[0]), "45.5 km/h");
    let mut lost = assets[0].clone();
    lost.current_location = None;
    assert_eq!(speed_label(&lost), "-");
}
