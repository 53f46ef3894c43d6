use super::*;
use fleet::pipeline::Choice;
use fleet::asset::AssetType;
use fleet::seed;

const NOW: i64 = 1_750_000_000_000;

#[test]
fn status_counts_cover_sample_fleet() {
    let counts = status_counts(&seed::assets(NOW));
    assert_eq!(
        counts,
        vec![(AssetStatus::Active, 13), (AssetStatus::Inactive, 1), (AssetStatus::Maintenance, 1)]
    );
}

#[test]
fn jakarta_truck_query() {
    let assets = seed::assets(NOW);
    let mut query = AssetQuery { page: 1, ..AssetQuery::default() };
    query.filter.status = Choice::Only(AssetStatus::Active);
    query.filter.kind = Choice::Only(AssetType::Truck);
    query.filter.search = "jakarta".into();
    let view = query.run(&assets);
    let ids: Vec<&str> = view.rows.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["TRUCK-ID-004"]);
}
