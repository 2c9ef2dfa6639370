//! Archive rows through normalization, caching, filtering, and stats.

use std::collections::BTreeSet;
use std::time::Duration;

use exo_archive::ArchiveClient;
use exo_catalog::{CatalogCache, CatalogFilter, Normalizer, fallback, stats};
use exo_config::{ApodConfig, ArchiveConfig, ResultFormat};
use exo_core::{
    Column, DISCOVERY_METHOD_COLUMN, DISCOVERY_YEAR_COLUMN, ExoplanetRecord, HOST_STAR_COLUMN,
    PLANET_NAME_COLUMN, Provenance, RawTable,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PINNED_YEAR: i32 = 2026;

fn table(rows: serde_json::Value) -> RawTable {
    serde_json::from_value(rows).unwrap()
}

/// Render records back into archive-shaped rows.
fn archive_rows(records: &[ExoplanetRecord]) -> RawTable {
    let rows = records
        .iter()
        .map(|r| {
            let mut row = serde_json::Map::new();
            row.insert(PLANET_NAME_COLUMN.into(), json!(r.name));
            row.insert(HOST_STAR_COLUMN.into(), json!(r.host_star));
            row.insert(DISCOVERY_METHOD_COLUMN.into(), json!(r.discovery_method));
            row.insert(DISCOVERY_YEAR_COLUMN.into(), json!(r.discovery_year));
            for column in Column::ALL {
                row.insert(column.archive_name().into(), json!(r.value(column)));
            }
            row
        })
        .collect::<Vec<_>>();
    RawTable::from(rows)
}

fn client_for(server: &MockServer) -> ArchiveClient {
    let archive = ArchiveConfig {
        endpoint: format!("{}/TAP/sync", server.uri()),
        format: ResultFormat::Csv,
        timeout_secs: 1,
        ..Default::default()
    };
    ArchiveClient::new(archive, ApodConfig::default()).unwrap()
}

#[test]
fn kepler_row_normalizes_with_numeric_columns() {
    let records = Normalizer::new().normalize(&table(json!([{
        "pl_name": "Kepler-186f",
        "hostname": "Kepler-186",
        "discoverymethod": "Transit",
        "disc_year": "2014",
        "pl_orbper": 129.9,
        "pl_rade": 1.17,
        "pl_bmasse": 1.44
    }])));

    assert_eq!(records.len(), 1);
    let kepler = &records[0];
    assert_eq!(kepler.discovery_year, 2014);
    assert_eq!(kepler.value(Column::OrbitalPeriodDays), Some(129.9));
    assert_eq!(kepler.value(Column::PlanetRadiusEarth), Some(1.17));
    assert_eq!(kepler.value(Column::PlanetMassEarth), Some(1.44));
    assert_eq!(kepler.value(Column::DistanceParsec), None);
}

#[test]
fn unparseable_year_keeps_row_at_current_year() {
    let records = Normalizer::new()
        .with_current_year(PINNED_YEAR)
        .normalize(&table(json!([
            {"pl_name": "Kepler-186f", "hostname": "Kepler-186", "discoverymethod": "Transit", "disc_year": "2014"},
            {"pl_name": "Kepler-62f", "hostname": "Kepler-62", "discoverymethod": "Transit", "disc_year": "not_a_number"}
        ])));

    let years: Vec<(&str, i32)> = records
        .iter()
        .map(|r| (r.name.as_str(), r.discovery_year))
        .collect();
    assert_eq!(years, vec![("Kepler-186f", 2014), ("Kepler-62f", PINNED_YEAR)]);
}

#[test]
fn normalizing_serialized_records_is_idempotent() {
    let normalizer = Normalizer::new().with_current_year(PINNED_YEAR);
    let once = normalizer.normalize(&table(json!([
        {"pl_name": " Kepler-186f ", "hostname": "Kepler-186", "disc_year": 2014.0, "pl_rade": "1.17", "st_teff": -5},
        {"pl_name": "Kepler-62f", "hostname": "Kepler-62", "discoverymethod": "Transit", "disc_year": null},
        {"pl_name": "", "hostname": "nobody"}
    ])));

    assert_eq!(once.len(), 2);
    let twice = normalizer.normalize(&archive_rows(&once));
    assert_eq!(twice, once);
}

#[test]
fn filter_is_a_conjunction_and_narrowing_never_adds_records() {
    let records = fallback::sample();
    let by_method = CatalogFilter::new().with_methods(["Transit"]);
    let by_name = CatalogFilter::new().with_name("b");
    let by_years = CatalogFilter::new().with_years(2000, 2020);
    let all = CatalogFilter::new()
        .with_methods(["Transit"])
        .with_name("b")
        .with_years(2000, 2020);

    let combined = all.apply(&records);
    let expected: Vec<_> = records
        .iter()
        .filter(|r| by_method.matches(r) && by_name.matches(r) && by_years.matches(r))
        .collect();
    assert_eq!(combined, expected);

    let wider = CatalogFilter::new().with_methods(["Transit"]).with_years(2000, 2020);
    assert!(combined.len() <= wider.apply(&records).len());
    assert!(
        combined
            .iter()
            .all(|r| wider.apply(&records).contains(r))
    );
}

#[rstest]
#[case::method_set_shrinks(
    CatalogFilter::new().with_methods(["Transit", "Radial Velocity"]),
    CatalogFilter::new().with_methods(["Transit"])
)]
#[case::method_set_from_all(CatalogFilter::new(), CatalogFilter::new().with_methods(["Imaging"]))]
#[case::year_range_tightens(
    CatalogFilter::new().with_years(1990, 2020),
    CatalogFilter::new().with_years(2005, 2015)
)]
#[case::year_range_to_one_year(CatalogFilter::new(), CatalogFilter::new().with_years(2016, 2016))]
#[case::substring_grows(CatalogFilter::new().with_name("-1"), CatalogFilter::new().with_name("-18"))]
#[case::one_dimension_of_three(
    CatalogFilter::new().with_methods(["Transit"]).with_name("e").with_years(1995, 2020),
    CatalogFilter::new().with_methods(["Transit"]).with_name("e").with_years(2015, 2020)
)]
fn narrowing_one_parameter_never_adds_records(
    #[case] wide: CatalogFilter,
    #[case] narrow: CatalogFilter,
) {
    let records = fallback::sample();
    let wide = wide.apply(&records);
    let narrow = narrow.apply(&records);
    assert!(narrow.len() <= wide.len());
    assert!(narrow.iter().all(|r| wide.contains(r)));
}

#[test]
fn fallback_sample_feeds_every_chart() {
    let records = fallback::sample();
    let summary = stats::summarize(&records);
    assert!(summary.total_planets > 0);
    assert!(stats::distinct_methods(&records).len() >= 2);
    assert!(stats::discoveries_per_year(&records).len() >= 2);
    assert!(!stats::scatter(&records, Column::OrbitalPeriodDays, Column::PlanetRadiusEarth).is_empty());
}

#[tokio::test]
async fn live_archive_rows_reach_the_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/TAP/sync"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "pl_name,hostname,discoverymethod,disc_year,pl_orbper,pl_rade\n\
             Kepler-186 f,Kepler-186,Transit,2014,129.9,1.17\n\
             Kepler-62 f,Kepler-62,Transit,,267.29,1.41\n",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let cache = CatalogCache::new(client_for(&server), Duration::from_secs(60))
        .with_normalizer(Normalizer::new().with_current_year(PINNED_YEAR));

    let first = cache.get().await;
    let second = cache.get().await;

    assert_eq!(first.provenance, Provenance::Remote);
    assert_eq!(first.warning, None);
    assert_eq!(first.len(), 2);
    assert_eq!(first.find("Kepler-62 f").unwrap().discovery_year, PINNED_YEAR);
    assert_eq!(first.fetched_at, second.fetched_at);

    let transit: BTreeSet<String> = ["Transit".to_string()].into();
    let view = exo_catalog::filter(&first, &transit, "186", (2010, 2020));
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].name, "Kepler-186 f");
}

#[tokio::test]
async fn unreachable_archive_serves_the_sample() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/TAP/sync"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let cache = CatalogCache::new(client_for(&server), Duration::from_secs(60));
    let snapshot = cache.get().await;

    assert_eq!(snapshot.provenance, Provenance::Fallback);
    assert_eq!(snapshot.records, fallback::sample());
    assert!(snapshot.warning.as_deref().unwrap().contains("503"));
}
