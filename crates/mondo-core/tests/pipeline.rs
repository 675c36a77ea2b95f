use chrono::{TimeZone, Utc};
use mondo_core::prelude::*;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(path: &Path, value: &serde_json::Value) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, serde_json::to_vec(value).unwrap()).unwrap();
}

fn hotel(country: &str, heading: &str, price: f64) -> serde_json::Value {
    json!({
        "offer_country_name": country,
        "location_heading": heading,
        "price": price,
        "name": "Some Hotel"
    })
}

fn seed_hotels(dir: &Path) {
    write(
        &dir.join("bangkok.json"),
        &json!([hotel("Thailand", "Bangkok", 55.0), hotel("Thailand", "Bangkok", 20.0)]),
    );
    write(
        &dir.join("koh_samui.json"),
        &json!([hotel("Thailand", "Koh Samui", 120.0)]),
    );
    write(
        &dir.join("queenstown.json"),
        &serde_json::Value::Array(vec![hotel("New Zealand", "Queenstown", 150.0); 3]),
    );
    write(&dir.join("empty.json"), &json!([]));
    write(&dir.join("object.json"), &json!({"not": "a list"}));
    fs::write(dir.join("broken.json"), b"[{").unwrap();
    fs::write(dir.join("README.txt"), b"ignored").unwrap();
}

#[test]
fn catalog_skips_bad_files() {
    let tmp = tempdir().unwrap();
    seed_hotels(tmp.path());

    let catalog = HotelCatalog::load_dir(tmp.path()).unwrap();
    let stems: Vec<_> = catalog.iter().map(|(s, _)| s.to_string()).collect();
    assert_eq!(stems, vec!["bangkok", "koh_samui", "queenstown"]);
    assert_eq!(catalog.hotel_count(), 6);
}

#[test]
fn missing_directory_is_an_error() {
    let tmp = tempdir().unwrap();
    let err = HotelCatalog::load_dir(tmp.path().join("nope")).unwrap_err();
    assert!(matches!(err, MondoError::NotFound(_)));
}

#[cfg(feature = "compact")]
#[test]
fn gzip_feeds_are_read() {
    use flate2::{write::GzEncoder, Compression};
    use std::io::Write;

    let tmp = tempdir().unwrap();
    let file = fs::File::create(tmp.path().join("cancun.json.gz")).unwrap();
    let mut gz = GzEncoder::new(file, Compression::default());
    gz.write_all(
        serde_json::to_string(&json!([hotel("Mexico", "Cancun", 99.0)]))
            .unwrap()
            .as_bytes(),
    )
    .unwrap();
    gz.finish().unwrap();

    let catalog = HotelCatalog::load_dir(tmp.path()).unwrap();
    assert_eq!(catalog.get("cancun").map(|h| h.len()), Some(1));
}

#[test]
fn generate_save_and_reload() {
    let tmp = tempdir().unwrap();
    let hotels = tmp.path().join("hotels");
    seed_hotels(&hotels);

    let catalog = HotelCatalog::load_dir(&hotels).unwrap();
    let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let data = HomepageData::generate(&catalog, at, TopLimits::default());

    assert_eq!(
        data.regional_data.keys().collect::<Vec<_>>(),
        vec!["South East Asia", "Australia & New Zealand"]
    );
    let thailand = data.regional_data.get("South East Asia").unwrap().countries.get("Thailand").unwrap();
    assert_eq!(thailand.hotel_count, 3);
    assert_eq!(thailand.destinations.get("bangkok").unwrap().min_price, Some(30.0));
    assert_eq!(data.total_destinations, 5);
    assert_eq!(data.total_regions, 2);

    let out = tmp.path().join("out").join("homepage-data.json");
    data.save(&out).unwrap();
    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("\"generatedAt\": \"2025-01-01T00:00:00Z\""));
    assert!(text.contains("\"type\": \"destination\""));

    let reloaded = HomepageData::load_from_path(&out).unwrap();
    assert_eq!(reloaded, data);
    assert_eq!(load_regional_data(&out), data.regional_data);
    assert_eq!(load_search_data(&out).len(), 5);

    let summary = HomepageSummary::from(&data);
    assert_eq!(summary.statistics.total_countries, 2);
    assert_eq!(summary.statistics.total_hotels, 6);
    assert_eq!(summary.regions.get("South East Asia").unwrap().destinations, 2);
}

#[test]
fn page_loaders_never_fail() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("homepage-data.json");
    assert!(load_regional_data(&missing).is_empty());
    assert!(load_search_data(&missing).is_empty());

    fs::write(&missing, b"{ not json").unwrap();
    assert!(load_regional_data(&missing).is_empty());
}

#[test]
fn analysis_from_directories() {
    let tmp = tempdir().unwrap();
    let hotels = tmp.path().join("hotels");
    let dests = tmp.path().join("en").join("destination");
    seed_hotels(&hotels);
    write(&dests.join("bangkok.json"), &json!({"name": "Bangkok", "country": "Thailand"}));
    write(&dests.join("koh-samui.json"), &json!({"name": "Koh Samui", "country": "Thailand"}));

    let catalog = HotelCatalog::load_dir(&hotels).unwrap();
    let index = DestinationIndex::load_dir(&dests).unwrap();
    let analysis = analyze(&catalog, &index);

    let sea = analysis.get("South East Asia").unwrap();
    assert_eq!(sea.total_hotels, 3);
    let thailand = sea.countries.get("Thailand").unwrap();
    assert_eq!(
        thailand.destinations.iter().collect::<Vec<_>>(),
        vec![("Bangkok", &2), ("Koh Samui", &1)]
    );
    // No destination file for Queenstown: counted, but no destinations.
    let nz = analysis.get("Australia & New Zealand").unwrap().countries.get("New Zealand").unwrap();
    assert_eq!(nz.hotel_count, 3);
    assert!(nz.destinations.is_empty());

    let out = tmp.path().join("regional-analysis.json");
    save_analysis(&analysis, &out).unwrap();
    let back: RegionalAnalysis = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(back, analysis);
}

#[test]
fn page_loaders_ignore_bad_sibling_fields() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("homepage-data.json");
    write(
        &path,
        &json!({
            "regionalData": {
                "Europe": {"totalHotels": 2, "countries": {
                    "Portugal": {"hotelCount": 2, "destinations": {
                        "lisbon": {"hotelCount": 2, "minPrice": 80.0}
                    }}
                }}
            },
            "searchData": [{"name": "Lisbon", "slug": "lisbon", "type": "city"}],
            "generatedAt": "2025-01-01"
        }),
    );
    let regional = load_regional_data(&path);
    assert_eq!(regional.keys().collect::<Vec<_>>(), vec!["Europe"]);
    assert!(load_search_data(&path).is_empty());

    write(
        &path,
        &json!({
            "regionalData": {"Europe": "not a region"},
            "searchData": [{"name": "Lisbon", "slug": "lisbon", "type": "destination"}]
        }),
    );
    assert!(load_regional_data(&path).is_empty());
    assert_eq!(load_search_data(&path).len(), 1);
}
