use chrono::{TimeZone, Utc};
use mondo_cli::report::{analysis_breakdown, homepage_breakdown, stats_report};
use mondo_core::prelude::*;
use serde_json::json;

fn feed(country: &str, heading: &str, prices: &[f64]) -> Vec<HotelRecord> {
    prices
        .iter()
        .map(|p| HotelRecord {
            offer_country_name: Some(country.into()),
            location_heading: Some(heading.into()),
            price: Some(json!(p)),
            ..HotelRecord::default()
        })
        .collect()
}

fn catalog() -> HotelCatalog {
    let mut c = HotelCatalog::new();
    c.insert("lisbon", feed("Portugal", "Lisbon", &[80.0; 1200]));
    c.insert("porto", feed("Portugal", "Porto", &[64.4; 3]));
    c.insert("reykjavik", vec![HotelRecord {
        offer_country_name: Some("Iceland".into()),
        ..HotelRecord::default()
    }]);
    c
}

#[test]
fn homepage_breakdown_lists_top_destination_and_price() {
    let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let data = HomepageData::generate(&catalog(), at, TopLimits::default());
    let text = homepage_breakdown(&data);

    assert!(text.contains("Total hotels: 1,204"));
    assert!(text.contains("Europe: 1,204 hotels across 2 countries"));
    assert!(text.contains("- Portugal: 1,203 hotels, top destination Lisbon (from $80)"));
    assert!(text.contains("- Iceland: 1 hotels, top destination Reykjavik (price N/A)"));

    let stats = stats_report(&data.stats());
    assert!(stats.contains("Countries: 2"));
    assert!(stats.contains("Search entries: 2 countries, 3 destinations"));
}

#[test]
fn analysis_breakdown_shows_every_region() {
    let mut index = DestinationIndex::new();
    index.insert(
        "lisbon",
        DestinationRecord {
            name: Some("Lisbon".into()),
            country: Some("Portugal".into()),
        },
    );
    let text = analysis_breakdown(&analyze(&catalog(), &index));
    assert!(text.contains("Europe (1204 total hotels):"));
    assert!(text.contains("  Iceland: 1 hotels"));
    assert!(text.contains("  Portugal: 1203 hotels"));
    assert!(text.contains("    - Lisbon: 1200 hotels"));
    assert!(text.contains("Latin America (0 total hotels):"));
}
