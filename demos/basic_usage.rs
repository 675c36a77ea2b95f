//! Basic usage example for mondo-rs
//!
//! This example demonstrates how to:
//! - Build a hotel catalog in memory
//! - Aggregate it into homepage data
//! - Look up countries and destinations the way the pages do
//! - Search the flat search list

use chrono::Utc;
use mondo_rs::prelude::*;
use serde_json::json;

fn hotel(country: &str, price: f64) -> HotelRecord {
    HotelRecord {
        offer_country_name: Some(country.to_string()),
        price: Some(json!(price)),
        ..HotelRecord::default()
    }
}

fn main() -> anyhow::Result<()> {
    println!("=== MondoExplora Basic Usage Example ===\n");

    let mut catalog = HotelCatalog::new();
    catalog.insert("bangkok", vec![hotel("Thailand", 38.0), hotel("Thailand", 64.5)]);
    catalog.insert("koh_samui", vec![hotel("Thailand", 120.0)]);
    catalog.insert("kyoto", vec![hotel("Japan", 95.0), hotel("Japan", 18.0)]);
    catalog.insert("cusco", vec![hotel("Peru", 52.0)]);
    println!("✓ Catalog with {} destinations, {} hotels\n", catalog.len(), catalog.hotel_count());

    let data = HomepageData::generate(&catalog, Utc::now(), TopLimits::default());
    let stats = data.stats();
    println!("--- Homepage data ---");
    println!("Regions: {}", stats.regions);
    println!("Countries: {}", stats.countries);
    println!("Search items: {}\n", data.search_data.len());

    println!("--- Region tabs ---");
    for (region, r) in data.regional_data.iter() {
        println!("{region} ({} hotels)", r.total_hotels);
        for (country, c) in data.regional_data.top_countries(region, CARD_COUNTRIES) {
            println!("  {country}: {} hotels", c.hotel_count);
            for (dest, d) in c.top_destinations(CARD_DESTINATIONS) {
                let price = data.regional_data.destination_price(country, dest);
                println!("    {} ({} hotels, from ${price})", display_name(dest), d.hotel_count);
            }
        }
    }
    println!();

    println!("--- Lookups ---");
    if let Some(dest) = data.regional_data.find_destination("koh-samui") {
        println!("koh-samui -> {} in {}, from ${}", dest.name, dest.country, dest.price());
    }
    if let Some(country) = data.regional_data.find_country("peru") {
        println!("peru -> {} ({})", country.name, country.region);
    }
    println!();

    println!("--- Search 'ky' ---");
    for item in filter_items(&data.search_data, "ky", DEFAULT_RESULT_LIMIT) {
        println!("{} [{}] -> {}", item.name, item.kind.as_str(), item.href("en"));
    }

    Ok(())
}
