// crates/mondo-core/src/aggregate.rs

//! Homepage aggregation: hotel feeds -> regional statistics + search list.

use crate::loader::HotelCatalog;
use crate::model::{
    CountryStats, DestinationStats, HomepageData, HotelRecord, RegionStats, RegionalData,
    SearchItem,
};
use crate::ordered::OrderedMap;
use crate::regions::{country_hint, region_for_country, regions};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::warn;

/// Country used when a feed names none and no hint matches.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// Lowest "from" price ever advertised.
pub const MIN_ADVERTISED_PRICE: f64 = 30.0;

/// How many countries per region and destinations per country are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopLimits {
    pub countries: usize,
    pub destinations: usize,
}

impl Default for TopLimits {
    fn default() -> Self {
        Self {
            countries: 6,
            destinations: 10,
        }
    }
}

/// Price statistics of one destination's hotels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceStats {
    pub hotel_count: u64,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub avg_price: Option<f64>,
}

impl From<PriceStats> for DestinationStats {
    fn from(s: PriceStats) -> Self {
        DestinationStats {
            hotel_count: s.hotel_count,
            min_price: s.min_price,
        }
    }
}

/// Count hotels and summarize their valid prices.
///
/// The minimum is floored at [`MIN_ADVERTISED_PRICE`]; max and average use
/// the raw prices.
pub fn destination_stats(hotels: &[HotelRecord]) -> PriceStats {
    let hotel_count = hotels.len() as u64;
    let prices: Vec<f64> = hotels.iter().filter_map(HotelRecord::price).collect();
    if prices.is_empty() {
        return PriceStats {
            hotel_count,
            ..PriceStats::default()
        };
    }

    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let avg = prices.iter().sum::<f64>() / prices.len() as f64;

    PriceStats {
        hotel_count,
        min_price: Some(min.max(MIN_ADVERTISED_PRICE)),
        max_price: Some(max),
        avg_price: Some(avg),
    }
}

/// Country of a destination, taken from its first hotel.
///
/// Falls back to a location-heading hint and finally to [`UNKNOWN_COUNTRY`].
pub fn country_of(hotels: &[HotelRecord]) -> String {
    let Some(first) = hotels.first() else {
        return UNKNOWN_COUNTRY.to_string();
    };
    if let Some(country) = first.country() {
        return country.to_string();
    }
    first
        .location()
        .and_then(country_hint)
        .unwrap_or(UNKNOWN_COUNTRY)
        .to_string()
}

/// Descending by count, then ascending by name.
pub(crate) fn by_count_desc(a: (&str, u64), b: (&str, u64)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// Group destinations by region and keep the top countries/destinations.
///
/// Destinations whose country is not in the region table are logged and
/// left out. A region's `totalHotels` only counts the countries kept.
pub fn build_regional_data(catalog: &HotelCatalog, limits: TopLimits) -> RegionalData {
    let mut grouped: OrderedMap<OrderedMap<CountryStats>> = OrderedMap::new();

    for (stem, hotels) in catalog.iter() {
        let country = country_of(hotels);
        let Some(region) = region_for_country(&country) else {
            warn!("Country '{country}' not found in regional mapping, skipping destination '{stem}'");
            continue;
        };

        let stats = DestinationStats::from(destination_stats(hotels));
        let entry = grouped
            .get_or_insert_with(region, OrderedMap::new)
            .get_or_insert_with(&country, CountryStats::default);
        entry.hotel_count += stats.hotel_count;
        entry.destinations.insert(stem, stats);
    }

    let mut out = RegionalData::new();
    // Table order, not discovery order.
    for def in regions() {
        let Some(countries) = grouped.get(def.name) else {
            continue;
        };

        let mut countries = countries.clone();
        countries.sort_by(|(a, x), (b, y)| by_count_desc((a, x.hotel_count), (b, y.hotel_count)));
        countries.truncate(limits.countries);

        let mut region = RegionStats::default();
        for (name, mut country) in countries {
            country
                .destinations
                .sort_by(|(a, x), (b, y)| by_count_desc((a, x.hotel_count), (b, y.hotel_count)));
            country.destinations.truncate(limits.destinations);
            region.total_hotels += country.hotel_count;
            region.countries.insert(name, country);
        }
        out.insert(def.name, region);
    }
    out
}

/// Flat search list: each destination, preceded by its country the first
/// time that country is seen.
pub fn build_search_data(catalog: &HotelCatalog) -> Vec<SearchItem> {
    let mut items = Vec::new();
    let mut seen_countries = HashSet::new();

    for (stem, hotels) in catalog.iter() {
        let country = country_of(hotels);
        if country != UNKNOWN_COUNTRY && seen_countries.insert(country.clone()) {
            items.push(SearchItem::country(&country));
        }
        items.push(SearchItem::destination(stem));
    }
    items
}

impl HomepageData {
    /// Aggregate a hotel catalog into homepage data.
    pub fn generate(catalog: &HotelCatalog, generated_at: DateTime<Utc>, limits: TopLimits) -> Self {
        let regional_data = build_regional_data(catalog, limits);
        let search_data = build_search_data(catalog);
        Self {
            total_destinations: search_data.len(),
            total_regions: regional_data.len(),
            regional_data,
            search_data,
            generated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hotels(country: &str, prices: &[f64]) -> Vec<HotelRecord> {
        prices
            .iter()
            .map(|p| HotelRecord {
                offer_country_name: Some(country.to_string()),
                price: Some(json!(p)),
                ..HotelRecord::default()
            })
            .collect()
    }

    #[test]
    fn stats_floor_minimum_price() {
        let s = destination_stats(&hotels("Thailand", &[12.0, 50.0, 100.0]));
        assert_eq!(s.hotel_count, 3);
        assert_eq!(s.min_price, Some(30.0));
        assert_eq!(s.max_price, Some(100.0));
        assert_eq!(s.avg_price, Some(54.0));
    }

    #[test]
    fn stats_without_prices() {
        let list = vec![HotelRecord::default(), HotelRecord::default()];
        let s = destination_stats(&list);
        assert_eq!(s.hotel_count, 2);
        assert_eq!(s.min_price, None);
        assert_eq!(s.avg_price, None);
    }

    #[test]
    fn country_falls_back_to_hint_then_unknown() {
        let hinted = vec![HotelRecord {
            location_heading: Some("Old Town, Krabi".into()),
            ..HotelRecord::default()
        }];
        assert_eq!(country_of(&hinted), "Thailand");
        assert_eq!(country_of(&[HotelRecord::default()]), UNKNOWN_COUNTRY);
        assert_eq!(country_of(&[]), UNKNOWN_COUNTRY);
    }

    #[test]
    fn regional_data_ranks_and_truncates() {
        let mut catalog = HotelCatalog::new();
        catalog.insert("bangkok", hotels("Thailand", &[40.0; 5]));
        catalog.insert("phuket", hotels("Thailand", &[60.0; 3]));
        catalog.insert("hanoi", hotels("Vietnam", &[35.0; 7]));
        catalog.insert("bali", hotels("Indonesia", &[80.0; 1]));
        catalog.insert("atlantis", hotels("Atlantis", &[10.0; 9]));

        let limits = TopLimits {
            countries: 2,
            destinations: 1,
        };
        let data = build_regional_data(&catalog, limits);

        assert_eq!(data.keys().collect::<Vec<_>>(), vec!["South East Asia"]);
        let sea = data.get("South East Asia").unwrap();
        assert_eq!(sea.countries.keys().collect::<Vec<_>>(), vec!["Thailand", "Vietnam"]);
        assert_eq!(sea.total_hotels, 15);

        let thailand = sea.countries.get("Thailand").unwrap();
        assert_eq!(thailand.hotel_count, 8);
        assert_eq!(thailand.destinations.keys().collect::<Vec<_>>(), vec!["bangkok"]);
    }

    #[test]
    fn ties_break_by_name() {
        let mut catalog = HotelCatalog::new();
        catalog.insert("zurich", hotels("Switzerland", &[90.0; 2]));
        catalog.insert("geneva", hotels("Switzerland", &[90.0; 2]));
        let data = build_regional_data(&catalog, TopLimits::default());
        let swiss = &data.get("Europe").unwrap().countries.get("Switzerland").unwrap();
        assert_eq!(swiss.destinations.keys().collect::<Vec<_>>(), vec!["geneva", "zurich"]);
    }

    #[test]
    fn search_data_lists_country_once_before_destinations() {
        let mut catalog = HotelCatalog::new();
        catalog.insert("bangkok", hotels("Thailand", &[40.0]));
        catalog.insert("chiang_mai", hotels("Thailand", &[40.0]));
        catalog.insert("mystery", vec![HotelRecord::default()]);

        let items = build_search_data(&catalog);
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Thailand", "Bangkok", "Chiang Mai", "Mystery"]);
        assert_eq!(items[0].slug, "thailand");
        assert_eq!(items[2].slug, "chiang_mai");
    }
}
