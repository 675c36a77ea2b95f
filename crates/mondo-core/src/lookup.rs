// crates/mondo-core/src/lookup.rs

//! Page-layer queries over the precomputed regional data.

use crate::model::{CountryStats, DestinationStats, RegionStats, RegionalData};
use crate::regions::{fallback_price, DEFAULT_FALLBACK_PRICE, DEFAULT_REGION};
use crate::text::slugify;

/// Country cards shown per region tab.
pub const CARD_COUNTRIES: usize = 6;
/// Destinations listed per country card.
pub const CARD_DESTINATIONS: usize = 5;

/// Normalized slug for a destination key or a requested destination slug.
///
/// Keys are file stems (`koh_samui`), so underscores count as spaces:
/// `koh_samui`, `Koh Samui` and `koh-samui` all give `koh-samui`.
pub fn destination_slug(name: &str) -> String {
    slugify(&name.replace('_', " "))
}

/// A country together with the region it is listed under.
#[derive(Debug, Clone, Copy)]
pub struct CountryView<'a> {
    pub region: &'a str,
    pub name: &'a str,
    pub stats: &'a CountryStats,
}

/// A destination together with its country and region.
#[derive(Debug, Clone, Copy)]
pub struct DestinationView<'a> {
    pub region: &'a str,
    pub country: &'a str,
    pub name: &'a str,
    pub stats: &'a DestinationStats,
}

impl DestinationView<'_> {
    /// "from $N": rounded minimum price, or the regional fallback.
    pub fn price(&self) -> u32 {
        price_or_fallback(self.stats, self.region)
    }
}

fn price_or_fallback(stats: &DestinationStats, region: &str) -> u32 {
    match stats.min_price {
        Some(p) if p > 0.0 => p.round() as u32,
        _ => fallback_price(region),
    }
}

/// Lookups used by the pages.
///
/// Slug lookups scan in document order; when two names share a slug the
/// first one wins.
pub trait RegionalLookup {
    /// Requested region if present, else the default region if present,
    /// else the first one.
    fn active_region<'a>(&'a self, requested: Option<&str>) -> Option<(&'a str, &'a RegionStats)>;

    fn top_countries<'a>(&'a self, region: &str, n: usize) -> Vec<(&'a str, &'a CountryStats)>;

    fn find_country(&self, slug: &str) -> Option<CountryView<'_>>;

    fn find_destination(&self, slug: &str) -> Option<DestinationView<'_>>;

    /// Advertised price for a destination of a country.
    fn destination_price(&self, country: &str, destination: &str) -> u32;
}

impl RegionalLookup for RegionalData {
    fn active_region<'a>(&'a self, requested: Option<&str>) -> Option<(&'a str, &'a RegionStats)> {
        let pick = |name: &str| self.iter().find(|(k, _)| *k == name);
        requested
            .and_then(pick)
            .or_else(|| pick(DEFAULT_REGION))
            .or_else(|| self.get_index(0))
    }

    fn top_countries<'a>(&'a self, region: &str, n: usize) -> Vec<(&'a str, &'a CountryStats)> {
        self.get(region)
            .map(|r| r.countries.iter().take(n).collect())
            .unwrap_or_default()
    }

    fn find_country(&self, slug: &str) -> Option<CountryView<'_>> {
        let wanted = slugify(slug);
        self.iter().find_map(|(region, stats)| {
            stats
                .countries
                .iter()
                .find(|(name, _)| slugify(name) == wanted)
                .map(|(name, stats)| CountryView {
                    region,
                    name,
                    stats,
                })
        })
    }

    fn find_destination(&self, slug: &str) -> Option<DestinationView<'_>> {
        let wanted = destination_slug(slug);
        if wanted.is_empty() {
            return None;
        }
        for (region, region_stats) in self.iter() {
            for (country, country_stats) in region_stats.countries.iter() {
                let hit = country_stats
                    .destinations
                    .iter()
                    .find(|(name, _)| *name == slug || destination_slug(name) == wanted);
                if let Some((name, stats)) = hit {
                    return Some(DestinationView {
                        region,
                        country,
                        name,
                        stats,
                    });
                }
            }
        }
        None
    }

    fn destination_price(&self, country: &str, destination: &str) -> u32 {
        let Some((region, stats)) = self
            .iter()
            .find_map(|(region, r)| r.countries.get(country).map(|c| (region, c)))
        else {
            return DEFAULT_FALLBACK_PRICE;
        };
        match stats.destinations.get(destination) {
            Some(d) => price_or_fallback(d, region),
            None => fallback_price(region),
        }
    }
}

impl CountryStats {
    /// The first `n` destinations in stored order.
    pub fn top_destinations(&self, n: usize) -> Vec<(&str, &DestinationStats)> {
        self.destinations.iter().take(n).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> RegionalData {
        serde_json::from_str(
            r#"{
              "South East Asia": {"totalHotels": 10, "countries": {
                "Thailand": {"hotelCount": 10, "destinations": {
                  "koh_samui": {"hotelCount": 6, "minPrice": 41.6},
                  "bangkok": {"hotelCount": 4, "minPrice": null}
                }}
              }},
              "Australia & New Zealand": {"totalHotels": 3, "countries": {
                "New Zealand": {"hotelCount": 3, "destinations": {
                  "queenstown": {"hotelCount": 3}
                }}
              }}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn active_region_defaults() {
        let d = data();
        assert_eq!(d.active_region(Some("South East Asia")).unwrap().0, "South East Asia");
        assert_eq!(d.active_region(Some("Mars")).unwrap().0, DEFAULT_REGION);
        assert_eq!(d.active_region(None).unwrap().0, DEFAULT_REGION);

        let mut only_sea = data();
        only_sea = only_sea.into_iter().filter(|(k, _)| k == "South East Asia").collect();
        assert_eq!(only_sea.active_region(None).unwrap().0, "South East Asia");
        assert!(RegionalData::new().active_region(None).is_none());
    }

    #[test]
    fn country_by_slug() {
        let d = data();
        let c = d.find_country("new-zealand").unwrap();
        assert_eq!(c.name, "New Zealand");
        assert_eq!(c.region, "Australia & New Zealand");
        assert!(d.find_country("narnia").is_none());
    }

    #[test]
    fn destination_by_stem_or_pretty_slug() {
        let d = data();
        assert_eq!(d.find_destination("koh_samui").unwrap().name, "koh_samui");
        let v = d.find_destination("koh-samui").unwrap();
        assert_eq!(v.country, "Thailand");
        assert_eq!(v.price(), 42);
        assert!(d.find_destination("").is_none());
    }

    #[test]
    fn price_falls_back_to_region() {
        let d = data();
        assert_eq!(d.destination_price("Thailand", "koh_samui"), 42);
        assert_eq!(d.destination_price("Thailand", "bangkok"), 45);
        assert_eq!(d.destination_price("New Zealand", "queenstown"), 100);
        assert_eq!(d.destination_price("Narnia", "x"), DEFAULT_FALLBACK_PRICE);
    }

    #[test]
    fn top_countries_and_destinations_keep_order() {
        let d = data();
        let top = d.top_countries("South East Asia", CARD_COUNTRIES);
        assert_eq!(top.len(), 1);
        let names: Vec<_> = top[0].1.top_destinations(1).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["koh_samui"]);
        assert!(d.top_countries("Europe", 6).is_empty());
    }
}
