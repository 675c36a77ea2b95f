// crates/mondo-core/src/model/homepage.rs
use crate::ordered::OrderedMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hotel count and cheapest known nightly price for one destination.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationStats {
    pub hotel_count: u64,
    #[serde(default)]
    pub min_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryStats {
    pub hotel_count: u64,
    /// Destination name -> stats, sorted by hotel count.
    #[serde(default)]
    pub destinations: OrderedMap<DestinationStats>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionStats {
    pub total_hotels: u64,
    /// Country name -> stats, sorted by hotel count.
    #[serde(default)]
    pub countries: OrderedMap<CountryStats>,
}

/// Region name -> stats, in region-table order.
pub type RegionalData = OrderedMap<RegionStats>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Country,
    Destination,
}

impl SearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Country => "country",
            SearchKind::Destination => "destination",
        }
    }
}

/// An entry of the flat search list behind the homepage search box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: SearchKind,
}

impl SearchItem {
    pub fn country(name: &str) -> Self {
        Self {
            name: name.to_string(),
            slug: crate::text::slugify(name),
            kind: SearchKind::Country,
        }
    }

    pub fn destination(stem: &str) -> Self {
        Self {
            name: crate::text::display_name(stem),
            slug: stem.to_string(),
            kind: SearchKind::Destination,
        }
    }

    /// Page this item links to, e.g. `/en/country/thailand`.
    pub fn href(&self, lang: &str) -> String {
        format!("/{lang}/{}/{}", self.kind.as_str(), self.slug)
    }
}

/// Everything the homepage needs, written by `mondo generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomepageData {
    pub regional_data: RegionalData,
    pub search_data: Vec<SearchItem>,
    pub generated_at: DateTime<Utc>,
    pub total_destinations: usize,
    pub total_regions: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSummary {
    pub total_hotels: u64,
    pub countries: usize,
    pub destinations: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStatistics {
    pub total_destinations: usize,
    pub total_regions: usize,
    pub total_countries: usize,
    pub total_hotels: u64,
}

/// Compact overview written next to the homepage data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HomepageSummary {
    pub regions: OrderedMap<RegionSummary>,
    pub statistics: SummaryStatistics,
}

impl From<&HomepageData> for HomepageSummary {
    fn from(data: &HomepageData) -> Self {
        let regions: OrderedMap<RegionSummary> = data
            .regional_data
            .iter()
            .map(|(name, region)| {
                let summary = RegionSummary {
                    total_hotels: region.total_hotels,
                    countries: region.countries.len(),
                    destinations: region.countries.values().map(|c| c.destinations.len()).sum(),
                };
                (name.to_string(), summary)
            })
            .collect();

        let statistics = SummaryStatistics {
            total_destinations: data.total_destinations,
            total_regions: data.total_regions,
            total_countries: regions.values().map(|r| r.countries).sum(),
            total_hotels: regions.values().map(|r| r.total_hotels).sum(),
        };

        Self {
            regions,
            statistics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_item_uses_type_key() {
        let item = SearchItem::country("New Zealand");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"name":"New Zealand","slug":"new-zealand","type":"country"}"#);
    }

    #[test]
    fn destination_item_keeps_stem_as_slug() {
        let item = SearchItem::destination("koh_samui");
        assert_eq!(item.name, "Koh Samui");
        assert_eq!(item.slug, "koh_samui");
        assert_eq!(item.href("fr"), "/fr/destination/koh_samui");
    }

    #[test]
    fn missing_min_price_reads_as_none() {
        let stats: DestinationStats = serde_json::from_str(r#"{"hotelCount": 3}"#).unwrap();
        assert_eq!(stats.min_price, None);
        let stats: DestinationStats =
            serde_json::from_str(r#"{"hotelCount": 3, "minPrice": null}"#).unwrap();
        assert_eq!(stats.min_price, None);
    }
}
