// crates/mondo-core/src/common.rs
use crate::model::{HomepageData, SearchKind};
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for generated homepage data.
///
/// Returned by [`HomepageData::stats`], these counts reflect what the site
/// will actually show after top-N truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataStats {
    pub regions: usize,
    pub countries: usize,
    pub destinations: usize,
    pub hotels: u64,
    pub search_countries: usize,
    pub search_destinations: usize,
}

impl HomepageData {
    pub fn stats(&self) -> DataStats {
        let countries = self.regional_data.values().flat_map(|r| r.countries.values());
        let (mut n_countries, mut n_destinations) = (0, 0);
        for c in countries {
            n_countries += 1;
            n_destinations += c.destinations.len();
        }
        DataStats {
            regions: self.regional_data.len(),
            countries: n_countries,
            destinations: n_destinations,
            hotels: self.regional_data.values().map(|r| r.total_hotels).sum(),
            search_countries: self
                .search_data
                .iter()
                .filter(|i| i.kind == SearchKind::Country)
                .count(),
            search_destinations: self
                .search_data
                .iter()
                .filter(|i| i.kind == SearchKind::Destination)
                .count(),
        }
    }
}
