// crates/mondo-core/src/analysis.rs

//! Regional analysis: hotel tallies per country, with destinations matched
//! to countries through the destination description files.

use crate::aggregate::by_count_desc;
use crate::loader::{DestinationIndex, HotelCatalog};
use crate::model::{AnalysisCountry, AnalysisRegion, RegionalAnalysis};
use crate::ordered::OrderedMap;
use crate::regions::regions;
use crate::text::{plain_slug, slugify};
use tracing::debug;

/// Destinations kept per country.
pub const ANALYSIS_TOP_DESTINATIONS: usize = 10;

/// Tally hotels per country and per destination heading, then group by
/// region.
///
/// Country and heading come from the first hotel of each file. A file
/// without a country is skipped; one without a heading still counts towards
/// its country. A heading is attached to a country only when its slug names
/// a destination file whose `country` matches. File names from older tooling
/// use [`plain_slug`], newer ones [`slugify`]; both are tried.
pub fn analyze(catalog: &HotelCatalog, destinations: &DestinationIndex) -> RegionalAnalysis {
    let mut country_counts: OrderedMap<u64> = OrderedMap::new();
    let mut heading_counts: OrderedMap<u64> = OrderedMap::new();

    for (stem, hotels) in catalog.iter() {
        let Some(first) = hotels.first() else {
            continue;
        };
        let Some(country) = first.country() else {
            debug!("Skipping '{stem}': first hotel has no country");
            continue;
        };
        let n = hotels.len() as u64;
        *country_counts.get_or_insert_with(country, || 0) += n;
        if let Some(heading) = first.location() {
            *heading_counts.get_or_insert_with(heading, || 0) += n;
        }
    }

    let mut analysis = RegionalAnalysis::new();
    for def in regions() {
        let mut region = AnalysisRegion::default();

        for &country in def.countries {
            let Some(&hotel_count) = country_counts.get(country).filter(|n| **n > 0) else {
                continue;
            };

            let mut matched: OrderedMap<u64> = heading_counts
                .iter()
                .filter(|(heading, _)| country_of_heading(destinations, heading) == Some(country))
                .map(|(heading, n)| (heading, *n))
                .collect();
            matched.sort_by(|(a, x), (b, y)| by_count_desc((a, *x), (b, *y)));
            matched.truncate(ANALYSIS_TOP_DESTINATIONS);

            region.total_hotels += hotel_count;
            region.countries.insert(
                country,
                AnalysisCountry {
                    hotel_count,
                    destinations: matched,
                },
            );
        }

        region
            .countries
            .sort_by(|(a, x), (b, y)| by_count_desc((a, x.hotel_count), (b, y.hotel_count)));
        analysis.insert(def.name, region);
    }
    analysis
}

fn country_of_heading<'a>(destinations: &'a DestinationIndex, heading: &str) -> Option<&'a str> {
    destinations
        .country_of(&plain_slug(heading))
        .or_else(|| destinations.country_of(&slugify(heading)))
}
