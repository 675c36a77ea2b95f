//! Plain-text reports printed by the `mondo` binary.

use mondo_core::model::{HomepageData, RegionalAnalysis};
use mondo_core::text::display_name;
use mondo_core::DataStats;
use std::fmt::Write;

/// `1234567` -> `1,234,567`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Summary printed after `mondo generate`: totals, then the top three
/// countries of each region with their biggest destination.
pub fn homepage_breakdown(data: &HomepageData) -> String {
    let stats = data.stats();
    let mut out = String::new();

    let _ = writeln!(out, "Homepage data summary:");
    let _ = writeln!(out, "  Total regions: {}", stats.regions);
    let _ = writeln!(out, "  Total destinations: {}", data.total_destinations);
    let _ = writeln!(out, "  Total hotels: {}", group_thousands(stats.hotels));
    let _ = writeln!(out);
    let _ = writeln!(out, "Regional breakdown:");

    for (region, region_stats) in data.regional_data.iter() {
        let _ = writeln!(
            out,
            "  {region}: {} hotels across {} countries",
            group_thousands(region_stats.total_hotels),
            region_stats.countries.len()
        );
        for (country, country_stats) in region_stats.countries.iter().take(3) {
            let hotels = group_thousands(country_stats.hotel_count);
            match country_stats.destinations.get_index(0) {
                Some((dest, dest_stats)) => {
                    let price = dest_stats
                        .min_price
                        .map(|p| format!("from ${p:.0}"))
                        .unwrap_or_else(|| "price N/A".to_string());
                    let _ = writeln!(
                        out,
                        "    - {country}: {hotels} hotels, top destination {} ({price})",
                        display_name(dest)
                    );
                }
                None => {
                    let _ = writeln!(out, "    - {country}: {hotels} hotels");
                }
            }
        }
    }
    out
}

/// Report printed after `mondo analyze`: top four countries per region and
/// their top five destinations.
pub fn analysis_breakdown(analysis: &RegionalAnalysis) -> String {
    let mut out = String::from("Regional analysis:\n\n");
    for (region, data) in analysis.iter() {
        let _ = writeln!(out, "{region} ({} total hotels):", data.total_hotels);
        for (country, country_data) in data.countries.iter().take(4) {
            let _ = writeln!(out, "  {country}: {} hotels", country_data.hotel_count);
            for (dest, count) in country_data.destinations.iter().take(5) {
                let _ = writeln!(out, "    - {dest}: {count} hotels");
            }
        }
        let _ = writeln!(out);
    }
    out
}

pub fn stats_report(stats: &DataStats) -> String {
    let mut out = String::from("Homepage data statistics:\n");
    let _ = writeln!(out, "  Regions: {}", stats.regions);
    let _ = writeln!(out, "  Countries: {}", stats.countries);
    let _ = writeln!(out, "  Destinations: {}", stats.destinations);
    let _ = writeln!(out, "  Hotels: {}", group_thousands(stats.hotels));
    let _ = writeln!(
        out,
        "  Search entries: {} countries, {} destinations",
        stats.search_countries, stats.search_destinations
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
