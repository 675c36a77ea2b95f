// crates/mondo-core/src/regions.rs

//! The hand-curated region table used for the navigation tabs.
//!
//! Country names are matched exactly; the table is the single source of
//! truth for which countries the site lists and in which order regions are
//! shown.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Region shown first when the visitor has not picked one.
pub const DEFAULT_REGION: &str = "Australia & New Zealand";

/// Price used when neither the destination nor its region has one.
pub const DEFAULT_FALLBACK_PRICE: u32 = 45;

/// A navigation region and its member countries.
#[derive(Debug, Clone, Copy)]
pub struct RegionDef {
    pub name: &'static str,
    pub countries: &'static [&'static str],
    /// "from $N" shown for destinations without a known minimum price.
    pub fallback_price: u32,
}

pub static REGIONS: &[RegionDef] = &[
    RegionDef {
        name: "South East Asia",
        countries: &[
            "Thailand", "Vietnam", "Indonesia", "Philippines", "Malaysia", "Singapore",
            "Cambodia", "Laos", "Myanmar", "Brunei", "East Timor",
        ],
        fallback_price: 45,
    },
    RegionDef {
        name: "Japan & South Korea",
        countries: &["Japan", "South Korea", "North Korea"],
        fallback_price: 80,
    },
    RegionDef {
        name: "US, Canada & Mexico",
        countries: &["United States", "Canada", "Mexico", "USA"],
        fallback_price: 90,
    },
    RegionDef {
        name: "Australia & New Zealand",
        countries: &[
            "Australia", "New Zealand", "Fiji", "Papua New Guinea", "Solomon Islands",
            "Vanuatu",
        ],
        fallback_price: 100,
    },
    RegionDef {
        name: "Europe",
        countries: &[
            "France", "Italy", "Spain", "Germany", "United Kingdom", "Netherlands",
            "Belgium", "Switzerland", "Austria", "Portugal", "Greece", "Turkey", "Poland",
            "Czech Republic", "Hungary", "Croatia", "Slovenia", "Slovakia", "Romania",
            "Bulgaria", "Ireland", "Denmark", "Sweden", "Norway", "Finland", "Iceland",
            "Estonia", "Latvia", "Lithuania", "Malta", "Cyprus", "Luxembourg", "Monaco",
            "Liechtenstein", "Andorra", "San Marino", "Vatican City", "Albania",
            "Bosnia and Herzegovina", "Montenegro", "Serbia", "North Macedonia", "Moldova",
            "Belarus", "Ukraine", "Russia",
        ],
        fallback_price: 70,
    },
    RegionDef {
        name: "Latin America",
        countries: &[
            "Brazil", "Argentina", "Chile", "Colombia", "Peru", "Uruguay", "Paraguay",
            "Bolivia", "Ecuador", "Venezuela", "Costa Rica", "Panama", "Guatemala",
            "Honduras", "Nicaragua", "El Salvador", "Dominican Republic", "Cuba", "Jamaica",
            "Trinidad and Tobago", "Barbados",
        ],
        fallback_price: 60,
    },
];

static COUNTRY_INDEX: Lazy<HashMap<&'static str, &'static RegionDef>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for region in REGIONS {
        for country in region.countries {
            map.entry(*country).or_insert(region);
        }
    }
    map
});

/// Well-known places used to guess a country from a hotel's location
/// heading when the feed omits `offer_country_name`.
static LOCATION_HINTS: &[(&str, &str)] = &[
    ("bangkok", "Thailand"), ("phuket", "Thailand"), ("koh samui", "Thailand"),
    ("chiang mai", "Thailand"), ("pattaya", "Thailand"), ("krabi", "Thailand"),
    ("bali", "Indonesia"), ("jakarta", "Indonesia"), ("yogyakarta", "Indonesia"),
    ("ho chi minh", "Vietnam"), ("hanoi", "Vietnam"), ("da nang", "Vietnam"),
    ("manila", "Philippines"), ("cebu", "Philippines"), ("boracay", "Philippines"),
    ("kuala lumpur", "Malaysia"), ("penang", "Malaysia"), ("langkawi", "Malaysia"),
    ("singapore", "Singapore"),
    ("sydney", "Australia"), ("melbourne", "Australia"), ("brisbane", "Australia"),
    ("london", "United Kingdom"), ("paris", "France"), ("rome", "Italy"),
    ("madrid", "Spain"), ("barcelona", "Spain"), ("amsterdam", "Netherlands"),
    ("tokyo", "Japan"), ("osaka", "Japan"), ("kyoto", "Japan"),
    ("seoul", "South Korea"), ("busan", "South Korea"),
    ("new york", "United States"), ("los angeles", "United States"),
    ("miami", "United States"), ("chicago", "United States"),
    ("toronto", "Canada"), ("vancouver", "Canada"), ("montreal", "Canada"),
    ("cancun", "Mexico"), ("mexico city", "Mexico"), ("los cabos", "Mexico"),
    ("auckland", "New Zealand"), ("queenstown", "New Zealand"),
    ("rio de janeiro", "Brazil"), ("sao paulo", "Brazil"),
    ("buenos aires", "Argentina"), ("santiago", "Chile"),
    ("bogota", "Colombia"), ("lima", "Peru"),
];

/// All regions in display order.
pub fn regions() -> &'static [RegionDef] {
    REGIONS
}

/// Look up a region definition by its exact name.
pub fn find_region(name: &str) -> Option<&'static RegionDef> {
    REGIONS.iter().find(|r| r.name == name)
}

/// The region a country belongs to, by exact name match.
pub fn region_for_country(country: &str) -> Option<&'static str> {
    COUNTRY_INDEX.get(country).map(|r| r.name)
}

/// Regional "from" price for destinations without a known minimum.
pub fn fallback_price(region: &str) -> u32 {
    find_region(region)
        .map(|r| r.fallback_price)
        .unwrap_or(DEFAULT_FALLBACK_PRICE)
}

/// Guess a country from a free-form location heading.
///
/// The heading is folded first, so `"Phuket, Thailand"` and `"PHUKET"` both
/// resolve. The first table entry contained in the heading wins.
pub fn country_hint(location_heading: &str) -> Option<&'static str> {
    let heading = crate::text::fold_key(location_heading);
    if heading.is_empty() {
        return None;
    }
    LOCATION_HINTS
        .iter()
        .find(|(place, _)| heading.contains(place))
        .map(|(_, country)| *country)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_keep_table_order() {
        let names: Vec<_> = regions().iter().map(|r| r.name).collect();
        assert_eq!(names.first(), Some(&"South East Asia"));
        assert_eq!(names.last(), Some(&"Latin America"));
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn country_lookup_is_exact() {
        assert_eq!(region_for_country("Thailand"), Some("South East Asia"));
        assert_eq!(region_for_country("USA"), Some("US, Canada & Mexico"));
        assert_eq!(region_for_country("thailand"), None);
        assert_eq!(region_for_country("Atlantis"), None);
    }

    #[test]
    fn fallback_prices_per_region() {
        assert_eq!(fallback_price("Europe"), 70);
        assert_eq!(fallback_price("Australia & New Zealand"), 100);
        assert_eq!(fallback_price("Antarctica"), DEFAULT_FALLBACK_PRICE);
    }

    #[test]
    fn location_hint_matches_substring() {
        assert_eq!(country_hint("Patong Beach, Phuket"), Some("Thailand"));
        assert_eq!(country_hint("São Paulo Centro"), Some("Brazil"));
        assert_eq!(country_hint(""), None);
        assert_eq!(country_hint("Nowhere"), None);
    }
}
