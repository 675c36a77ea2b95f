// crates/mondo-core/src/loader/catalog.rs
use super::common_io::{list_data_files, read_json};
use crate::error::Result;
use crate::model::{DestinationRecord, HotelRecord};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Hotel feeds keyed by destination stem (`koh_samui`), iterated in stem
/// order.
#[derive(Debug, Clone, Default)]
pub struct HotelCatalog {
    destinations: BTreeMap<String, Vec<HotelRecord>>,
}

impl HotelCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.json` / `*.json.gz` file of `dir`.
    ///
    /// A file that cannot be read or is not a JSON array is logged and
    /// skipped, as is a file holding an empty array. Only a missing or
    /// unreadable directory is an error.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        info!("Loading hotel data from {}", dir.display());

        let mut catalog = Self::new();
        for (stem, path) in list_data_files(dir)? {
            let hotels: Vec<HotelRecord> = match read_json(&path) {
                Ok(hotels) => hotels,
                Err(e) => {
                    warn!("Error loading {}: {e}", path.display());
                    continue;
                }
            };
            if hotels.is_empty() {
                debug!("Skipping {}: no hotels", path.display());
                continue;
            }
            if catalog.destinations.contains_key(&stem) {
                warn!("Duplicate hotel file for '{stem}', keeping the first");
                continue;
            }
            catalog.destinations.insert(stem, hotels);
        }

        info!("Loaded hotel data for {} destinations", catalog.len());
        Ok(catalog)
    }

    /// Add a destination's hotels. Empty lists are ignored.
    pub fn insert(&mut self, stem: impl Into<String>, hotels: Vec<HotelRecord>) {
        if !hotels.is_empty() {
            self.destinations.insert(stem.into(), hotels);
        }
    }

    pub fn get(&self, stem: &str) -> Option<&[HotelRecord]> {
        self.destinations.get(stem).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[HotelRecord])> {
        self.destinations
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    pub fn hotel_count(&self) -> usize {
        self.destinations.values().map(Vec::len).sum()
    }
}

/// Destination descriptions keyed by file slug (`koh-samui`).
#[derive(Debug, Clone, Default)]
pub struct DestinationIndex {
    records: BTreeMap<String, DestinationRecord>,
}

impl DestinationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every destination file of `dir`, skipping unreadable ones.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut index = Self::new();
        for (slug, path) in list_data_files(dir)? {
            match read_json::<DestinationRecord>(&path) {
                Ok(record) => {
                    index.records.entry(slug).or_insert(record);
                }
                Err(e) => debug!("Skipping destination file {}: {e}", path.display()),
            }
        }
        info!("Found {} destination files", index.len());
        Ok(index)
    }

    pub fn insert(&mut self, slug: impl Into<String>, record: DestinationRecord) {
        self.records.insert(slug.into(), record);
    }

    pub fn get(&self, slug: &str) -> Option<&DestinationRecord> {
        self.records.get(slug)
    }

    /// Country recorded in the destination file named by `slug`.
    pub fn country_of(&self, slug: &str) -> Option<&str> {
        self.get(slug).and_then(|r| r.country.as_deref())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
