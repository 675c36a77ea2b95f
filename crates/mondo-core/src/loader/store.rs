// crates/mondo-core/src/loader/store.rs
use super::common_io::{read_json, write_json_pretty};
use crate::error::Result;
use crate::model::{HomepageData, HomepageSummary, RegionalAnalysis, RegionalData, SearchItem};
use serde::Deserialize;
use std::path::Path;
use tracing::error;

// The page loaders read one field each, so a bad sibling field does not
// empty the other half of the page.
#[derive(Deserialize)]
struct RegionalOnly {
    #[serde(rename = "regionalData", default)]
    regional_data: RegionalData,
}

#[derive(Deserialize)]
struct SearchOnly {
    #[serde(rename = "searchData", default)]
    search_data: Vec<SearchItem>,
}

impl HomepageData {
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        read_json(path.as_ref())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        write_json_pretty(path.as_ref(), self)
    }
}

impl HomepageSummary {
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        write_json_pretty(path.as_ref(), self)
    }
}

/// Write a regional analysis as pretty JSON.
pub fn save_analysis(analysis: &RegionalAnalysis, path: impl AsRef<Path>) -> Result<()> {
    write_json_pretty(path.as_ref(), analysis)
}

/// Regional data for the page layer. Never fails: a missing or broken file
/// is logged and yields empty data.
pub fn load_regional_data(path: impl AsRef<Path>) -> RegionalData {
    let path = path.as_ref();
    match read_json::<RegionalOnly>(path) {
        Ok(data) => data.regional_data,
        Err(e) => {
            error!("Error loading regional data from {}: {e}", path.display());
            RegionalData::default()
        }
    }
}

/// Search list for the page layer. Never fails, like [`load_regional_data`].
pub fn load_search_data(path: impl AsRef<Path>) -> Vec<SearchItem> {
    let path = path.as_ref();
    match read_json::<SearchOnly>(path) {
        Ok(data) => data.search_data,
        Err(e) => {
            error!("Error loading search data from {}: {e}", path.display());
            Vec::new()
        }
    }
}
