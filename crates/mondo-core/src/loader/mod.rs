// crates/mondo-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (directory scans, optional gzip, pretty JSON
//! output) for the three kinds of files the site works with:
//!
//! - hotel feeds, one file per destination (`data/hotels/*.json[.gz]`)
//! - destination descriptions (`data/en/destination/*.json`)
//! - the generated homepage data and its summaries

mod catalog;
mod common_io;
mod store;

pub use catalog::{DestinationIndex, HotelCatalog};
pub use store::{load_regional_data, load_search_data, save_analysis};

use std::path::PathBuf;

/// Default location of the data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";
pub const HOMEPAGE_DATA_FILE: &str = "homepage-data.json";
pub const HOMEPAGE_SUMMARY_FILE: &str = "homepage-summary.json";
pub const REGIONAL_ANALYSIS_FILE: &str = "regional-analysis.json";

pub fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

pub fn default_hotels_dir() -> PathBuf {
    default_data_dir().join("hotels")
}

pub fn default_destinations_dir() -> PathBuf {
    default_data_dir().join("en").join("destination")
}

pub fn default_homepage_path() -> PathBuf {
    default_data_dir().join(HOMEPAGE_DATA_FILE)
}
