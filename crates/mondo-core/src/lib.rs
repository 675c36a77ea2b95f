// crates/mondo-core/src/lib.rs

//! # mondo-core
//!
//! Data layer of the MondoExplora travel site.
//!
//! - [`loader`] reads hotel feeds and destination files, and reads/writes
//!   the generated JSON.
//! - [`aggregate`] turns hotel feeds into per-region statistics and the
//!   flat search list shown on the homepage.
//! - [`analysis`] produces the regional analysis report.
//! - [`search`] and [`lookup`] answer the page layer's queries.
//!
//! ```no_run
//! use mondo_core::prelude::*;
//!
//! let catalog = HotelCatalog::load_dir("data/hotels")?;
//! let data = HomepageData::generate(&catalog, chrono::Utc::now(), TopLimits::default());
//! data.save("data/homepage-data.json")?;
//! # Ok::<(), mondo_core::MondoError>(())
//! ```

pub mod aggregate;
pub mod analysis;
pub mod common;
pub mod error;
pub mod loader;
pub mod lookup;
pub mod model;
pub mod ordered;
pub mod prelude;
pub mod regions;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::DataStats;
pub use crate::error::{MondoError, Result};
pub use crate::model::{
    CountryStats, DestinationStats, HomepageData, HomepageSummary, RegionStats, RegionalData,
    SearchItem, SearchKind,
};
pub use crate::ordered::OrderedMap;
