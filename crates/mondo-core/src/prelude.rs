//! mondo-core prelude: bring common types and traits into scope.

#![allow(unused_imports)]

pub use crate::aggregate::{build_regional_data, build_search_data, TopLimits};
pub use crate::analysis::analyze;
pub use crate::common::DataStats;
pub use crate::error::{MondoError, Result};
pub use crate::loader::{
    load_regional_data, load_search_data, save_analysis, DestinationIndex, HotelCatalog,
};
pub use crate::lookup::{RegionalLookup, CARD_COUNTRIES, CARD_DESTINATIONS};
pub use crate::model::*;
pub use crate::ordered::OrderedMap;
pub use crate::search::{filter_items, SearchIndex, DEFAULT_RESULT_LIMIT};
pub use crate::text::{display_name, fold_key, plain_slug, slugify};
pub use crate::traits::NameMatch;
