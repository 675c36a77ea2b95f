// crates/mondo-core/src/model/mod.rs
pub mod analysis;
pub mod homepage;
pub mod raw;

pub use analysis::{AnalysisCountry, AnalysisRegion, RegionalAnalysis};
pub use homepage::{
    CountryStats, DestinationStats, HomepageData, HomepageSummary, RegionStats, RegionSummary,
    RegionalData, SearchItem, SearchKind, SummaryStatistics,
};
pub use raw::{DestinationRecord, HotelRecord};
