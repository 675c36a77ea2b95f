// crates/mondo-core/src/model/analysis.rs
use crate::ordered::OrderedMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisCountry {
    pub hotel_count: u64,
    /// Destination heading -> hotel count.
    pub destinations: OrderedMap<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRegion {
    pub countries: OrderedMap<AnalysisCountry>,
    pub total_hotels: u64,
}

/// Output of `mondo analyze`: every region of the table, in table order.
pub type RegionalAnalysis = OrderedMap<AnalysisRegion>;
