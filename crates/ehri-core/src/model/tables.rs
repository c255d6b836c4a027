//! Flat tables handed to the rendering layer.

use serde::{Deserialize, Serialize};

/// One bar of the per-country chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySummaryRow {
    pub name: String,
    pub item_count: u64,
}

/// One point of the repository map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
}

/// Everything derived from one Countries response.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CountryTables {
    /// One row per country, in arrival order.
    pub summary: Vec<CountrySummaryRow>,
    /// Repository locations, in arrival order across all countries.
    pub points: Vec<GeoPoint>,
}

impl CountryTables {
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.points.is_empty()
    }
}
