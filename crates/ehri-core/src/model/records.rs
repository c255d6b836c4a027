//! Records as the portal describes them.

use serde::{Deserialize, Serialize};

use super::GeoPoint;
use crate::normalize::CoordinatePolicy;

/// A country holding archival repositories.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    /// Country name. Assumed unique within one response.
    pub name: String,

    /// Number of archival items held in the country, as reported by the
    /// portal. Not derived from `repositories`.
    pub item_count: u64,

    /// Repositories in the order the portal listed them.
    pub repositories: Vec<RepositoryPoint>,
}

impl CountryRecord {
    /// Points of this country's repositories that pass `policy`, in order.
    pub fn geo_points(&self, policy: CoordinatePolicy) -> impl Iterator<Item = GeoPoint> + '_ {
        self.repositories
            .iter()
            .filter_map(move |repo| repo.geo_point(policy))
    }
}

/// Location of one archival repository. Either coordinate may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryPoint {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl RepositoryPoint {
    pub fn new(latitude: Option<f64>, longitude: Option<f64>) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The map point for this repository, if both coordinates count as
    /// present under `policy`.
    pub fn geo_point(&self, policy: CoordinatePolicy) -> Option<GeoPoint> {
        let latitude = self.latitude.filter(|v| policy.accepts(*v))?;
        let longitude = self.longitude.filter(|v| policy.accepts(*v))?;
        Some(GeoPoint {
            latitude,
            longitude,
        })
    }
}

/// One date bucket of the search facet histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetRecord {
    /// Date or period the bucket covers, e.g. `"1940"`.
    pub value: String,
    /// Number of archival descriptions in the bucket.
    pub count: u64,
    /// Display label.
    pub name: String,
}
