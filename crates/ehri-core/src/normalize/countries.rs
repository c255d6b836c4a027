//! Country-repository normalizer.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::CoordinatePolicy;
use crate::model::{CountryRecord, CountrySummaryRow, CountryTables, GeoPoint, RepositoryPoint};
use crate::{Error, Result};

const PAYLOAD: &str = "countries";

#[derive(Debug, Deserialize)]
struct CountriesData {
    countries: CountryList,
}

#[derive(Debug, Deserialize)]
struct CountryList {
    items: Vec<CountryItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CountryItem {
    name: String,
    item_count: u64,
    repositories: RepositoryList,
}

#[derive(Debug, Deserialize)]
struct RepositoryList {
    items: Vec<RepositoryPoint>,
}

impl From<CountryItem> for CountryRecord {
    fn from(item: CountryItem) -> Self {
        CountryRecord {
            name: item.name,
            item_count: item.item_count,
            repositories: item.repositories.items,
        }
    }
}

/// Parse the `data` object of a Countries GraphQL response into records.
///
/// # Errors
///
/// Returns [`Error::MalformedResponse`] if `countries`, `items`,
/// `repositories` or a country `name` is missing, or if an `itemCount` is
/// not a non-negative integer.
pub fn parse_countries(data: &Value) -> Result<Vec<CountryRecord>> {
    let data =
        CountriesData::deserialize(data).map_err(|e| Error::malformed(PAYLOAD, e.to_string()))?;

    let countries: Vec<CountryRecord> = data
        .countries
        .items
        .into_iter()
        .map(CountryRecord::from)
        .collect();

    let mut seen = HashSet::with_capacity(countries.len());
    for country in &countries {
        if !seen.insert(country.name.as_str()) {
            warn!(name = %country.name, "country listed more than once");
        }
    }

    Ok(countries)
}

/// One `(name, itemCount)` row per country, in arrival order.
pub fn summary_table(countries: &[CountryRecord]) -> Vec<CountrySummaryRow> {
    countries
        .iter()
        .map(|c| CountrySummaryRow {
            name: c.name.clone(),
            item_count: c.item_count,
        })
        .collect()
}

/// Every repository location that passes `policy`, in arrival order.
pub fn geo_points(countries: &[CountryRecord], policy: CoordinatePolicy) -> Vec<GeoPoint> {
    countries
        .iter()
        .flat_map(|c| c.geo_points(policy))
        .collect()
}

/// Build the per-country summary and the repository map from a Countries
/// `data` object.
///
/// # Errors
///
/// See [`parse_countries`].
pub fn normalize_countries(data: &Value, policy: CoordinatePolicy) -> Result<CountryTables> {
    let countries = parse_countries(data)?;

    let tables = CountryTables {
        summary: summary_table(&countries),
        points: geo_points(&countries, policy),
    };

    debug!(
        countries = tables.summary.len(),
        points = tables.points.len(),
        ?policy,
        "normalized countries"
    );

    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn country(name: &str, item_count: u64, repos: Value) -> Value {
        json!({
            "name": name,
            "itemCount": item_count,
            "repositories": { "items": repos }
        })
    }

    fn data(items: Vec<Value>) -> Value {
        json!({ "countries": { "items": items } })
    }

    fn point(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint {
            latitude,
            longitude,
        }
    }

    #[test]
    fn single_country_with_one_located_repository() {
        let input = json!({
            "countries": { "items": [{
                "name": "France",
                "itemCount": 12,
                "repositories": { "items": [
                    { "latitude": 48.85, "longitude": 2.35 },
                    { "latitude": null, "longitude": 2.0 }
                ]}
            }]}
        });

        let tables = normalize_countries(&input, CoordinatePolicy::Truthy).unwrap();

        assert_eq!(
            tables.summary,
            vec![CountrySummaryRow {
                name: "France".to_string(),
                item_count: 12
            }]
        );
        assert_eq!(tables.points, vec![point(48.85, 2.35)]);
    }

    #[test]
    fn empty_item_list_gives_empty_tables() {
        let tables = normalize_countries(&data(vec![]), CoordinatePolicy::Truthy).unwrap();
        assert!(tables.is_empty());
    }

    #[test]
    fn missing_repositories_key_fails_whole_call() {
        let input = data(vec![
            country("Belgium", 4, json!([{ "latitude": 50.85, "longitude": 4.35 }])),
            json!({ "name": "Austria", "itemCount": 9 }),
        ]);

        let err = normalize_countries(&input, CoordinatePolicy::Truthy).unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("repositories"), "{err}");
    }

    #[test]
    fn missing_countries_key_is_malformed() {
        let err = normalize_countries(&json!({ "holders": {} }), CoordinatePolicy::Truthy)
            .unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn missing_items_key_is_malformed() {
        let err = normalize_countries(&json!({ "countries": {} }), CoordinatePolicy::Truthy)
            .unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn non_numeric_item_count_is_malformed() {
        let input = json!({ "countries": { "items": [{
            "name": "Italy",
            "itemCount": "many",
            "repositories": { "items": [] }
        }]}});
        assert!(parse_countries(&input).unwrap_err().is_malformed());
    }

    #[test]
    fn string_coordinate_is_malformed_not_absent() {
        let input = data(vec![country(
            "France",
            3,
            json!([{ "latitude": "48.85", "longitude": 2.35 }]),
        )]);
        assert!(
            normalize_countries(&input, CoordinatePolicy::default())
                .unwrap_err()
                .is_malformed()
        );
    }

    #[test]
    fn null_coordinate_is_absent() {
        let input = data(vec![country(
            "France",
            3,
            json!([{ "latitude": null, "longitude": 2.35 }]),
        )]);
        let tables = normalize_countries(&input, CoordinatePolicy::default()).unwrap();
        assert_eq!(tables.summary.len(), 1);
        assert!(tables.points.is_empty());
    }

    #[test]
    fn negative_item_count_is_malformed() {
        let input = json!({ "countries": { "items": [{
            "name": "Italy",
            "itemCount": -1,
            "repositories": { "items": [] }
        }]}});
        assert!(parse_countries(&input).unwrap_err().is_malformed());
    }

    #[test]
    fn summary_keeps_arrival_order_and_verbatim_counts() {
        let input = data(vec![
            country("Ukraine", 30, json!([])),
            country("Austria", 2, json!([])),
            country("Netherlands", 17, json!([])),
        ]);

        let tables = normalize_countries(&input, CoordinatePolicy::Truthy).unwrap();
        let rows: Vec<(&str, u64)> = tables
            .summary
            .iter()
            .map(|r| (r.name.as_str(), r.item_count))
            .collect();
        assert_eq!(rows, vec![("Ukraine", 30), ("Austria", 2), ("Netherlands", 17)]);
    }

    #[test]
    fn item_count_is_not_recomputed_from_repositories() {
        let input = data(vec![country(
            "Hungary",
            250,
            json!([{ "latitude": 47.5, "longitude": 19.04 }]),
        )]);

        let tables = normalize_countries(&input, CoordinatePolicy::Truthy).unwrap();
        assert_eq!(tables.summary[0].item_count, 250);
        assert_eq!(tables.points.len(), 1);
    }

    #[test]
    fn country_without_repositories_only_adds_summary_row() {
        let input = data(vec![
            country("Luxembourg", 0, json!([])),
            country("Greece", 5, json!([{ "latitude": 37.98, "longitude": 23.72 }])),
        ]);

        let tables = normalize_countries(&input, CoordinatePolicy::Truthy).unwrap();
        assert_eq!(tables.summary.len(), 2);
        assert_eq!(tables.points, vec![point(37.98, 23.72)]);
    }

    #[test]
    fn points_follow_arrival_order_across_countries() {
        let input = data(vec![
            country(
                "Germany",
                40,
                json!([
                    { "latitude": 52.52, "longitude": 13.40 },
                    { "longitude": 11.58 },
                    { "latitude": 48.14, "longitude": 11.58 }
                ]),
            ),
            country(
                "Israel",
                22,
                json!([
                    { "latitude": 31.77, "longitude": 35.21 },
                    {}
                ]),
            ),
        ]);

        let tables = normalize_countries(&input, CoordinatePolicy::Truthy).unwrap();
        assert_eq!(
            tables.points,
            vec![point(52.52, 13.40), point(48.14, 11.58), point(31.77, 35.21)]
        );
        assert_eq!(tables.summary[0].item_count, 40);
        assert_eq!(tables.summary[1].item_count, 22);
    }

    #[test]
    fn zero_coordinates_follow_policy() {
        let input = data(vec![country(
            "Ghana",
            1,
            json!([
                { "latitude": 5.6, "longitude": 0.0 },
                { "latitude": 0.0, "longitude": 0.0 }
            ]),
        )]);

        let truthy = normalize_countries(&input, CoordinatePolicy::Truthy).unwrap();
        assert!(truthy.points.is_empty());

        let present = normalize_countries(&input, CoordinatePolicy::Present).unwrap();
        assert_eq!(present.points, vec![point(5.6, 0.0), point(0.0, 0.0)]);
    }

    #[test]
    fn duplicate_names_are_kept_in_order() {
        let input = data(vec![
            country("Poland", 10, json!([])),
            country("Poland", 11, json!([])),
        ]);

        let tables = normalize_countries(&input, CoordinatePolicy::Truthy).unwrap();
        assert_eq!(tables.summary.len(), 2);
        assert_eq!(tables.summary[1].item_count, 11);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let input = json!({ "countries": { "items": [{
            "id": "fr",
            "name": "France",
            "itemCount": 1,
            "repositories": { "items": [], "pageInfo": { "hasNextPage": false } }
        }]}});
        assert_eq!(parse_countries(&input).unwrap().len(), 1);
    }

    #[test]
    fn rerun_produces_identical_output() {
        let input = data(vec![
            country("Serbia", 3, json!([{ "latitude": 44.79, "longitude": 20.45 }])),
            country("Croatia", 6, json!([{ "latitude": 45.81, "longitude": 15.98 }])),
        ]);

        let first = normalize_countries(&input, CoordinatePolicy::Truthy).unwrap();
        let second = normalize_countries(&input, CoordinatePolicy::Truthy).unwrap();
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }
}
