//! CLI integration tests against the live staging portal.
//!
//! These tests are opt-in: set `EHRI_LIVE_TESTS=1` to run them. They only
//! check response shapes, since the portal's contents change over time.

mod common;

use serde_json::Value;

use common::run_cli_success;

fn live() -> bool {
    std::env::var("EHRI_LIVE_TESTS").is_ok_and(|v| v == "1")
}

#[test]
fn test_live_countries() {
    if !live() {
        eprintln!("Skipping test_live_countries: EHRI_LIVE_TESTS not set");
        return;
    }

    let stdout = run_cli_success(&["countries", "--json"]);
    let rows: Vec<Value> = serde_json::from_str(stdout.trim()).unwrap();

    assert!(!rows.is_empty());
    assert!(rows.iter().all(|r| r["name"].is_string() && r["itemCount"].is_u64()));
}

#[test]
fn test_live_facets() {
    if !live() {
        eprintln!("Skipping test_live_facets: EHRI_LIVE_TESTS not set");
        return;
    }

    let stdout = run_cli_success(&["facets", "--json"]);
    let rows: Vec<Value> = serde_json::from_str(stdout.trim()).unwrap();

    assert!(rows.iter().all(|r| r["count"].is_u64() && r["value"].is_string()));
}
