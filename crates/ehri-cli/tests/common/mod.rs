#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

use serde_json::{Value, json};
use url::Url;

/// Run the CLI binary with arguments, colors off and no inherited portal.
pub fn run_cli(args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ehri"));
    cmd.args(args);
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("EHRI_PORTAL");
    cmd.env_remove("RUST_LOG");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub fn run_cli_success(args: &[&str]) -> String {
    let output = run_cli(args);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure, returning stderr.
pub fn run_cli_failure(args: &[&str]) -> (String, String) {
    let output = run_cli(args);
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

pub fn file_portal_url(path: &Path) -> String {
    Url::from_directory_path(path)
        .expect("Failed to convert path to file URL")
        .to_string()
}

pub fn countries_body() -> Value {
    json!({ "data": { "countries": { "items": [
        {
            "name": "France",
            "itemCount": 12,
            "repositories": { "items": [
                { "latitude": 48.85, "longitude": 2.35 },
                { "latitude": null, "longitude": 2.0 }
            ]}
        },
        {
            "name": "Ghana",
            "itemCount": 1,
            "repositories": { "items": [
                { "latitude": 5.6, "longitude": 0.0 }
            ]}
        },
        {
            "name": "Andorra",
            "itemCount": 0,
            "repositories": { "items": [] }
        }
    ]}}})
}

pub fn search_body() -> Value {
    json!({
        "data": [],
        "meta": { "facets": [{ "param": "dates", "facets": [
            { "count": 5, "value": "1940", "name": "1940" },
            { "count": 3, "value": "1941", "name": "1941" }
        ]}]}
    })
}

/// Write a file into a capture directory, creating parents.
pub fn write_json(root: &Path, relative: &str, body: &Value) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, serde_json::to_vec_pretty(body).unwrap()).unwrap();
}

/// Populate a capture directory with the standard fixtures.
pub fn write_capture(root: &Path) {
    write_json(root, "countries.json", &countries_body());
    write_json(root, "search/all.json", &search_body());
}
