mod common;

use common::run_cli_success;

#[test]
fn test_version_starts_with_package_version() {
    let stdout = run_cli_success(&["--version"]);
    let expected = format!("ehri {}", env!("CARGO_PKG_VERSION"));

    assert!(
        stdout.trim_end().starts_with(&expected),
        "unexpected version line: {stdout}"
    );
}
