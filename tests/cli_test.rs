//! Runs the compiled binary to check argument handling before any network use

use std::process::{Command, Stdio};

use api_speculator::cli::USAGE;

#[test]
fn test_missing_base_url_prints_usage_and_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_api-speculator"))
        .stdin(Stdio::null())
        .output()
        .expect("run binary");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(USAGE), "stdout was {stdout:?}");
}

#[test]
fn test_help_exits_cleanly() {
    let output = Command::new(env!("CARGO_BIN_EXE_api-speculator"))
        .arg("--help")
        .stdin(Stdio::null())
        .output()
        .expect("run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<BASE_URL>"));
}
