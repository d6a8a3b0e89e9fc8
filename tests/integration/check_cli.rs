#![cfg(unix)]
use std::process::Command;

use crate::common::{run_check_binary, CHECK_BINARY_PATH};

#[test]
fn all_tools_present_exits_zero() {
    let (output, _temp) = run_check_binary("all_tools.sh");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0), "stdout:\n{stdout}");
    assert!(stdout.starts_with("Testing Excel MCP Server - New Tools Registration\n"));
    assert!(stdout.trim_end().ends_with("✅ Test PASSED - All new tools are available!"));
}

#[test]
fn missing_tool_exits_one() {
    let (output, _temp) = run_check_binary("missing_vba_module.sh");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1), "stdout:\n{stdout}");
    assert!(stdout.contains("Missing tools"), "{stdout}");
    assert!(stdout.contains("excel_add_vba_module"), "{stdout}");
    assert!(stdout.trim_end().ends_with("❌ Test FAILED - Some tools are missing!"));
}

#[test]
fn missing_executable_exits_one() {
    let temp = tempfile::tempdir().expect("can create temporary directory");
    let output = Command::new(CHECK_BINARY_PATH)
        .env("EXCEL_MCP_SERVER_PATH", temp.path().join("no-such-server"))
        .env_remove("EXCEL_MCP_CHECK_CONFIG")
        .current_dir(temp.path())
        .output()
        .expect("check binary should start");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Error testing tools: failed to launch"), "{stdout}");
    assert!(stdout.contains("no-such-server"), "{stdout}");
}

#[test]
fn invalid_config_exits_one_with_field_name() {
    let temp = tempfile::tempdir().expect("can create temporary directory");
    let config = temp.path().join("broken.toml");
    std::fs::write(&config, "[check]\nshutdown_timeout_secs = 600\n").expect("can write config");

    let output = Command::new(CHECK_BINARY_PATH)
        .env("EXCEL_MCP_CHECK_CONFIG", &config)
        .current_dir(temp.path())
        .output()
        .expect("check binary should start");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("check.shutdown_timeout_secs"), "{stderr}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.trim_end().ends_with("❌ Test FAILED - Some tools are missing!"),
        "{stdout}"
    );
}

#[test]
fn help_mentions_environment_overrides() {
    let output = Command::new(CHECK_BINARY_PATH)
        .arg("--help")
        .output()
        .expect("check binary should start");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("EXCEL_MCP_SERVER_PATH"), "{stdout}");
}
