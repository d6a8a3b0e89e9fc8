#![allow(dead_code)]
use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
    time::Duration,
};

use excel_mcp_companion::{
    check::{RegistrationCheck, ServerLaunch},
    config::CheckSection,
};
use tempfile::TempDir;

pub const DEMO_BINARY_PATH: &str = env!("CARGO_BIN_EXE_excel-mcp-demo");
pub const CHECK_BINARY_PATH: &str = env!("CARGO_BIN_EXE_excel-mcp-check");
pub const SHELL: &str = "/bin/sh";

pub fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(relative)
}

pub fn stub(name: &str) -> PathBuf {
    fixture("stubs").join(name)
}

/// Check pointed at a shell stub with short timeouts.
pub fn stub_check(name: &str, response_timeout_secs: u64) -> RegistrationCheck {
    RegistrationCheck::new(
        ServerLaunch {
            program: PathBuf::from(SHELL),
            args: vec![stub(name).display().to_string()],
        },
        CheckSection {
            response_timeout: Duration::from_secs(response_timeout_secs),
            shutdown_timeout: Duration::from_secs(2),
            ..CheckSection::default()
        },
    )
}

pub async fn run_stub_check(name: &str, response_timeout_secs: u64) -> (bool, String) {
    let check = stub_check(name, response_timeout_secs);
    let mut out = Vec::new();
    let passed = check.run(&mut out).await;
    (passed, String::from_utf8(out).expect("report is UTF-8"))
}

/// Write a config file that launches `stub` through the shell.
pub fn write_stub_config(dir: &Path, stub_name: &str) -> PathBuf {
    let path = dir.join("excel-mcp-check.toml");
    let content = format!(
        "[server]\npath = {shell:?}\nargs = [{stub:?}]\n\n[check]\nresponse_timeout_secs = 2\nshutdown_timeout_secs = 2\n",
        shell = SHELL,
        stub = stub(stub_name).display().to_string(),
    );
    fs::write(&path, content).expect("can write stub config");
    path
}

/// Run the check binary against a stub, isolated from the caller's environment.
pub fn run_check_binary(stub_name: &str) -> (Output, TempDir) {
    let temp = tempfile::tempdir().expect("can create temporary directory");
    let config = write_stub_config(temp.path(), stub_name);
    let output = Command::new(CHECK_BINARY_PATH)
        .env("EXCEL_MCP_CHECK_CONFIG", &config)
        .env_remove("EXCEL_MCP_SERVER_PATH")
        .current_dir(temp.path())
        .output()
        .expect("check binary should start");
    (output, temp)
}
