#![cfg(unix)]
use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use excel_mcp_companion::check::{ServerLaunch, ServerSession, ShutdownKind};

use crate::common::{run_stub_check, stub, SHELL};

#[tokio::test]
async fn stub_with_all_tools_passes() {
    let (passed, report) = run_stub_check("all_tools.sh", 5).await;

    assert!(passed, "report:\n{report}");
    assert!(report.starts_with("Initialize response received: {"), "{report}");
    assert!(report.contains("Tools list response: {"), "{report}");
    for tool in [
        "excel_add_data_validation",
        "excel_add_conditional_formatting",
        "excel_execute_vba",
        "excel_add_vba_module",
    ] {
        assert!(report.contains(&format!("✅ {tool} - FOUND")), "{report}");
    }
    assert!(report.contains("required arguments: fileAbsolutePath, moduleName, vbaCode"));
    assert!(report.contains("🎉 All new tools are successfully registered!"));
}

#[tokio::test]
async fn stub_missing_a_tool_fails_and_names_it() {
    let (passed, report) = run_stub_check("missing_vba_module.sh", 5).await;

    assert!(!passed, "report:\n{report}");
    assert!(report.contains("❌ excel_add_vba_module - MISSING"), "{report}");
    assert!(
        report.contains(r#"❌ Missing tools: ["excel_add_vba_module"]"#),
        "{report}"
    );
}

#[tokio::test]
async fn notifications_before_a_response_are_skipped() {
    let (passed, report) = run_stub_check("notification_first.sh", 5).await;
    assert!(passed, "report:\n{report}");
    assert!(!report.contains("notifications/message"), "{report}");
}

#[tokio::test]
async fn silent_server_fails_within_the_timeouts() {
    let started = Instant::now();
    let (passed, report) = run_stub_check("silent.sh", 1).await;

    assert!(!passed);
    assert!(
        report.contains("Error testing tools: no response to `initialize` within 1s"),
        "{report}"
    );
    assert!(
        started.elapsed() < Duration::from_secs(10),
        "check should be bounded, took {:?}",
        started.elapsed()
    );
}

#[tokio::test]
async fn server_that_exits_early_fails() {
    let (passed, report) = run_stub_check("exits_immediately.sh", 5).await;
    assert!(!passed);
    assert!(report.starts_with("Error testing tools:"), "{report}");
}

#[tokio::test]
async fn non_json_output_is_malformed() {
    let (passed, report) = run_stub_check("not_json.sh", 5).await;
    assert!(!passed);
    assert!(
        report.contains("response to `initialize` is not valid JSON-RPC"),
        "{report}"
    );
}

#[tokio::test]
async fn json_rpc_error_fails_the_check() {
    let (passed, report) = run_stub_check("tools_list_error.sh", 5).await;
    assert!(!passed);
    assert!(report.contains("Tools list response:"), "{report}");
    assert!(
        report.contains("server rejected `tools/list` (code -32601): Method not found"),
        "{report}"
    );
}

#[tokio::test]
async fn response_without_tools_fails() {
    let (passed, report) = run_stub_check("no_tools_key.sh", 5).await;
    assert!(!passed);
    assert!(report.ends_with("❌ No tools found in response\n"), "{report}");
}

#[tokio::test]
async fn unattributed_server_error_is_reported_without_waiting() {
    let started = Instant::now();
    let (passed, report) = run_stub_check("parse_error.sh", 5).await;

    assert!(!passed);
    assert!(report.starts_with("Initialize response received: {"), "{report}");
    assert!(
        report.contains("Error testing tools: server rejected `initialize` (code -32700): Parse error"),
        "{report}"
    );
    assert!(
        started.elapsed() < Duration::from_secs(4),
        "error reply should not wait for the timeout, took {:?}",
        started.elapsed()
    );
}

#[tokio::test]
async fn server_ignoring_sigterm_is_killed_after_grace() {
    let started = Instant::now();
    let (passed, report) = run_stub_check("ignores_term.sh", 1).await;
    let elapsed = started.elapsed();

    assert!(!passed);
    assert!(
        report.contains("no response to `initialize` within 1s"),
        "{report}"
    );
    // Response timeout (1s) plus the full shutdown grace (2s) before the kill.
    assert!(elapsed >= Duration::from_secs(3), "took {elapsed:?}");
    assert!(elapsed < Duration::from_secs(10), "took {elapsed:?}");
}

#[tokio::test]
async fn shutdown_reports_kill_when_sigterm_is_ignored() {
    let launch = ServerLaunch {
        program: PathBuf::from(SHELL),
        args: vec![stub("ignores_term.sh").display().to_string()],
    };
    let session =
        ServerSession::spawn(&launch, Duration::from_secs(1)).expect("stub server spawns");
    // Give the shell time to install its trap.
    tokio::time::sleep(Duration::from_millis(200)).await;

    let kind = session
        .shutdown(Duration::from_secs(1))
        .await
        .expect("shutdown completes");
    assert_eq!(kind, ShutdownKind::Killed);
}

#[tokio::test]
async fn shutdown_reports_exit_when_server_stops_on_eof() {
    let launch = ServerLaunch {
        program: PathBuf::from(SHELL),
        args: vec![stub("all_tools.sh").display().to_string()],
    };
    let session =
        ServerSession::spawn(&launch, Duration::from_secs(1)).expect("stub server spawns");

    let kind = session
        .shutdown(Duration::from_secs(2))
        .await
        .expect("shutdown completes");
    assert!(matches!(kind, ShutdownKind::Exited(_)), "{kind:?}");
}
