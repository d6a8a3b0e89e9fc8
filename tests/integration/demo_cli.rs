use std::process::Command;

use serde_json::Value;

use crate::common::DEMO_BINARY_PATH;

fn run_demo(args: &[&str]) -> String {
    let output = Command::new(DEMO_BINARY_PATH)
        .args(args)
        .output()
        .expect("demo binary should start");
    assert!(
        output.status.success(),
        "demo should exit 0, got {:?}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is UTF-8")
}

fn fenced_json(stdout: &str) -> Vec<Value> {
    stdout
        .split("```json\n")
        .skip(1)
        .map(|rest| {
            let body = rest.split("\n```").next().expect("block is closed");
            serde_json::from_str(body).expect("block holds valid JSON")
        })
        .collect()
}

#[test]
fn default_run_prints_all_feature_examples() {
    let stdout = run_demo(&[]);

    assert!(stdout.starts_with("Excel MCP Server - New Features Examples\n"));
    let titles: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.strip_prefix("## "))
        .collect();
    assert_eq!(
        titles,
        vec![
            "Data Validation - Dropdown List",
            "Data Validation - Number Range",
            "Conditional Formatting - Highlight",
            "Conditional Formatting - Color Scale",
            "Conditional Formatting - Data Bars",
            "VBA Execution",
            "VBA Module Addition",
        ]
    );

    let blocks = fenced_json(&stdout);
    assert_eq!(blocks.len(), 7);
    for block in &blocks {
        assert_eq!(block["arguments"]["fileAbsolutePath"], r"C:\temp\example.xlsx");
    }
    assert_eq!(blocks[5]["tool"], "excel_execute_vba");
    assert_eq!(
        blocks[5]["arguments"]["vbaCode"],
        r#"Range("F1").Value = "Hello from VBA!""#
    );
}

#[test]
fn sample_data_flag_prints_only_the_writer_example() {
    let stdout = run_demo(&["--sample-data"]);

    let body = stdout
        .strip_prefix("Sample Data Creation Example:\n")
        .expect("sample header first");
    let value: Value = serde_json::from_str(body).expect("body is a single JSON document");
    assert_eq!(value["tool"], "excel_write_to_sheet");
    assert_eq!(value["arguments"]["range"], "C1:C10");
    assert!(!stdout.contains("## "));
}

#[test]
fn schemas_flag_prints_argument_schemas() {
    let stdout = run_demo(&["--schemas"]);
    let blocks = fenced_json(&stdout);

    assert_eq!(blocks.len(), 5);
    assert!(stdout.contains("## excel_add_vba_module"));
    assert!(blocks.iter().all(|schema| schema["type"] == "object"));
}
