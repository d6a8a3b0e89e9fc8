use std::{path::Path, time::Duration};

use serde::Deserialize;

use crate::lib::errors::ConfigError;

/// Tools the server must advertise for the check to pass.
pub const DEFAULT_EXPECTED_TOOLS: [&str; 4] = [
    "excel_add_data_validation",
    "excel_add_conditional_formatting",
    "excel_execute_vba",
    "excel_add_vba_module",
];
pub const DEFAULT_RESPONSE_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 5;

const MAX_RESPONSE_TIMEOUT_SECS: u64 = 300;
const MAX_SHUTDOWN_TIMEOUT_SECS: u64 = 60;

/// Registration check settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSection {
    pub expected_tools: Vec<String>,
    pub response_timeout: Duration,
    pub shutdown_timeout: Duration,
}

impl Default for CheckSection {
    fn default() -> Self {
        Self {
            expected_tools: DEFAULT_EXPECTED_TOOLS.iter().map(|s| s.to_string()).collect(),
            response_timeout: Duration::from_secs(DEFAULT_RESPONSE_TIMEOUT_SECS),
            shutdown_timeout: Duration::from_secs(DEFAULT_SHUTDOWN_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawCheckSection {
    pub expected_tools: Option<Vec<String>>,
    pub response_timeout_secs: Option<u64>,
    pub shutdown_timeout_secs: Option<u64>,
}

pub fn parse_check_section(
    raw: Option<RawCheckSection>,
    path: &Path,
) -> Result<CheckSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    let defaults = CheckSection::default();

    let expected_tools = match raw.expected_tools {
        Some(tools) => validate_expected_tools(tools, path)?,
        None => defaults.expected_tools,
    };
    let response_timeout_secs = raw
        .response_timeout_secs
        .unwrap_or(DEFAULT_RESPONSE_TIMEOUT_SECS);
    validate_timeout(
        response_timeout_secs,
        MAX_RESPONSE_TIMEOUT_SECS,
        "check.response_timeout_secs",
        path,
    )?;
    let shutdown_timeout_secs = raw
        .shutdown_timeout_secs
        .unwrap_or(DEFAULT_SHUTDOWN_TIMEOUT_SECS);
    validate_timeout(
        shutdown_timeout_secs,
        MAX_SHUTDOWN_TIMEOUT_SECS,
        "check.shutdown_timeout_secs",
        path,
    )?;

    Ok(CheckSection {
        expected_tools,
        response_timeout: Duration::from_secs(response_timeout_secs),
        shutdown_timeout: Duration::from_secs(shutdown_timeout_secs),
    })
}

fn validate_expected_tools(tools: Vec<String>, path: &Path) -> Result<Vec<String>, ConfigError> {
    if tools.is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "check.expected_tools",
            message: "List at least one tool name".into(),
        });
    }
    if tools.iter().any(|tool| tool.trim().is_empty()) {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "check.expected_tools",
            message: "Tool names must not be blank".into(),
        });
    }
    Ok(tools)
}

fn validate_timeout(
    secs: u64,
    max: u64,
    field: &'static str,
    path: &Path,
) -> Result<(), ConfigError> {
    if (1..=max).contains(&secs) {
        return Ok(());
    }

    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field,
        message: format!("Use a value in the range 1-{max} seconds"),
    })
}
