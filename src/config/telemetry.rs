use std::path::Path;

use tracing::{debug, info};

use super::{CheckConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_config_source(path: Option<&Path>, from_env: bool) {
    match (path, from_env) {
        (Some(path), true) => info!(
            target: "excel_mcp::config",
            path = %path.display(),
            "Loading configuration using EXCEL_MCP_CHECK_CONFIG environment variable"
        ),
        (Some(path), false) => info!(
            target: "excel_mcp::config",
            path = %path.display(),
            "Loading configuration from working directory"
        ),
        (None, _) => debug!(
            target: "excel_mcp::config",
            env = CONFIG_ENV_KEY,
            default = DEFAULT_CONFIG_PATH,
            "No configuration file found; using built-in defaults"
        ),
    }
}

pub fn log_loaded(config: &CheckConfig) {
    info!(
        target: "excel_mcp::config",
        path = ?config.source_path,
        server_path = ?config.server.path,
        server_args = ?config.server.args,
        expected_tools = config.check.expected_tools.len(),
        response_timeout_secs = config.check.response_timeout.as_secs(),
        shutdown_timeout_secs = config.check.shutdown_timeout.as_secs(),
        "Configuration loaded"
    );
}
