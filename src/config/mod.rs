//! Load and validate the registration check configuration.
use std::{
    env,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::error;

use crate::lib::errors::ConfigError;

pub mod check;
pub mod server;
pub mod telemetry;

pub use check::{
    parse_check_section, CheckSection, RawCheckSection, DEFAULT_EXPECTED_TOOLS,
    DEFAULT_RESPONSE_TIMEOUT_SECS, DEFAULT_SHUTDOWN_TIMEOUT_SECS,
};
pub use server::{parse_server_section, RawServerSection, ServerSection};

pub const CONFIG_ENV_KEY: &str = "EXCEL_MCP_CHECK_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "excel-mcp-check.toml";

/// Top-level configuration container.
#[derive(Debug, Clone, Default)]
pub struct CheckConfig {
    pub server: ServerSection,
    pub check: CheckSection,
    /// File the settings came from; `None` when running on defaults.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawCheckConfig {
    server: Option<RawServerSection>,
    check: Option<RawCheckSection>,
}

impl CheckConfig {
    /// Prefer `EXCEL_MCP_CHECK_CONFIG` if set, then `excel-mcp-check.toml`
    /// in the working directory, then built-in defaults.
    pub fn load_from_env_or_default() -> Result<Self, ConfigError> {
        if let Ok(value) = env::var(CONFIG_ENV_KEY) {
            if !value.trim().is_empty() {
                let path = PathBuf::from(value);
                telemetry::log_config_source(Some(&path), true);
                return Self::load_from_path(path);
            }
        }

        let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
        if default_path.is_file() {
            telemetry::log_config_source(Some(&default_path), false);
            return Self::load_from_path(default_path);
        }

        telemetry::log_config_source(None, false);
        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        let builder = config::Config::builder().add_source(config::File::from(path.clone()));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "excel_mcp::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawCheckConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "excel_mcp::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, &path).map_err(|err| {
            error!(
                target: "excel_mcp::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawCheckConfig, path: &Path) -> Result<Self, ConfigError> {
        let server = parse_server_section(raw.server, path)?;
        let check = parse_check_section(raw.check, path)?;

        Ok(Self {
            server,
            check,
            source_path: Some(path.to_path_buf()),
        })
    }
}
