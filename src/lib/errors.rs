use std::{io, path::PathBuf, time::Duration};

use config::ConfigError as ConfigLoaderError;
use rmcp::model::ErrorData;
use thiserror::Error;

/// Errors that can occur while loading or validating the check configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures raised while talking to the server under test.
///
/// Every variant ends the run as a failed check; none are retried.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("failed to launch {path}: {source}")]
    Launch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("server pipe {stream} is unavailable")]
    PipeUnavailable { stream: &'static str },
    #[error("I/O failed while {action}: {source}")]
    Io {
        action: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("server closed stdout before answering `{method}`")]
    EmptyResponse { method: &'static str },
    #[error("no response to `{method}` within {}s", .timeout.as_secs())]
    ResponseTimeout {
        method: &'static str,
        timeout: Duration,
    },
    #[error("response to `{method}` is not valid JSON-RPC: {source}")]
    MalformedResponse {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("response to `{method}` is missing `{field}`")]
    MissingField {
        method: &'static str,
        field: &'static str,
    },
    #[error("server rejected `{method}` (code {}): {}", .error.code.0, .error.message)]
    Rpc { method: &'static str, error: ErrorData },
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn rpc_error_message_includes_code_and_reason() {
        let error = CheckError::Rpc {
            method: "tools/list",
            error: ErrorData::new(ErrorCode::METHOD_NOT_FOUND, "unknown method", None),
        };

        let rendered = error.to_string();
        assert!(rendered.contains("tools/list"), "message: {rendered}");
        assert!(rendered.contains("-32601"), "message: {rendered}");
        assert!(rendered.contains("unknown method"), "message: {rendered}");
    }

    #[test]
    fn timeout_message_reports_whole_seconds() {
        let error = CheckError::ResponseTimeout {
            method: "initialize",
            timeout: Duration::from_secs(10),
        };
        assert_eq!(error.to_string(), "no response to `initialize` within 10s");
    }
}
